//! In-memory word collection.

use chrono::NaiveDate;
use serde::Serialize;

use crate::matching::normalize;
use crate::types::{StoredWord, WordRecord, WordStatus};

/// Index of a word inside a [`WordStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WordId(usize);

/// A stored word that was dropped while loading.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRecord {
    /// Position of the entry in the stored collection.
    pub position: usize,
    pub reason: String,
}

/// Result of loading a stored collection: valid words plus what was skipped.
#[derive(Debug, Default)]
pub struct LoadedWords {
    pub store: WordStore,
    pub rejected: Vec<RejectedRecord>,
}

/// Word counts by learning status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub total: usize,
    pub new: usize,
    pub learning: usize,
    pub validated: usize,
    pub due: usize,
}

/// The word collection a session works on. Lookup and update only; loading
/// and saving belong to the storage layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordStore {
    words: Vec<WordRecord>,
}

impl WordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate stored entries, keeping the good ones. Entries are given as
    /// `(position, entry)` so rejections point at the original location.
    /// Entries without an id get fresh ones after the highest stored id.
    pub fn from_stored<I>(entries: I, today: NaiveDate) -> LoadedWords
    where
        I: IntoIterator<Item = (usize, StoredWord)>,
    {
        let mut loaded = LoadedWords::default();
        for (position, stored) in entries {
            match stored.into_record(today) {
                Ok(word) => loaded.store.words.push(word),
                Err(err) => loaded.rejected.push(RejectedRecord {
                    position,
                    reason: err.to_string(),
                }),
            }
        }

        let mut next_id = loaded.store.next_id();
        for word in loaded.store.words.iter_mut().filter(|w| w.id == 0) {
            word.id = next_id;
            next_id += 1;
        }
        loaded
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[WordRecord] {
        &self.words
    }

    pub fn into_records(self) -> Vec<WordRecord> {
        self.words
    }

    pub fn get(&self, id: WordId) -> Option<&WordRecord> {
        self.words.get(id.0)
    }

    pub fn get_mut(&mut self, id: WordId) -> Option<&mut WordRecord> {
        self.words.get_mut(id.0)
    }

    pub fn ids(&self) -> impl Iterator<Item = WordId> {
        (0..self.words.len()).map(WordId)
    }

    /// Whether the same pair (compared normalized) is already stored.
    pub fn contains_pair(&self, source: &str, target: &str) -> bool {
        let (source, target) = (normalize(source), normalize(target));
        self.words
            .iter()
            .any(|w| normalize(&w.source_text) == source && normalize(&w.target_text) == target)
    }

    fn next_id(&self) -> u64 {
        self.words.iter().map(|w| w.id).max().unwrap_or(0) + 1
    }

    /// Add a fresh word unless the pair is already present.
    pub fn insert(&mut self, source: &str, target: &str, today: NaiveDate) -> Option<WordId> {
        if self.contains_pair(source, target) {
            return None;
        }
        let word = WordRecord::fresh(self.next_id(), source, target, today);
        self.words.push(word);
        Some(WordId(self.words.len() - 1))
    }

    /// Add imported words, skipping duplicates. Returns how many were added.
    /// Incoming ids are reassigned to follow the stored ones.
    pub fn merge(&mut self, imported: Vec<WordRecord>, today: NaiveDate) -> usize {
        imported
            .iter()
            .filter(|w| self.insert(&w.source_text, &w.target_text, today).is_some())
            .count()
    }

    pub fn status_counts(&self, today: NaiveDate) -> StatusCounts {
        let mut counts = StatusCounts {
            total: self.words.len(),
            ..Default::default()
        };
        for word in &self.words {
            match word.status {
                WordStatus::New => counts.new += 1,
                WordStatus::Learning => counts.learning += 1,
                WordStatus::Validated => counts.validated += 1,
            }
            if word.is_due(today) {
                counts.due += 1;
            }
        }
        counts
    }

    pub fn reset_all(&mut self, today: NaiveDate) {
        for word in &mut self.words {
            word.reset_schedule(today);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;
    use pretty_assertions::assert_eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    #[test]
    fn insert_assigns_increasing_ids() {
        let mut store = WordStore::new();
        let a = store.insert("cat", "chat", today()).unwrap();
        let b = store.insert("dog", "chien", today()).unwrap();
        assert_eq!(store.get(a).unwrap().id, 1);
        assert_eq!(store.get(b).unwrap().id, 2);
    }

    #[test]
    fn insert_skips_normalized_duplicates() {
        let mut store = WordStore::new();
        assert!(store.insert("Café", "coffee", today()).is_some());
        assert!(store.insert("cafe ", "Coffee", today()).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn merge_counts_added_words() {
        let mut store = WordStore::new();
        store.insert("cat", "chat", today());
        let imported = vec![
            WordRecord::fresh(1, "cat", "chat", today()),
            WordRecord::fresh(2, "dog", "chien", today()),
        ];
        assert_eq!(store.merge(imported, today()), 1);
        assert_eq!(store.words()[1].id, 2);
    }

    #[test]
    fn load_reports_and_skips_invalid_entries() {
        let entries = vec![
            StoredWord {
                source: Some("cat".into()),
                target: Some("chat".into()),
                ..Default::default()
            },
            StoredWord {
                source: Some("dog".into()),
                target: None,
                ..Default::default()
            },
        ];
        let loaded = WordStore::from_stored(entries.into_iter().enumerate(), today());
        assert_eq!(loaded.store.len(), 1);
        assert_eq!(loaded.rejected.len(), 1);
        assert_eq!(loaded.rejected[0].position, 1);
        assert_eq!(loaded.rejected[0].reason, "missing target text");
    }

    #[test]
    fn missing_ids_follow_highest_stored_id() {
        let entries = vec![
            StoredWord {
                id: Some(2),
                source: Some("cat".into()),
                target: Some("chat".into()),
                ..Default::default()
            },
            StoredWord {
                source: Some("dog".into()),
                target: Some("chien".into()),
                ..Default::default()
            },
            StoredWord {
                source: Some("bird".into()),
                target: Some("oiseau".into()),
                ..Default::default()
            },
        ];
        let loaded = WordStore::from_stored(entries.into_iter().enumerate(), today());
        let ids: Vec<u64> = loaded.store.words().iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![2, 3, 4]);
    }

    #[test]
    fn status_counts_include_due_words() {
        let mut store = WordStore::new();
        store.insert("cat", "chat", today());
        let dog = store.insert("dog", "chien", today()).unwrap();
        {
            let word = store.get_mut(dog).unwrap();
            word.status = WordStatus::Validated;
            word.due_date = today() + Days::new(3);
        }
        let counts = store.status_counts(today());
        assert_eq!(
            counts,
            StatusCounts {
                total: 2,
                new: 1,
                learning: 0,
                validated: 1,
                due: 1,
            }
        );
    }

    #[test]
    fn reset_keeps_lapses() {
        let mut store = WordStore::new();
        let id = store.insert("cat", "chat", today()).unwrap();
        {
            let word = store.get_mut(id).unwrap();
            word.lapses = 2;
            word.repetitions = 3;
            word.status = WordStatus::Validated;
        }
        store.reset_all(today());
        let word = store.get(id).unwrap();
        assert_eq!(word.lapses, 2);
        assert_eq!(word.repetitions, 0);
        assert_eq!(word.status, WordStatus::New);
    }
}
