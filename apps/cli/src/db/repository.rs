//! JSON file storage for the word collection.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tempfile::NamedTempFile;
use vocab_core::{LoadedWords, RejectedRecord, StoredWord, WordRecord, WordStore};

use crate::db::error::DbError;

type Result<T> = std::result::Result<T, DbError>;

/// Load/save boundary for the word collection.
pub trait WordRepository {
    /// Read every stored word. Entries that fail validation are reported in
    /// [`LoadedWords::rejected`] instead of failing the load.
    fn load(&self, today: NaiveDate) -> Result<LoadedWords>;

    /// Replace the stored words. Entries that were rejected on load are
    /// written back untouched.
    fn save(&self, words: &[WordRecord]) -> Result<()>;
}

/// Words kept as a pretty-printed JSON array in a single file.
#[derive(Debug, Clone)]
pub struct JsonRepository {
    path: PathBuf,
}

impl JsonRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> DbError {
        DbError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn json_error(&self, source: serde_json::Error) -> DbError {
        DbError::Json {
            path: self.path.clone(),
            source,
        }
    }

    /// Raw entries of the current file, or `None` when it does not exist.
    fn read_entries(&self) -> Result<Option<Vec<serde_json::Value>>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        let entries = serde_json::from_str(&json).map_err(|e| self.json_error(e))?;
        Ok(Some(entries))
    }
}

/// Whether a raw entry would be dropped by [`WordRepository::load`].
fn is_rejected(entry: &serde_json::Value) -> bool {
    match serde_json::from_value::<StoredWord>(entry.clone()) {
        // The date only fills a missing due date, it never decides rejection.
        Ok(stored) => stored.into_record(NaiveDate::MIN).is_err(),
        Err(_) => true,
    }
}

impl WordRepository for JsonRepository {
    fn load(&self, today: NaiveDate) -> Result<LoadedWords> {
        let Some(entries) = self.read_entries()? else {
            tracing::info!(path = %self.path.display(), "no word file yet, starting empty");
            return Ok(LoadedWords::default());
        };

        let mut decoded = Vec::with_capacity(entries.len());
        let mut undecodable = Vec::new();
        for (position, entry) in entries.into_iter().enumerate() {
            match serde_json::from_value::<StoredWord>(entry) {
                Ok(stored) => decoded.push((position, stored)),
                Err(err) => undecodable.push(RejectedRecord {
                    position,
                    reason: err.to_string(),
                }),
            }
        }

        let mut loaded = WordStore::from_stored(decoded, today);
        loaded.rejected.extend(undecodable);
        loaded.rejected.sort_by_key(|r| r.position);

        tracing::debug!(
            path = %self.path.display(),
            words = loaded.store.len(),
            rejected = loaded.rejected.len(),
            "words loaded"
        );
        Ok(loaded)
    }

    /// Write to a temp file beside the target, then rename over it.
    fn save(&self, words: &[WordRecord]) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|e| self.io_error(e))?;

        let kept: Vec<serde_json::Value> = self
            .read_entries()?
            .unwrap_or_default()
            .into_iter()
            .filter(is_rejected)
            .collect();
        if !kept.is_empty() {
            tracing::debug!(
                path = %self.path.display(),
                count = kept.len(),
                "keeping unreadable entries in the word file"
            );
        }

        let mut entries = words
            .iter()
            .map(serde_json::to_value)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| self.json_error(e))?;
        entries.extend(kept);
        let json = serde_json::to_string_pretty(&entries).map_err(|e| self.json_error(e))?;

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| self.io_error(e))?;
        tmp.write_all(json.as_bytes())
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| self.io_error(e))?;
        tmp.persist(&self.path).map_err(|e| self.io_error(e.error))?;

        tracing::debug!(path = %self.path.display(), words = words.len(), "words saved");
        Ok(())
    }
}

/// Write every word with its schedule as CSV.
pub fn export_csv<W: Write>(words: &[WordRecord], out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for word in words {
        writer.serialize(word)?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}
