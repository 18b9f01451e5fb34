//! Quiz session queue.
//!
//! A session is built from a word store and a filter, then driven with
//! [`QuizSession::next`] and one of [`QuizSession::answer`],
//! [`QuizSession::skip`] or [`QuizSession::reveal`] per prompt until the
//! queue runs dry ([`SessionState::Exhausted`]) or the driver calls
//! [`QuizSession::terminate`] ([`SessionState::Aborted`]).
//!
//! The session owns the store for its lifetime; every scored answer is
//! applied to the store immediately, so [`QuizSession::store`] can be
//! persisted at any point.

use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::algorithm::{Scheduler, Sm2};
use crate::error::{Result, SessionError};
use crate::matching::matches;
use crate::store::{WordId, WordStore};
use crate::types::{Direction, Rating, SessionFilter, WordRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Active,
    Exhausted,
    Aborted,
}

/// Running counts for a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    pub correct: usize,
    pub incorrect: usize,
    pub skipped: usize,
    /// Items still to be answered, including the one on screen.
    pub remaining: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Correct,
    Incorrect,
}

impl Verdict {
    pub fn is_correct(self) -> bool {
        self == Self::Correct
    }
}

/// A word presented in a chosen direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizItem {
    pub word: WordId,
    pub direction: Direction,
}

/// What the driver shows the user. Never carries the expected answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub word: WordId,
    pub direction: Direction,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Next {
    Prompt(Prompt),
    Exhausted(SessionStats),
}

/// Result of scoring one answer.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerOutcome {
    pub verdict: Verdict,
    pub expected: String,
    /// The record after scheduling.
    pub word: WordRecord,
    pub stats: SessionStats,
}

/// One quiz run over a word store.
pub struct QuizSession<R, S = Sm2> {
    store: WordStore,
    scheduler: S,
    rng: R,
    today: NaiveDate,
    /// Pending items; the next one is at the end.
    pending: Vec<WordId>,
    current: Option<QuizItem>,
    stats: SessionStats,
    state: SessionState,
}

impl<R: Rng> QuizSession<R, Sm2> {
    /// Build a session with the default SM-2 scheduler.
    pub fn build(store: WordStore, filter: SessionFilter, today: NaiveDate, rng: R) -> Self {
        Self::with_scheduler(store, filter, today, rng, Sm2::default())
    }
}

impl<R: Rng, S: Scheduler> QuizSession<R, S> {
    pub fn with_scheduler(
        store: WordStore,
        filter: SessionFilter,
        today: NaiveDate,
        mut rng: R,
        scheduler: S,
    ) -> Self {
        let mut pending: Vec<WordId> = store
            .ids()
            .filter(|&id| store.get(id).is_some_and(|w| filter.admits(w, today)))
            .collect();
        pending.shuffle(&mut rng);

        tracing::debug!(
            filter = filter.as_str(),
            scheduler = scheduler.name(),
            candidates = pending.len(),
            "quiz session built"
        );

        Self {
            store,
            scheduler,
            rng,
            today,
            pending,
            current: None,
            stats: SessionStats::default(),
            state: SessionState::Active,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn store(&self) -> &WordStore {
        &self.store
    }

    /// End the session and hand the store back for saving.
    pub fn into_store(self) -> WordStore {
        self.store
    }

    pub fn stats(&self) -> SessionStats {
        SessionStats {
            remaining: self.pending.len() + usize::from(self.current.is_some()),
            ..self.stats
        }
    }

    /// Present the next item. While a prompt is unanswered it is presented
    /// again rather than replaced.
    pub fn next(&mut self) -> Result<Next> {
        self.ensure_open()?;
        if self.state == SessionState::Exhausted {
            return Err(SessionError::EmptyQueue);
        }

        let item = match self.current {
            Some(item) => item,
            None => {
                let Some(word) = self.pending.pop() else {
                    self.state = SessionState::Exhausted;
                    tracing::debug!(stats = ?self.stats(), "quiz session exhausted");
                    return Ok(Next::Exhausted(self.stats()));
                };
                let direction = if self.rng.gen_bool(0.5) {
                    Direction::SourceToTarget
                } else {
                    Direction::TargetToSource
                };
                let item = QuizItem { word, direction };
                self.current = Some(item);
                item
            }
        };

        let text = item.direction.prompt(self.word(item.word)?).to_string();
        Ok(Next::Prompt(Prompt {
            word: item.word,
            direction: item.direction,
            text,
        }))
    }

    /// Score an answer to the current prompt and reschedule the word.
    ///
    /// A correct answer retires the item for this session; a wrong one puts
    /// it back at a random later position.
    pub fn answer(&mut self, given: &str) -> Result<AnswerOutcome> {
        self.ensure_open()?;
        let item = self.current.ok_or(SessionError::NoCurrentItem)?;

        let word = self.word(item.word)?;
        let expected = item.direction.expected(word).to_string();
        let verdict = if matches(&expected, given) {
            Verdict::Correct
        } else {
            Verdict::Incorrect
        };
        let updated = self.scheduler.review(
            word,
            Rating::from_correct(verdict.is_correct()),
            self.today,
        );

        if let Some(slot) = self.store.get_mut(item.word) {
            *slot = updated.clone();
        }
        self.current = None;
        match verdict {
            Verdict::Correct => self.stats.correct += 1,
            Verdict::Incorrect => {
                self.stats.incorrect += 1;
                self.requeue(item.word);
            }
        }

        tracing::debug!(
            word = updated.id,
            ?verdict,
            interval = updated.interval_days,
            due = %updated.due_date,
            "answer scored"
        );

        Ok(AnswerOutcome {
            verdict,
            expected,
            word: updated,
            stats: self.stats(),
        })
    }

    /// Put the current item back without scoring it.
    pub fn skip(&mut self) -> Result<SessionStats> {
        self.ensure_open()?;
        let item = self.current.take().ok_or(SessionError::NoCurrentItem)?;
        self.stats.skipped += 1;
        self.requeue(item.word);
        Ok(self.stats())
    }

    /// Show the expected answer. The item stays current and unscored.
    pub fn reveal(&self) -> Result<String> {
        self.ensure_open()?;
        let item = self.current.ok_or(SessionError::NoCurrentItem)?;
        Ok(item.direction.expected(self.word(item.word)?).to_string())
    }

    /// Stop the session. Answers already scored stay applied to the store.
    pub fn terminate(&mut self) -> SessionStats {
        if self.state == SessionState::Active {
            self.state = SessionState::Aborted;
            self.current = None;
            tracing::debug!(stats = ?self.stats(), "quiz session aborted");
        }
        self.stats()
    }

    fn ensure_open(&self) -> Result<()> {
        match self.state {
            SessionState::Aborted => Err(SessionError::SessionClosed),
            _ => Ok(()),
        }
    }

    fn word(&self, id: WordId) -> Result<&WordRecord> {
        self.store.get(id).ok_or(SessionError::NoCurrentItem)
    }

    /// Insert at a random slot that is not the next one up, when there is a
    /// choice. O(1): the displaced item moves to the front.
    fn requeue(&mut self, word: WordId) {
        if self.pending.is_empty() {
            self.pending.push(word);
            return;
        }
        let slot = self.rng.gen_range(0..self.pending.len());
        let displaced = std::mem::replace(&mut self.pending[slot], word);
        self.pending.push(displaced);
    }
}
