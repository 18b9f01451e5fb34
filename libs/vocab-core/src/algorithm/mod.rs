//! Spaced repetition scheduling.

pub mod sm2;

pub use sm2::Sm2;

use crate::types::{Rating, WordRecord};
use chrono::NaiveDate;

/// Trait for spaced repetition schedulers.
pub trait Scheduler {
    /// Scheduler identifier.
    fn name(&self) -> &'static str;

    /// Apply one review to `word`, as of `today`.
    ///
    /// Implementations must leave the record valid for any input record.
    fn review(&self, word: &WordRecord, rating: Rating, today: NaiveDate) -> WordRecord;
}
