//! Core quiz engine shared by the vocabulary trainer drivers.
//!
//! Provides:
//! - Word records and the in-memory word store
//! - SM-2 style spaced repetition scheduling
//! - Typo-tolerant answer matching (Levenshtein distance)
//! - Quiz session queue with requeue-on-miss
//! - Importers for `source : target` text and CSV vocabulary lists

pub mod algorithm;
pub mod error;
pub mod matching;
pub mod parser;
pub mod session;
pub mod store;
pub mod types;

pub use algorithm::{Scheduler, Sm2};
pub use error::{ParseError, RecordError, Result, SessionError};
pub use matching::{levenshtein_distance, matches, normalize, tolerance};
pub use parser::{parse_csv, parse_text, ImportReport, SkippedLine};
pub use session::{
    AnswerOutcome, Next, Prompt, QuizSession, SessionState, SessionStats, Verdict,
};
pub use store::{LoadedWords, RejectedRecord, StatusCounts, WordId, WordStore};
pub use types::{Direction, Rating, SessionFilter, StoredWord, WordRecord, WordStatus};
