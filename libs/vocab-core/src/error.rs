//! Error types for vocab-core.

use thiserror::Error;

/// Result type alias for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;

/// A stored word that cannot be turned into a valid record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("missing source text")]
    MissingSource,

    #[error("missing target text")]
    MissingTarget,

    #[error("easiness factor {0} is below the 1.3 floor")]
    EasinessBelowFloor(f64),

    #[error("invalid due date: {0}")]
    InvalidDueDate(String),
}

/// Errors that can occur while importing vocabulary lists.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("CSV header has no {0} column")]
    MissingColumn(&'static str),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

/// Contract violations reported by a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("the session queue is exhausted")]
    EmptyQueue,

    #[error("no prompt is awaiting an answer")]
    NoCurrentItem,

    #[error("the session was terminated")]
    SessionClosed,
}
