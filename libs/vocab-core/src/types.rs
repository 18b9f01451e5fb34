//! Core types for the vocabulary trainer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::RecordError;

/// Initial easiness factor for freshly imported words.
pub const INITIAL_EASE: f64 = 2.5;

/// Easiness factor floor; no record may go below it.
pub const MINIMUM_EASE: f64 = 1.3;

/// Word learning status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordStatus {
    #[default]
    #[serde(alias = "New")]
    New,
    #[serde(alias = "Learning")]
    Learning,
    #[serde(alias = "Validated")]
    Validated,
}

impl WordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Learning => "learning",
            Self::Validated => "validated",
        }
    }
}

/// Outcome quality of a single review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    Again,
    Hard,
    Good,
    Easy,
}

impl Rating {
    /// Map a binary verdict onto the scale.
    /// Wrong -> Again, Correct -> Good
    pub fn from_correct(correct: bool) -> Self {
        if correct {
            Self::Good
        } else {
            Self::Again
        }
    }

    pub fn is_correct(self) -> bool {
        !matches!(self, Self::Again)
    }
}

/// Which side of a pair is shown as the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Show the source text, expect the target text.
    SourceToTarget,
    /// Show the target text, expect the source text.
    TargetToSource,
}

impl Direction {
    pub fn prompt<'a>(&self, word: &'a WordRecord) -> &'a str {
        match self {
            Self::SourceToTarget => &word.source_text,
            Self::TargetToSource => &word.target_text,
        }
    }

    pub fn expected<'a>(&self, word: &'a WordRecord) -> &'a str {
        match self {
            Self::SourceToTarget => &word.target_text,
            Self::TargetToSource => &word.source_text,
        }
    }
}

/// Which words a session is built from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionFilter {
    #[default]
    All,
    /// Words whose due date is today or earlier.
    DueOnly,
    /// Words whose most recent review was a miss.
    OnlyWrong,
}

impl SessionFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::DueOnly => "due_only",
            Self::OnlyWrong => "only_wrong",
        }
    }

    pub fn admits(&self, word: &WordRecord, today: NaiveDate) -> bool {
        match self {
            Self::All => true,
            Self::DueOnly => word.is_due(today),
            Self::OnlyWrong => word.lapses > 0 && word.repetitions == 0,
        }
    }
}

/// One vocabulary pair plus its learning state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordRecord {
    pub id: u64,
    #[serde(rename = "source")]
    pub source_text: String,
    #[serde(rename = "target")]
    pub target_text: String,
    #[serde(rename = "ef")]
    pub easiness_factor: f64,
    #[serde(rename = "interval")]
    pub interval_days: u32,
    pub repetitions: u32,
    #[serde(rename = "due")]
    pub due_date: NaiveDate,
    pub lapses: u32,
    pub status: WordStatus,
}

impl WordRecord {
    /// A never-reviewed word, due today.
    pub fn fresh(id: u64, source: &str, target: &str, today: NaiveDate) -> Self {
        Self {
            id,
            source_text: source.trim().to_string(),
            target_text: target.trim().to_string(),
            easiness_factor: INITIAL_EASE,
            interval_days: 0,
            repetitions: 0,
            due_date: today,
            lapses: 0,
            status: WordStatus::New,
        }
    }

    pub fn is_due(&self, today: NaiveDate) -> bool {
        self.due_date <= today
    }

    /// Restore the fresh schedule. Lapses are history and survive.
    pub fn reset_schedule(&mut self, today: NaiveDate) {
        self.easiness_factor = INITIAL_EASE;
        self.interval_days = 0;
        self.repetitions = 0;
        self.due_date = today;
        self.status = WordStatus::New;
    }
}

/// On-disk shape of a word, tolerant of missing schedule fields and of the
/// legacy `en`/`fr` keys.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoredWord {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default, alias = "en")]
    pub source: Option<String>,
    #[serde(default, alias = "fr")]
    pub target: Option<String>,
    #[serde(default)]
    pub ef: Option<f64>,
    #[serde(default)]
    pub interval: Option<u32>,
    #[serde(default)]
    pub repetitions: Option<u32>,
    #[serde(default)]
    pub due: Option<String>,
    #[serde(default)]
    pub lapses: Option<u32>,
    #[serde(default)]
    pub status: Option<WordStatus>,
}

impl StoredWord {
    /// Validate into a record. `today` stands in for a missing due date.
    /// A missing id comes back as 0 for the caller to assign.
    pub fn into_record(self, today: NaiveDate) -> std::result::Result<WordRecord, RecordError> {
        let source = self
            .source
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(RecordError::MissingSource)?;
        let target = self
            .target
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(RecordError::MissingTarget)?;

        let easiness_factor = self.ef.unwrap_or(INITIAL_EASE);
        if easiness_factor.is_nan() || easiness_factor < MINIMUM_EASE {
            return Err(RecordError::EasinessBelowFloor(easiness_factor));
        }

        let due_date = match self.due.as_deref().map(str::trim) {
            None | Some("") => today,
            Some(raw) => {
                parse_due(raw).ok_or_else(|| RecordError::InvalidDueDate(raw.to_string()))?
            }
        };

        Ok(WordRecord {
            id: self.id.unwrap_or(0),
            source_text: source.to_string(),
            target_text: target.to_string(),
            easiness_factor,
            interval_days: self.interval.unwrap_or(0),
            repetitions: self.repetitions.unwrap_or(0),
            due_date,
            lapses: self.lapses.unwrap_or(0),
            status: self.status.unwrap_or_default(),
        })
    }
}

/// Accept a plain ISO date or an ISO date-time, keeping only the date.
fn parse_due(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    let (date, time) = (raw.get(..10)?, raw.get(10..)?);
    if !time.starts_with(['T', ' ']) {
        return None;
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}
