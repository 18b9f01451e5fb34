//! Subcommand implementations.
//!
//! Every command takes its repository, the study day and an output writer so
//! it can be driven from tests.

pub mod stats;
pub mod study;
pub mod words;

use anyhow::Context;
use chrono::NaiveDate;
use vocab_core::WordStore;

use crate::db::WordRepository;

/// Load the store, logging (and skipping) any invalid stored words.
pub fn load_store<R: WordRepository>(repo: &R, today: NaiveDate) -> anyhow::Result<WordStore> {
    let loaded = repo.load(today).context("loading words")?;
    for rejected in &loaded.rejected {
        tracing::warn!(
            position = rejected.position,
            reason = %rejected.reason,
            "skipping invalid word record"
        );
    }
    Ok(loaded.store)
}
