//! Collection statistics.

use std::io::Write;

use chrono::NaiveDate;
use vocab_core::StatusCounts;

use super::load_store;
use crate::db::WordRepository;

pub fn stats<R: WordRepository, W: Write>(
    repo: &R,
    today: NaiveDate,
    out: &mut W,
) -> anyhow::Result<StatusCounts> {
    let counts = load_store(repo, today)?.status_counts(today);
    writeln!(
        out,
        "Total: {}  Validated: {}  New: {}  Learning: {}  Due: {}",
        counts.total, counts.validated, counts.new, counts.learning, counts.due
    )?;
    Ok(counts)
}
