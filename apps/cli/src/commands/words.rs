//! Commands that manage the word collection.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use anyhow::Context;
use chrono::NaiveDate;
use vocab_core::{parse_csv, parse_text, ImportReport};

use super::load_store;
use crate::db::{export_csv, WordRepository};

/// Import `source : target` lines from a text file.
pub fn import_text<R: WordRepository, W: Write>(
    repo: &R,
    file: &Path,
    today: NaiveDate,
    out: &mut W,
) -> anyhow::Result<usize> {
    let content = fs::read_to_string(file)
        .with_context(|| format!("reading {}", file.display()))?;
    let report = parse_text(&content, today);
    merge_import(repo, report, today, out)
}

/// Import a CSV file with a header row.
pub fn import_csv<R: WordRepository, W: Write>(
    repo: &R,
    file: &Path,
    today: NaiveDate,
    out: &mut W,
) -> anyhow::Result<usize> {
    let input = File::open(file).with_context(|| format!("opening {}", file.display()))?;
    let report = parse_csv(input, today).with_context(|| format!("parsing {}", file.display()))?;
    merge_import(repo, report, today, out)
}

fn merge_import<R: WordRepository, W: Write>(
    repo: &R,
    report: ImportReport,
    today: NaiveDate,
    out: &mut W,
) -> anyhow::Result<usize> {
    for skipped in &report.skipped {
        writeln!(
            out,
            "Skipping line {} ({}): {}",
            skipped.line,
            skipped.reason.as_str(),
            skipped.content
        )?;
    }

    let mut store = load_store(repo, today)?;
    let added = store.merge(report.words, today);
    repo.save(store.words()).context("saving words")?;

    tracing::info!(added, total = store.len(), "import finished");
    writeln!(out, "Imported {added} entries. Total now: {}", store.len())?;
    Ok(added)
}

pub fn export<R: WordRepository, W: Write>(
    repo: &R,
    file: &Path,
    today: NaiveDate,
    out: &mut W,
) -> anyhow::Result<()> {
    let store = load_store(repo, today)?;
    let target = File::create(file).with_context(|| format!("creating {}", file.display()))?;
    export_csv(store.words(), target).context("writing CSV")?;
    writeln!(out, "Exported {} entries to {}", store.len(), file.display())?;
    Ok(())
}

pub fn list<R: WordRepository, W: Write>(
    repo: &R,
    today: NaiveDate,
    out: &mut W,
) -> anyhow::Result<()> {
    let store = load_store(repo, today)?;
    for word in store.words() {
        writeln!(
            out,
            "{:3} | {}  -  {}  [{}] due:{} ef:{} int:{} rep:{} lapses:{}",
            word.id,
            word.source_text,
            word.target_text,
            word.status.as_str(),
            word.due_date,
            word.easiness_factor,
            word.interval_days,
            word.repetitions,
            word.lapses
        )?;
    }
    Ok(())
}

pub fn reset<R: WordRepository, W: Write>(
    repo: &R,
    today: NaiveDate,
    out: &mut W,
) -> anyhow::Result<()> {
    let mut store = load_store(repo, today)?;
    store.reset_all(today);
    repo.save(store.words()).context("saving words")?;
    writeln!(out, "All {} words reset to new.", store.len())?;
    Ok(())
}
