//! Shared fixtures for the CLI integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use tempfile::TempDir;
use vocab_cli::commands::study::QuizOptions;
use vocab_cli::config::LanguagePair;
use vocab_cli::db::{JsonRepository, WordRepository};
use vocab_core::{SessionFilter, WordRecord};

/// A throwaway data directory with a word file inside.
pub struct TestContext {
    pub dir: TempDir,
    pub repo: JsonRepository,
}

impl TestContext {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let repo = JsonRepository::new(dir.path().join("words.json"));
        Self { dir, repo }
    }

    /// Write an input file into the data directory.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).expect("write fixture");
        path
    }

    pub fn words(&self) -> Vec<WordRecord> {
        self.repo
            .load(today())
            .expect("load words")
            .store
            .into_records()
    }

    pub fn seed_words(&self, words: &[WordRecord]) {
        self.repo.save(words).expect("save words");
    }
}

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
}

pub fn options(filter: SessionFilter) -> QuizOptions {
    QuizOptions {
        filter,
        seed: Some(42),
        languages: LanguagePair::default(),
    }
}
