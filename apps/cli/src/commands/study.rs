//! Interactive quiz loop.

use std::io::{BufRead, Write};

use anyhow::Context;
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use vocab_core::{Next, QuizSession, SessionFilter, SessionStats, Verdict};

use super::load_store;
use crate::config::LanguagePair;
use crate::db::WordRepository;

/// Commands accepted in place of an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuizCommand {
    Exit,
    Skip,
    Show,
    Stats,
}

impl QuizCommand {
    fn parse(input: &str) -> Option<Self> {
        match input.to_lowercase().as_str() {
            ":exit" | ":quit" => Some(Self::Exit),
            ":skip" => Some(Self::Skip),
            ":show" => Some(Self::Show),
            ":stats" => Some(Self::Stats),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct QuizOptions {
    pub filter: SessionFilter,
    pub seed: Option<u64>,
    pub languages: LanguagePair,
}

/// Run a quiz until the queue is empty or the user quits.
///
/// Progress is saved after every scored answer and once more at the end,
/// including when the loop stops on an error.
pub fn quiz<R, I, W>(
    repo: &R,
    today: NaiveDate,
    options: &QuizOptions,
    input: &mut I,
    out: &mut W,
) -> anyhow::Result<SessionStats>
where
    R: WordRepository,
    I: BufRead,
    W: Write,
{
    let store = load_store(repo, today)?;
    if store.is_empty() {
        writeln!(out, "No words loaded. Import a file first.")?;
        return Ok(SessionStats::default());
    }

    let rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut session = QuizSession::build(store, options.filter, today, rng);
    if session.stats().remaining == 0 {
        writeln!(out, "No items to study based on the selected filters.")?;
        return Ok(session.stats());
    }

    tracing::info!(
        filter = options.filter.as_str(),
        words = session.stats().remaining,
        "quiz started"
    );
    writeln!(
        out,
        "Starting quiz. Type :exit to quit, :skip to requeue, :show to reveal, :stats for progress."
    )?;

    let result = drive(&mut session, repo, &options.languages, input, out);
    let stats = session.terminate();

    writeln!(out, "Quiz ended. Saving progress.")?;
    let saved = repo.save(session.store().words()).context("saving progress");
    result?;
    saved?;

    writeln!(
        out,
        "Correct: {}  Incorrect: {}  Skipped: {}",
        stats.correct, stats.incorrect, stats.skipped
    )?;
    Ok(stats)
}

fn drive<R, I, W>(
    session: &mut QuizSession<StdRng>,
    repo: &R,
    languages: &LanguagePair,
    input: &mut I,
    out: &mut W,
) -> anyhow::Result<()>
where
    R: WordRepository,
    I: BufRead,
    W: Write,
{
    loop {
        let prompt = match session.next()? {
            Next::Prompt(prompt) => prompt,
            Next::Exhausted(_) => return Ok(()),
        };

        write!(
            out,
            "Translate to {}: {}\n> ",
            languages.answer_language(prompt.direction),
            prompt.text
        )?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            tracing::debug!("input closed, ending quiz");
            return Ok(());
        }
        let answer = line.trim();

        match QuizCommand::parse(answer) {
            Some(QuizCommand::Exit) => return Ok(()),
            Some(QuizCommand::Skip) => {
                session.skip()?;
                writeln!(out, "Skipped.")?;
            }
            Some(QuizCommand::Show) => {
                writeln!(out, "Answer: {}", session.reveal()?)?;
            }
            Some(QuizCommand::Stats) => {
                let stats = session.stats();
                writeln!(
                    out,
                    "Correct: {}  Incorrect: {}  Skipped: {}  Remaining: {}",
                    stats.correct, stats.incorrect, stats.skipped, stats.remaining
                )?;
            }
            None => {
                let outcome = session.answer(answer)?;
                match outcome.verdict {
                    Verdict::Correct => writeln!(out, "Correct!")?,
                    Verdict::Incorrect => writeln!(out, "Wrong - expected: {}", outcome.expected)?,
                }
                repo.save(session.store().words())
                    .context("saving progress")?;
            }
        }
    }
}
