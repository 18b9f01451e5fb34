//! Command line definitions.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use vocab_core::SessionFilter;

#[derive(Debug, Parser)]
#[command(
    name = "vocab",
    version,
    about = "Vocabulary trainer with spaced repetition",
    long_about = "Drill bilingual word pairs in both directions.\n\n\
                  Review timing adapts per word (SM-2), and answers tolerate small typos."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding words.json (overrides VOCAB_DATA_DIR).
    #[arg(long = "data-dir", value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Import `source : target` lines from a text file.
    Import {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Import vocabulary from a CSV file with a header row.
    ImportCsv {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Export all words and their schedule to a CSV file.
    ExportCsv {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Start an interactive quiz.
    Quiz(QuizArgs),

    /// Show word counts by status.
    Stats,

    /// List all words.
    List,

    /// Restore the fresh schedule for every word.
    Reset,
}

#[derive(Debug, Args)]
pub struct QuizArgs {
    /// Only quiz words due today or earlier.
    #[arg(long = "due-only", conflicts_with = "only_wrong")]
    pub due_only: bool,

    /// Only quiz words missed on their last review.
    #[arg(long = "only-wrong")]
    pub only_wrong: bool,

    /// Seed for question order and direction.
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,
}

impl QuizArgs {
    pub fn filter(&self) -> SessionFilter {
        if self.due_only {
            SessionFilter::DueOnly
        } else if self.only_wrong {
            SessionFilter::OnlyWrong
        } else {
            SessionFilter::All
        }
    }
}
