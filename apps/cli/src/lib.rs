//! Command line driver for the vocabulary trainer.

pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod logging;

use std::io;

use crate::cli::{Cli, Command};
use crate::commands::study::QuizOptions;
use crate::config::Config;
use crate::db::date_utils::get_adjusted_today;
use crate::db::JsonRepository;

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = Config::from_env()?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }

    let repo = JsonRepository::new(config.words_path());
    let today = get_adjusted_today(config.daily_reset_hour);
    tracing::debug!(path = %repo.path().display(), %today, "using word file");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Import { file } => {
            commands::words::import_text(&repo, &file, today, &mut out)?;
        }
        Command::ImportCsv { file } => {
            commands::words::import_csv(&repo, &file, today, &mut out)?;
        }
        Command::ExportCsv { file } => commands::words::export(&repo, &file, today, &mut out)?,
        Command::Quiz(args) => {
            let options = QuizOptions {
                filter: args.filter(),
                seed: args.seed,
                languages: config.languages.clone(),
            };
            let stdin = io::stdin();
            let mut input = stdin.lock();
            commands::study::quiz(&repo, today, &options, &mut input, &mut out)?;
        }
        Command::Stats => {
            commands::stats::stats(&repo, today, &mut out)?;
        }
        Command::List => commands::words::list(&repo, today, &mut out)?,
        Command::Reset => commands::words::reset(&repo, today, &mut out)?,
    }
    Ok(())
}
