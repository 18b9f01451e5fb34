//! Runtime configuration from the environment (and `.env`).

use std::path::PathBuf;

use anyhow::{bail, Context};
use vocab_core::Direction;

const APP_DIR: &str = "vocab-trainer";
const WORDS_FILE: &str = "words.json";

/// Display names for the two sides of every pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePair {
    pub source: String,
    pub target: String,
}

impl Default for LanguagePair {
    fn default() -> Self {
        Self {
            source: "English".to_string(),
            target: "French".to_string(),
        }
    }
}

impl LanguagePair {
    /// Language the user has to answer in.
    pub fn answer_language(&self, direction: Direction) -> &str {
        match direction {
            Direction::SourceToTarget => &self.target,
            Direction::TargetToSource => &self.source,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    /// Hour (0-23) at which a new study day starts.
    pub daily_reset_hour: u32,
    pub languages: LanguagePair,
}

impl Config {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = lookup("VOCAB_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);

        let daily_reset_hour = match lookup("VOCAB_DAILY_RESET_HOUR") {
            Some(raw) => {
                let hour: u32 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("VOCAB_DAILY_RESET_HOUR is not a number: {raw}"))?;
                if hour > 23 {
                    bail!("VOCAB_DAILY_RESET_HOUR must be between 0 and 23, got {hour}");
                }
                hour
            }
            None => 0,
        };

        let defaults = LanguagePair::default();
        let languages = LanguagePair {
            source: lookup("VOCAB_SOURCE_LANG").unwrap_or(defaults.source),
            target: lookup("VOCAB_TARGET_LANG").unwrap_or(defaults.target),
        };

        Ok(Self {
            data_dir,
            daily_reset_hour,
            languages,
        })
    }

    pub fn words_path(&self) -> PathBuf {
        self.data_dir.join(WORDS_FILE)
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config(&[]).unwrap();
        assert_eq!(config.daily_reset_hour, 0);
        assert_eq!(config.languages, LanguagePair::default());
        assert!(config.data_dir.ends_with(APP_DIR));
    }

    #[test]
    fn reads_overrides() {
        let config = config(&[
            ("VOCAB_DATA_DIR", "/tmp/vocab"),
            ("VOCAB_DAILY_RESET_HOUR", "4"),
            ("VOCAB_TARGET_LANG", "Spanish"),
        ])
        .unwrap();
        assert_eq!(config.words_path(), PathBuf::from("/tmp/vocab/words.json"));
        assert_eq!(config.daily_reset_hour, 4);
        assert_eq!(config.languages.target, "Spanish");
        assert_eq!(config.languages.source, "English");
    }

    #[test]
    fn rejects_bad_reset_hour() {
        assert!(config(&[("VOCAB_DAILY_RESET_HOUR", "24")]).is_err());
        assert!(config(&[("VOCAB_DAILY_RESET_HOUR", "noon")]).is_err());
    }

    #[test]
    fn answer_language_follows_direction() {
        let languages = LanguagePair::default();
        assert_eq!(languages.answer_language(Direction::SourceToTarget), "French");
        assert_eq!(languages.answer_language(Direction::TargetToSource), "English");
    }
}
