//! Importers for vocabulary lists.
//!
//! # Text format
//! ```text
//! # comment
//! cat : chat
//! good morning : bonjour
//! ```
//!
//! # CSV format
//! A header row naming a source column (`source`, `en` or `english`) and a
//! target column (`target`, `fr` or `french`); other columns are ignored.

use std::io::Read;

use chrono::NaiveDate;

use crate::error::ParseError;
use crate::types::WordRecord;

const SOURCE_COLUMNS: &[&str] = &["source", "en", "english"];
const TARGET_COLUMNS: &[&str] = &["target", "fr", "french"];

/// Why an input line was not imported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NoSeparator,
    EmptySide,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoSeparator => "no ':'",
            Self::EmptySide => "empty side",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub line: usize,
    pub content: String,
    pub reason: SkipReason,
}

/// Fresh words read from an import source plus the lines that were dropped.
#[derive(Debug, Default)]
pub struct ImportReport {
    pub words: Vec<WordRecord>,
    pub skipped: Vec<SkippedLine>,
}

impl ImportReport {
    fn push(&mut self, source: &str, target: &str, today: NaiveDate) {
        let id = self.words.len() as u64 + 1;
        self.words.push(WordRecord::fresh(id, source, target, today));
    }
}

/// Parse `source : target` lines, splitting on the first colon.
pub fn parse_text(content: &str, today: NaiveDate) -> ImportReport {
    let mut report = ImportReport::default();

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let skip = |reason| SkippedLine {
            line: idx + 1,
            content: line.to_string(),
            reason,
        };

        let Some((source, target)) = line.split_once(':') else {
            report.skipped.push(skip(SkipReason::NoSeparator));
            continue;
        };
        let (source, target) = (source.trim(), target.trim());
        if source.is_empty() || target.is_empty() {
            report.skipped.push(skip(SkipReason::EmptySide));
            continue;
        }

        report.push(source, target, today);
    }

    report
}

/// Parse a CSV vocabulary list with a header row.
pub fn parse_csv<R: Read>(input: R, today: NaiveDate) -> Result<ImportReport, ParseError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(input);

    let headers = reader.headers()?.clone();
    let find = |names: &[&str]| {
        headers
            .iter()
            .position(|h| names.iter().any(|n| h.trim().eq_ignore_ascii_case(n)))
    };
    let source_col = find(SOURCE_COLUMNS).ok_or(ParseError::MissingColumn("source"))?;
    let target_col = find(TARGET_COLUMNS).ok_or(ParseError::MissingColumn("target"))?;

    let mut report = ImportReport::default();
    for record in reader.records() {
        let record = record?;
        let source = record.get(source_col).unwrap_or("").trim();
        let target = record.get(target_col).unwrap_or("").trim();
        if source.is_empty() || target.is_empty() {
            report.skipped.push(SkippedLine {
                line: record.position().map_or(0, |p| p.line() as usize),
                content: record.iter().collect::<Vec<_>>().join(","),
                reason: SkipReason::EmptySide,
            });
            continue;
        }
        report.push(source, target, today);
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    #[test]
    fn parse_single_pair() {
        let report = parse_text("cat : chat", today());
        assert_eq!(report.words.len(), 1);
        assert_eq!(report.words[0].source_text, "cat");
        assert_eq!(report.words[0].target_text, "chat");
        assert_eq!(report.words[0].due_date, today());
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn split_on_first_colon_only() {
        let report = parse_text("ratio : rapport : proportion", today());
        assert_eq!(report.words[0].target_text, "rapport : proportion");
    }

    #[test]
    fn skip_comments_and_blank_lines() {
        let report = parse_text("# animals\n\ncat:chat\n   \ndog:chien\n", today());
        assert_eq!(report.words.len(), 2);
        assert_eq!(report.words[1].id, 2);
    }

    #[test]
    fn report_malformed_lines() {
        let report = parse_text("cat chat\n : chien\nbird:", today());
        assert!(report.words.is_empty());
        assert_eq!(
            report.skipped,
            vec![
                SkippedLine {
                    line: 1,
                    content: "cat chat".into(),
                    reason: SkipReason::NoSeparator,
                },
                SkippedLine {
                    line: 2,
                    content: ": chien".into(),
                    reason: SkipReason::EmptySide,
                },
                SkippedLine {
                    line: 3,
                    content: "bird:".into(),
                    reason: SkipReason::EmptySide,
                },
            ]
        );
    }

    #[test]
    fn parse_csv_with_legacy_headers() {
        let input = "id,English,French\n1,cat,chat\n2,dog,chien\n";
        let report = parse_csv(input.as_bytes(), today()).unwrap();
        assert_eq!(report.words.len(), 2);
        assert_eq!(report.words[1].source_text, "dog");
        assert_eq!(report.words[1].target_text, "chien");
    }

    #[test]
    fn parse_csv_skips_rows_with_empty_side() {
        let input = "source,target\ncat,chat\nbird,\n";
        let report = parse_csv(input.as_bytes(), today()).unwrap();
        assert_eq!(report.words.len(), 1);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].line, 3);
    }

    #[test]
    fn parse_csv_requires_columns() {
        let input = "word,meaning\ncat,chat\n";
        let result = parse_csv(input.as_bytes(), today());
        assert!(matches!(result, Err(ParseError::MissingColumn("source"))));
    }
}
