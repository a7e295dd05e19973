//! Structural parsing: classify the lines of an assembled report.
//!
//! A report looks like this once the translator has wrapped the agent output:
//!
//! ```text
//! [+] agent called home, sent: 512 bytes     <- prefix line 0
//! [+] received output:                       <- prefix line 1
//!                                            <- blank
//! C:\Users\alice\*                           <- subject (listings only)
//! F\t295000\t03/31/25 12:32:05\tnotes.txt    <- data lines
//! ```
//!
//! Each report shape has a [`Classifier`]. Classifiers never fail hard: when
//! the structure is not recognized they return a fallback outcome telling
//! the renderer what to show instead.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::data::record::FIELD_SEPARATOR;
use crate::options::{ListingStrategy, ReportKind};

/// Number of translator lines that open every report.
pub const PREFIX_LINE_COUNT: usize = 2;

/// Marker that starts translator-injected lines.
pub const PREFIX_MARKER: &str = "[+]";

/// Line index of the subject for the positional listing strategy. Line 2 is
/// the blank line the translator writes after its prefix.
pub const POSITIONAL_SUBJECT_INDEX: usize = 3;

/// Why a report could not be parsed into a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoftFail {
    /// No subject line was found
    NoSubject,
    /// No line after the prefix/subject contained a tab
    NoDataLines,
}

/// Lines of a report, sorted into their roles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedReport {
    /// Translator metadata lines, verbatim
    pub prefix_lines: Vec<String>,
    /// Path being listed (directory listings only)
    pub subject_line: Option<String>,
    /// Tab-separated data lines, in input order
    pub data_lines: Vec<String>,
}

/// Result of classifying a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseOutcome {
    /// Structure recognized
    Parsed(ParsedReport),
    /// Structure not recognized; show the original lines joined back together
    Echo { lines: Vec<String>, cause: SoftFail },
    /// Listing had nothing to show; emit the "no contents" sentinel
    NoContents {
        prefix_lines: Vec<String>,
        cause: SoftFail,
    },
}

impl ParseOutcome {
    pub fn is_parsed(&self) -> bool {
        matches!(self, ParseOutcome::Parsed(_))
    }

    pub fn soft_fail(&self) -> Option<SoftFail> {
        match self {
            ParseOutcome::Parsed(_) => None,
            ParseOutcome::Echo { cause, .. } | ParseOutcome::NoContents { cause, .. } => {
                Some(*cause)
            }
        }
    }
}

/// What to parse a report as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseMode {
    Listing(ListingStrategy),
    Processes,
}

impl ParseMode {
    pub fn new(kind: ReportKind, strategy: ListingStrategy) -> Self {
        match kind {
            ReportKind::Listing => ParseMode::Listing(strategy),
            ReportKind::Processes => ParseMode::Processes,
        }
    }

    /// The classifier implementing this mode.
    pub fn classifier(&self) -> &'static dyn Classifier {
        match self {
            ParseMode::Listing(ListingStrategy::Robust) => &RobustClassifier,
            ParseMode::Listing(ListingStrategy::Positional) => &PositionalClassifier,
            ParseMode::Processes => &ProcessClassifier,
        }
    }
}

/// Sorts report lines into prefix, subject and data.
pub trait Classifier: Send + Sync {
    /// Short name used in log output
    fn name(&self) -> &'static str;

    /// Classify lines produced by [`split_lines`].
    fn classify(&self, lines: &[&str]) -> ParseOutcome;
}

/// Split on `\n`, keeping empty lines so indices stay meaningful.
pub fn split_lines(raw: &str) -> Vec<&str> {
    raw.split('\n').collect()
}

/// Classify `raw` according to `mode`.
pub fn parse(raw: &str, mode: ParseMode) -> ParseOutcome {
    let lines = split_lines(raw);
    let classifier = mode.classifier();
    let outcome = classifier.classify(&lines);
    if let Some(cause) = outcome.soft_fail() {
        debug!(
            classifier = classifier.name(),
            ?cause,
            lines = lines.len(),
            "report structure not recognized"
        );
    }
    outcome
}

pub(crate) fn is_data_line(line: &str) -> bool {
    line.contains(FIELD_SEPARATOR)
}

fn prefix_lines(lines: &[&str]) -> Vec<String> {
    lines
        .iter()
        .take(PREFIX_LINE_COUNT)
        .map(|line| line.to_string())
        .collect()
}

fn data_lines_from(lines: &[&str], start: usize) -> Vec<String> {
    lines
        .iter()
        .skip(start)
        .filter(|line| is_data_line(line))
        .map(|line| line.to_string())
        .collect()
}

fn owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| line.to_string()).collect()
}

/// A trimmed line names a path when it has a backslash, or a forward slash
/// and is not a translator line.
fn looks_like_path(line: &str) -> bool {
    line.contains('\\') || (line.contains('/') && !line.starts_with(PREFIX_MARKER))
}

/// Directory listing classifier that searches for the subject line.
#[derive(Debug, Clone, Copy, Default)]
pub struct RobustClassifier;

impl Classifier for RobustClassifier {
    fn name(&self) -> &'static str {
        "robust"
    }

    fn classify(&self, lines: &[&str]) -> ParseOutcome {
        let subject = lines
            .iter()
            .enumerate()
            .skip(PREFIX_LINE_COUNT)
            .map(|(index, line)| (index, line.trim()))
            .filter(|(_, line)| !line.is_empty())
            .find(|(_, line)| looks_like_path(line));

        let Some((subject_index, subject)) = subject else {
            return ParseOutcome::Echo {
                lines: owned(lines),
                cause: SoftFail::NoSubject,
            };
        };

        let data_lines = data_lines_from(lines, subject_index + 1);
        if data_lines.is_empty() {
            return ParseOutcome::Echo {
                lines: owned(lines),
                cause: SoftFail::NoDataLines,
            };
        }

        ParseOutcome::Parsed(ParsedReport {
            prefix_lines: prefix_lines(lines),
            subject_line: Some(subject.to_string()),
            data_lines,
        })
    }
}

/// Directory listing classifier that reads the subject from a fixed line.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalClassifier;

impl Classifier for PositionalClassifier {
    fn name(&self) -> &'static str {
        "positional"
    }

    fn classify(&self, lines: &[&str]) -> ParseOutcome {
        let prefix = prefix_lines(lines);

        let subject = lines
            .get(POSITIONAL_SUBJECT_INDEX)
            .map(|line| line.trim())
            .filter(|line| !line.is_empty());

        let Some(subject) = subject else {
            return ParseOutcome::NoContents {
                prefix_lines: prefix,
                cause: SoftFail::NoSubject,
            };
        };

        let data_lines = data_lines_from(lines, POSITIONAL_SUBJECT_INDEX + 1);
        if data_lines.is_empty() {
            return ParseOutcome::NoContents {
                prefix_lines: prefix,
                cause: SoftFail::NoDataLines,
            };
        }

        ParseOutcome::Parsed(ParsedReport {
            prefix_lines: prefix,
            subject_line: Some(subject.to_string()),
            data_lines,
        })
    }
}

/// Process listing classifier: data follows the prefix directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessClassifier;

impl Classifier for ProcessClassifier {
    fn name(&self) -> &'static str {
        "processes"
    }

    fn classify(&self, lines: &[&str]) -> ParseOutcome {
        let data_lines = data_lines_from(lines, PREFIX_LINE_COUNT);
        if data_lines.is_empty() {
            return ParseOutcome::Echo {
                lines: owned(lines),
                cause: SoftFail::NoDataLines,
            };
        }

        ParseOutcome::Parsed(ParsedReport {
            prefix_lines: prefix_lines(lines),
            subject_line: None,
            data_lines,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = "[+] agent called home, sent: 180 bytes\n\
                           [+] received output:\n\
                           \n\
                           C:\\Users\\alice\\*\n\
                           D\t0\t10/23/24 12:33:00\tContacts\n\
                           F\t295000\t03/31/25 12:32:05\tazure-groups.txt\n";

    fn listing(strategy: ListingStrategy) -> ParseMode {
        ParseMode::Listing(strategy)
    }

    #[test]
    fn test_split_lines_keeps_empty_lines() {
        assert_eq!(split_lines("a\n\nb\n"), vec!["a", "", "b", ""]);
        assert_eq!(split_lines(""), vec![""]);
    }

    #[test]
    fn test_robust_finds_subject_and_data() {
        let ParseOutcome::Parsed(report) = parse(LISTING, listing(ListingStrategy::Robust)) else {
            panic!("expected a parsed report");
        };
        assert_eq!(
            report.prefix_lines,
            vec![
                "[+] agent called home, sent: 180 bytes",
                "[+] received output:"
            ]
        );
        assert_eq!(report.subject_line.as_deref(), Some("C:\\Users\\alice\\*"));
        assert_eq!(report.data_lines.len(), 2);
        assert!(report.data_lines[0].ends_with("Contacts"));
        assert!(report.data_lines[1].ends_with("azure-groups.txt"));
    }

    #[test]
    fn test_robust_skips_blank_lines_and_trims_subject() {
        let raw = "p0\np1\n\n   \n  /home/alice  \nF\t1\t01/01/25 00:00:00\ta\n";
        let ParseOutcome::Parsed(report) = parse(raw, listing(ListingStrategy::Robust)) else {
            panic!("expected a parsed report");
        };
        assert_eq!(report.subject_line.as_deref(), Some("/home/alice"));
        assert_eq!(report.data_lines.len(), 1);
    }

    #[test]
    fn test_robust_ignores_prefix_marker_lines_with_slash() {
        let raw = "p0\np1\n[+] chunk 1/2\n/srv\nF\t1\t01/01/25 00:00:00\ta\n";
        let ParseOutcome::Parsed(report) = parse(raw, listing(ListingStrategy::Robust)) else {
            panic!("expected a parsed report");
        };
        assert_eq!(report.subject_line.as_deref(), Some("/srv"));
    }

    #[test]
    fn test_robust_ignores_tab_lines_before_subject() {
        let raw = "p0\np1\nstray\tline\nC:\\data\nF\t1\t01/01/25 00:00:00\ta\n";
        let ParseOutcome::Parsed(report) = parse(raw, listing(ListingStrategy::Robust)) else {
            panic!("expected a parsed report");
        };
        assert_eq!(report.data_lines, vec!["F\t1\t01/01/25 00:00:00\ta"]);
    }

    #[test]
    fn test_robust_without_subject_echoes_lines() {
        let raw = "[+] agent called home, no output\n";
        let outcome = parse(raw, listing(ListingStrategy::Robust));
        assert_eq!(
            outcome,
            ParseOutcome::Echo {
                lines: vec!["[+] agent called home, no output".into(), "".into()],
                cause: SoftFail::NoSubject,
            }
        );
    }

    #[test]
    fn test_robust_without_data_echoes_lines() {
        let raw = "p0\np1\n\nC:\\empty\\*\n";
        let outcome = parse(raw, listing(ListingStrategy::Robust));
        assert_eq!(outcome.soft_fail(), Some(SoftFail::NoDataLines));
        assert!(matches!(outcome, ParseOutcome::Echo { .. }));
    }

    #[test]
    fn test_positional_reads_fixed_subject() {
        let ParseOutcome::Parsed(report) = parse(LISTING, listing(ListingStrategy::Positional))
        else {
            panic!("expected a parsed report");
        };
        assert_eq!(report.subject_line.as_deref(), Some("C:\\Users\\alice\\*"));
        assert_eq!(report.data_lines.len(), 2);
    }

    #[test]
    fn test_positional_does_not_search() {
        // Subject one line late: the positional classifier takes whatever is at index 3
        let raw = "p0\np1\n\n\nC:\\late\nF\t1\t01/01/25 00:00:00\ta\n";
        let outcome = parse(raw, listing(ListingStrategy::Positional));
        assert_eq!(
            outcome,
            ParseOutcome::NoContents {
                prefix_lines: vec!["p0".into(), "p1".into()],
                cause: SoftFail::NoSubject,
            }
        );

        let outcome = parse(raw, listing(ListingStrategy::Robust));
        assert!(outcome.is_parsed());
    }

    #[test]
    fn test_positional_without_data_has_no_contents() {
        let raw = "p0\np1\n\nC:\\empty\\*\n";
        let outcome = parse(raw, listing(ListingStrategy::Positional));
        assert!(matches!(
            outcome,
            ParseOutcome::NoContents {
                cause: SoftFail::NoDataLines,
                ..
            }
        ));
    }

    #[test]
    fn test_processes_take_tab_lines_after_prefix() {
        let raw = "p0\tnot data\np1\n\nSystem\t0\t4\n\nsmss.exe\t4\t388\n";
        let ParseOutcome::Parsed(report) = parse(raw, ParseMode::Processes) else {
            panic!("expected a parsed report");
        };
        assert_eq!(report.prefix_lines, vec!["p0\tnot data", "p1"]);
        assert_eq!(report.subject_line, None);
        assert_eq!(report.data_lines, vec!["System\t0\t4", "smss.exe\t4\t388"]);
    }

    #[test]
    fn test_processes_without_data_echo_lines() {
        let raw = "p0\np1\n\nnothing here\n";
        let outcome = parse(raw, ParseMode::Processes);
        assert_eq!(
            outcome,
            ParseOutcome::Echo {
                lines: vec![
                    "p0".into(),
                    "p1".into(),
                    "".into(),
                    "nothing here".into(),
                    "".into()
                ],
                cause: SoftFail::NoDataLines,
            }
        );
    }

    #[test]
    fn test_parse_mode_from_options() {
        assert_eq!(
            ParseMode::new(ReportKind::Listing, ListingStrategy::Positional),
            ParseMode::Listing(ListingStrategy::Positional)
        );
        assert_eq!(
            ParseMode::new(ReportKind::Processes, ListingStrategy::Positional),
            ParseMode::Processes
        );
        assert_eq!(ParseMode::Processes.classifier().name(), "processes");
    }
}
