//! Structural parsing: classify lines and type the data records.
//!
//! This module handles the second stage of the pipeline - finding structure
//! in the assembled text. It provides:
//!
//! - **Classification**: prefix, subject and data lines (`parse`, `Classifier`)
//! - **Records**: typed filesystem and process entries (`FileEntry`, `ProcessRecord`)
//!
//! ## Example
//!
//! ```rust
//! use agentfmtlib::data::{parse, ParseMode, ParseOutcome};
//!
//! let outcome = parse("p0\np1\nSystem\t0\t4\n", ParseMode::Processes);
//! let ParseOutcome::Parsed(report) = outcome else { panic!() };
//! assert_eq!(report.data_lines, vec!["System\t0\t4"]);
//! ```

pub mod parse;
pub mod record;

pub use parse::{
    parse, split_lines, Classifier, ParseMode, ParseOutcome, ParsedReport, PositionalClassifier,
    ProcessClassifier, RobustClassifier, SoftFail,
};
pub use record::{EntryKind, FileEntry, ProcessDetails, ProcessRecord};
