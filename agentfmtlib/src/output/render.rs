//! Report renderers: raw task result in, operator text out.
//!
//! All three renderers (robust listing, positional listing, processes) share
//! the same short-circuits:
//!
//! - an error status returns the concatenated chunks untouched
//! - no chunks at all returns [`NO_RESPONSE_SENTINEL`]
//!
//! Everything else goes through assembly, classification and layout. No path
//! returns an error; unrecognized input degrades to the raw text.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::data::parse::{parse, ParseMode, ParseOutcome, ParsedReport};
use crate::options::{ListingStrategy, RenderOptions, ReportKind};
use crate::output::table::{listing_rows, process_header, process_rows};
use crate::source::RawReport;

/// Shown when the agent has not answered yet.
pub const NO_RESPONSE_SENTINEL: &str = "No response yet from agent...";

/// Shown by the positional listing renderer when there is nothing to list.
pub const NO_CONTENTS_SENTINEL: &str = "No directory contents found";

/// Heading placed above a directory listing.
pub const CONTENTS_HEADING: &str = "Contents of";

/// Rendered text handed to the display layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayOutput {
    pub plaintext: String,
}

impl DisplayOutput {
    pub fn new(plaintext: impl Into<String>) -> Self {
        Self {
            plaintext: plaintext.into(),
        }
    }
}

/// Render `report` with the renderer selected by `options`.
pub fn render(report: &RawReport, options: &RenderOptions) -> DisplayOutput {
    trace!(
        kind = ?options.kind,
        strategy = %options.strategy,
        chunks = report.responses.len(),
        "rendering report"
    );
    match options.kind {
        ReportKind::Listing => render_listing(report, options.strategy),
        ReportKind::Processes => render_processes(report),
    }
}

/// Render a directory listing.
pub fn render_listing(report: &RawReport, strategy: ListingStrategy) -> DisplayOutput {
    render_with(report, ParseMode::Listing(strategy), listing_body)
}

/// Render a process listing.
pub fn render_processes(report: &RawReport) -> DisplayOutput {
    render_with(report, ParseMode::Processes, process_body)
}

fn render_with(
    report: &RawReport,
    mode: ParseMode,
    body: fn(&ParsedReport) -> Vec<String>,
) -> DisplayOutput {
    if report.status.is_error() {
        debug!("error status, passing raw output through");
        return DisplayOutput::new(report.assembled());
    }
    if report.responses.is_empty() {
        return DisplayOutput::new(NO_RESPONSE_SENTINEL);
    }

    let raw = report.assembled();
    let plaintext = match parse(&raw, mode) {
        ParseOutcome::Parsed(parsed) => {
            let mut lines = prefix_band(&parsed.prefix_lines);
            lines.extend(body(&parsed));
            lines.join("\n")
        }
        ParseOutcome::Echo { lines, .. } => lines.join("\n"),
        ParseOutcome::NoContents { prefix_lines, .. } => {
            let mut lines = prefix_band(&prefix_lines);
            lines.push(NO_CONTENTS_SENTINEL.to_string());
            lines.join("\n")
        }
    };
    DisplayOutput::new(plaintext)
}

/// Prefix lines followed by one blank separator, or nothing.
fn prefix_band(prefix_lines: &[String]) -> Vec<String> {
    let mut lines = prefix_lines.to_vec();
    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn listing_body(parsed: &ParsedReport) -> Vec<String> {
    let subject = parsed.subject_line.as_deref().unwrap_or_default();
    let mut lines = vec![format!("{} {}", CONTENTS_HEADING, subject), String::new()];
    lines.extend(listing_rows(&parsed.data_lines));
    lines
}

fn process_body(parsed: &ParsedReport) -> Vec<String> {
    let rows = process_rows(&parsed.data_lines);
    if rows.is_empty() {
        return rows;
    }
    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.extend(process_header());
    lines.extend(rows);
    lines
}
