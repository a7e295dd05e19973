//! Fixed-width rows for directory and process listings.
//!
//! Rows are built from typed records; everything about widths and gaps comes
//! from [`crate::output::layout`].

use tracing::debug;

use crate::data::record::{FileEntry, ProcessRecord};
use crate::format::{format_size, format_timestamp};
use crate::output::layout::{
    fit, Column, LISTING_DATE_GAP, LISTING_DATE_WIDTH, LISTING_SIZE_GAP, LISTING_SIZE_WIDTH,
    LISTING_TYPE_GAP, LISTING_TYPE_WIDTH, PROCESS_COLUMNS, PROCESS_COLUMN_GAP, RULE_CHAR,
};

/// Lay out one directory entry.
///
/// Directories never show a size, whatever the agent reported.
pub fn listing_row(entry: &FileEntry) -> String {
    let size = if entry.is_directory() {
        String::new()
    } else {
        format_size(&entry.size)
    };

    format!(
        "{:<date_w$}{}{:<type_w$}{}{:>size_w$}{}{}",
        format_timestamp(&entry.modified),
        LISTING_DATE_GAP,
        entry.kind.tag(),
        LISTING_TYPE_GAP,
        size,
        LISTING_SIZE_GAP,
        entry.name,
        date_w = LISTING_DATE_WIDTH,
        type_w = LISTING_TYPE_WIDTH,
        size_w = LISTING_SIZE_WIDTH,
    )
}

/// Lay out directory data lines, dropping lines that are not 4-field records.
pub fn listing_rows<S: AsRef<str>>(data_lines: &[S]) -> Vec<String> {
    data_lines
        .iter()
        .filter_map(|line| {
            let line = line.as_ref();
            let entry = FileEntry::parse(line);
            if entry.is_none() {
                debug!(line, "dropping directory record without 4 fields");
            }
            entry
        })
        .map(|entry| listing_row(&entry))
        .collect()
}

/// Process cell values in display order.
fn process_values(record: &ProcessRecord) -> [&str; 6] {
    let (architecture, user, session_id) = match record.details() {
        Some(details) => (
            details.architecture.as_str(),
            details.user.as_str(),
            details.session_id.as_str(),
        ),
        None => ("", "", ""),
    };

    [
        record.name(),
        architecture,
        record.pid(),
        record.ppid(),
        user,
        session_id,
    ]
}

fn join_cells(cells: impl IntoIterator<Item = String>) -> String {
    cells
        .into_iter()
        .collect::<Vec<_>>()
        .join(PROCESS_COLUMN_GAP)
}

/// The two header lines of the process table: titles, then the rule.
///
/// The last title is not padded.
pub fn process_header() -> [String; 2] {
    let last = PROCESS_COLUMNS.len() - 1;
    let titles = join_cells(PROCESS_COLUMNS.iter().enumerate().map(|(index, column)| {
        if index == last {
            column.title.to_string()
        } else {
            format!("{:<width$}", column.title, width = column.width)
        }
    }));
    let rule = join_cells(
        PROCESS_COLUMNS
            .iter()
            .map(|column| RULE_CHAR.to_string().repeat(column.width)),
    );
    [titles, rule]
}

/// Lay out one process, truncating values that overflow their column.
pub fn process_row(record: &ProcessRecord) -> String {
    let values = process_values(record);
    join_cells(
        PROCESS_COLUMNS
            .iter()
            .zip(values)
            .map(|(column, value): (&Column, &str)| fit(value, *column)),
    )
}

/// Lay out process data lines. Every line yields exactly one row.
pub fn process_rows<S: AsRef<str>>(data_lines: &[S]) -> Vec<String> {
    data_lines
        .iter()
        .map(|line| process_row(&ProcessRecord::parse(line.as_ref())))
        .collect()
}
