//! Fixed column layout shared by the table renderers.
//!
//! Downstream display tooling expects these exact widths and gaps, so every
//! literal lives here.

/// A fixed-width table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub title: &'static str,
    pub width: usize,
}

/// Directory listing: formatted timestamp, left-aligned.
pub const LISTING_DATE_WIDTH: usize = 20;
/// Directory listing: `<DIR>` / `<FILE>` tag, left-aligned.
pub const LISTING_TYPE_WIDTH: usize = 6;
/// Directory listing: humanized size, right-aligned.
pub const LISTING_SIZE_WIDTH: usize = 12;

pub const LISTING_DATE_GAP: &str = "    ";
pub const LISTING_TYPE_GAP: &str = "    ";
pub const LISTING_SIZE_GAP: &str = "       ";

/// Gap between every pair of process columns.
pub const PROCESS_COLUMN_GAP: &str = "      ";

pub const PROCESS_NAME: Column = Column {
    title: "Process Name",
    width: 30,
};
pub const PROCESS_ARCH: Column = Column {
    title: "Architecture",
    width: 15,
};
pub const PROCESS_PID: Column = Column {
    title: "PID",
    width: 10,
};
pub const PROCESS_PPID: Column = Column {
    title: "PPID",
    width: 10,
};
pub const PROCESS_USER: Column = Column {
    title: "User Account",
    width: 30,
};
pub const PROCESS_SESSION: Column = Column {
    title: "Session ID",
    width: 12,
};

/// Process columns in display order.
pub const PROCESS_COLUMNS: [Column; 6] = [
    PROCESS_NAME,
    PROCESS_ARCH,
    PROCESS_PID,
    PROCESS_PPID,
    PROCESS_USER,
    PROCESS_SESSION,
];

/// Character used for the rule under the process header.
pub const RULE_CHAR: char = '=';

/// Appended to values cut to fit their column.
pub const ELLIPSIS: &str = "...";

/// Cut `value` so it fits in `width` characters, ending with [`ELLIPSIS`]
/// when anything was removed.
pub fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }

    let ellipsis_len = ELLIPSIS.chars().count();
    if width < ellipsis_len {
        return value.chars().take(width).collect();
    }

    let mut cut: String = value.chars().take(width - ellipsis_len).collect();
    cut.push_str(ELLIPSIS);
    cut
}

/// Truncate and left-align `value` into `column`.
pub fn fit(value: &str, column: Column) -> String {
    format!(
        "{:<width$}",
        truncate(value, column.width),
        width = column.width
    )
}
