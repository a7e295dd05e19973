//! # agentfmtlib
//!
//! Turns the raw, line-oriented output of a remote agent into fixed-width
//! reports an operator can read.
//!
//! ## Overview
//!
//! Agents answer directory and process listing tasks with tab-separated
//! records, wrapped by the translator in a couple of status lines. This
//! library is the pure transform from that text to a display string:
//!
//! 1. **Source**: concatenate the response chunks (`source`)
//! 2. **Data**: classify prefix, subject and data lines (`data`)
//! 3. **Format**: normalize timestamps and byte counts (`format`)
//! 4. **Output**: lay records out in aligned columns (`output`)
//!
//! Rendering never fails. Input it cannot make sense of is shown as-is.
//!
//! ## Example
//!
//! ```rust
//! use agentfmtlib::{render, RawReport, RenderOptions};
//!
//! let report = RawReport::new(
//!     "success",
//!     vec![
//!         "[+] agent called home, sent: 90 bytes\n[+] received output:\n\n".to_string(),
//!         "C:\\Users\\alice\\*\nF\t2048\t03/31/25 12:32:05\tnotes.txt\n".to_string(),
//!     ],
//! );
//!
//! let output = render(&report, &RenderOptions::new());
//! assert!(output.plaintext.contains("Contents of C:\\Users\\alice\\*"));
//! assert!(output.plaintext.contains("03/31/2025  12:32 PM    <FILE>"));
//! ```

pub mod data;
pub mod error;
pub mod format;
pub mod options;
pub mod output;
pub mod source;

pub use data::{FileEntry, ParseMode, ParseOutcome, ParsedReport, ProcessRecord};
pub use error::AgentfmtError;
pub use format::{format_size, format_timestamp};
pub use options::{ListingStrategy, RenderOptions, ReportKind};
pub use output::{render, render_listing, render_processes, DisplayOutput};
pub use source::{assemble, RawReport, ReportStatus};

/// Result type for agentfmtlib operations
pub type Result<T> = std::result::Result<T, AgentfmtError>;
