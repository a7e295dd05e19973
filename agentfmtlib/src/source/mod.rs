//! Source assembly: turn response chunks into one text blob.
//!
//! This module handles the first stage of the pipeline - collecting what
//! the agent sent. It provides:
//!
//! - **RawReport**: the task status plus its ordered response chunks
//! - **Assembly**: in-order concatenation of chunks (`assemble`)
//! - **Loading**: reading chunks from files or streams, or decoding a task result
//!
//! ## Example
//!
//! ```rust
//! use agentfmtlib::source::{assemble, RawReport};
//!
//! let report = RawReport::new("success", vec!["line one\n".into(), "line two".into()]);
//! assert!(!report.status.is_error());
//! assert_eq!(assemble(&report.responses), "line one\nline two");
//! ```

pub mod report;

pub use report::{assemble, load_chunks, read_chunks, RawReport, ReportStatus, ERROR_MARKER};
