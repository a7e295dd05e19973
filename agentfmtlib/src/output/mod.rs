//! Output formatting: lay reports out as fixed-width text.
//!
//! This module handles the final stage of the pipeline - turning classified
//! lines into operator-facing text. It provides:
//!
//! - **Layout**: column widths, gaps and truncation (`layout`)
//! - **Tables**: directory and process rows (`table`)
//! - **Renderers**: the full report transforms (`render`, `render_listing`,
//!   `render_processes`)
//!
//! ## Example
//!
//! ```rust
//! use agentfmtlib::output::{render_processes, NO_RESPONSE_SENTINEL};
//! use agentfmtlib::RawReport;
//!
//! let output = render_processes(&RawReport::new("success", vec![]));
//! assert_eq!(output.plaintext, NO_RESPONSE_SENTINEL);
//! ```

pub mod layout;
pub mod render;
pub mod table;

pub use render::{
    render, render_listing, render_processes, DisplayOutput, NO_CONTENTS_SENTINEL,
    NO_RESPONSE_SENTINEL,
};
