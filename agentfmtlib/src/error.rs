//! Error types for agentfmtlib
//!
//! Rendering itself never fails: every malformed input degrades to some
//! displayable text. These errors only come from the edges of the library,
//! where raw reports are loaded or options are parsed from strings.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading reports or resolving options
#[derive(Error, Debug)]
pub enum AgentfmtError {
    /// Failed to read a response chunk from disk
    #[error("failed to read chunk '{path}': {source}")]
    ChunkRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Task result JSON could not be decoded
    #[error("failed to decode task result: {0}")]
    TaskDecode(#[from] serde_json::Error),

    /// Unknown directory listing strategy name
    #[error("unknown listing strategy '{0}' (expected 'robust' or 'positional')")]
    UnknownStrategy(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
