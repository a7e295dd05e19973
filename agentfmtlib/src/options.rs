//! Input options for report rendering.
//!
//! This module contains the configuration types that choose which renderer
//! runs and how directory listings are classified.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AgentfmtError;

/// Which kind of agent output a report carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    /// Directory listing (`ls`)
    #[default]
    Listing,
    /// Process listing (`ps`)
    Processes,
}

/// How the subject line of a directory listing is located.
///
/// The two strategies also differ in how they give up: `Robust` echoes the
/// original lines, `Positional` emits a "no contents" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStrategy {
    /// Search for the first path-like line after the prefix
    #[default]
    Robust,
    /// Take the subject from a fixed line index
    Positional,
}

impl ListingStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingStrategy::Robust => "robust",
            ListingStrategy::Positional => "positional",
        }
    }
}

impl fmt::Display for ListingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListingStrategy {
    type Err = AgentfmtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "robust" | "search" => Ok(ListingStrategy::Robust),
            "positional" | "fixed" => Ok(ListingStrategy::Positional),
            _ => Err(AgentfmtError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Options for rendering a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Which renderer to run
    #[serde(default)]
    pub kind: ReportKind,
    /// Subject-line strategy for directory listings (ignored for processes)
    #[serde(default)]
    pub strategy: ListingStrategy,
}

impl RenderOptions {
    /// Create new default options (robust directory listing).
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for a process listing.
    pub fn processes() -> Self {
        Self::new().kind(ReportKind::Processes)
    }

    /// Set the report kind.
    pub fn kind(mut self, kind: ReportKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the directory listing strategy.
    pub fn strategy(mut self, strategy: ListingStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}
