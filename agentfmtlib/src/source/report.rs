//! Raw task reports and chunk assembly.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AgentfmtError;
use crate::Result;

/// Substring that marks a task status as failed.
pub const ERROR_MARKER: &str = "error";

/// Status of the task that produced a report.
///
/// Upstream statuses are free-form strings ("success", "error",
/// "error: timeout", ...). Only membership in the error category matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReportStatus {
    #[default]
    Normal,
    Error,
}

impl ReportStatus {
    /// Classify a status string by looking for [`ERROR_MARKER`].
    pub fn from_status_text(status: &str) -> Self {
        if status.contains(ERROR_MARKER) {
            ReportStatus::Error
        } else {
            ReportStatus::Normal
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ReportStatus::Error)
    }
}

impl From<String> for ReportStatus {
    fn from(status: String) -> Self {
        Self::from_status_text(&status)
    }
}

impl From<&str> for ReportStatus {
    fn from(status: &str) -> Self {
        Self::from_status_text(status)
    }
}

impl From<ReportStatus> for String {
    fn from(status: ReportStatus) -> Self {
        match status {
            ReportStatus::Normal => "success".to_string(),
            ReportStatus::Error => ERROR_MARKER.to_string(),
        }
    }
}

/// A task result as handed over by the task-execution layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawReport {
    /// Task status
    #[serde(default)]
    pub status: ReportStatus,
    /// Response chunks, in arrival order
    #[serde(default)]
    pub responses: Vec<String>,
}

impl RawReport {
    pub fn new(status: impl Into<ReportStatus>, responses: Vec<String>) -> Self {
        Self {
            status: status.into(),
            responses,
        }
    }

    /// Decode a task result of the form `{"status": "...", "responses": [...]}`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// All chunks joined into one blob.
    pub fn assembled(&self) -> String {
        assemble(&self.responses)
    }
}

/// Concatenate chunks in order. Chunks carry their own line breaks, so no
/// separator is inserted.
pub fn assemble<S: AsRef<str>>(chunks: &[S]) -> String {
    let mut text = String::new();
    for chunk in chunks {
        text.push_str(chunk.as_ref());
    }
    text
}

/// Read each path as one response chunk, preserving order.
pub fn load_chunks<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<String>> {
    paths
        .iter()
        .map(|path| {
            let path = path.as_ref();
            std::fs::read_to_string(path).map_err(|source| AgentfmtError::ChunkRead {
                path: path.to_path_buf(),
                source,
            })
        })
        .collect()
}

/// Read a whole stream as one response chunk.
///
/// An empty stream means the agent sent nothing, so no chunk is produced.
pub fn read_chunks<R: Read>(mut reader: R) -> Result<Vec<String>> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    if input.is_empty() {
        return Ok(Vec::new());
    }
    Ok(vec![input])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_assemble_empty() {
        let chunks: Vec<String> = Vec::new();
        assert_eq!(assemble(&chunks), "");
    }

    #[test]
    fn test_assemble_keeps_order_without_separator() {
        assert_eq!(assemble(&["a\nb", "c\n", "", "d"]), "a\nbc\nd");
    }

    #[test]
    fn test_status_classification() {
        assert_eq!(ReportStatus::from("success"), ReportStatus::Normal);
        assert_eq!(ReportStatus::from("processing"), ReportStatus::Normal);
        assert_eq!(ReportStatus::from("error"), ReportStatus::Error);
        assert_eq!(ReportStatus::from("error: timeout"), ReportStatus::Error);
        assert_eq!(ReportStatus::from("completed with error"), ReportStatus::Error);
        assert!(!ReportStatus::default().is_error());
    }

    #[test]
    fn test_from_json() {
        let report =
            RawReport::from_json(r#"{"status":"error: timeout","responses":["a","b"]}"#).unwrap();
        assert!(report.status.is_error());
        assert_eq!(report.responses, vec!["a", "b"]);
        assert_eq!(report.assembled(), "ab");
    }

    #[test]
    fn test_from_json_defaults() {
        let report = RawReport::from_json("{}").unwrap();
        assert_eq!(report.status, ReportStatus::Normal);
        assert!(report.responses.is_empty());
    }

    #[test]
    fn test_from_json_invalid() {
        let err = RawReport::from_json("{not json").unwrap_err();
        assert!(matches!(err, AgentfmtError::TaskDecode(_)));
    }

    #[test]
    fn test_load_chunks_in_order() {
        let dir = tempdir().unwrap();
        let first = dir.path().join("first.txt");
        let second = dir.path().join("second.txt");
        fs::write(&first, "[+] agent called home\n").unwrap();
        fs::write(&second, "[+] received output:\n").unwrap();

        let chunks = load_chunks(&[&first, &second]).unwrap();
        assert_eq!(
            chunks,
            vec!["[+] agent called home\n", "[+] received output:\n"]
        );
    }

    #[test]
    fn test_read_chunks_single_chunk() {
        let chunks = read_chunks("[+] received output:\n\nSystem\t0\t4\n".as_bytes()).unwrap();
        assert_eq!(chunks, vec!["[+] received output:\n\nSystem\t0\t4\n"]);
    }

    #[test]
    fn test_read_chunks_empty_stream_has_no_chunks() {
        let chunks = read_chunks(std::io::empty()).unwrap();
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_read_chunks_invalid_utf8_is_io_error() {
        let err = read_chunks(&[0xff, 0xfe, 0xfd][..]).unwrap_err();
        assert!(matches!(err, AgentfmtError::Io(_)));
    }

    #[test]
    fn test_load_chunks_missing_file() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.txt");

        let err = load_chunks(&[&missing]).unwrap_err();
        match err {
            AgentfmtError::ChunkRead { path, .. } => assert_eq!(path, missing),
            other => panic!("unexpected error: {other}"),
        }
    }
}
