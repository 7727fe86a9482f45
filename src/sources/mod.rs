//! Where the raw history log comes from.
//!
//! The correlator only ever sees bytes handed over by a [`HistorySource`], so the real
//! `~/.claude/history.jsonl` and fixed in-memory data are interchangeable.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

use crate::utils::history_path;

/// Produces the complete current content of the history log.
pub trait HistorySource {
    fn read_history(&self) -> Result<Vec<u8>>;
}

/// Reads the history log from a file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHistorySource {
    path: PathBuf,
}

impl FileHistorySource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The log in its default location under the Claude directory.
    pub fn default_location() -> Result<Self> {
        Ok(Self::new(history_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistorySource for FileHistorySource {
    fn read_history(&self) -> Result<Vec<u8>> {
        fs::read(&self.path)
            .with_context(|| format!("Failed to read history file: {}", self.path.display()))
    }
}

/// Returns fixed bytes, or a fixed error. Useful wherever a deterministic log is needed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedHistorySource {
    data: Vec<u8>,
    error: Option<String>,
}

impl FixedHistorySource {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self { data: data.into(), error: None }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self { data: Vec::new(), error: Some(message.into()) }
    }
}

impl HistorySource for FixedHistorySource {
    fn read_history(&self) -> Result<Vec<u8>> {
        match &self.error {
            Some(message) => Err(anyhow!("{message}")),
            None => Ok(self.data.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_file_source_reads_content() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(b"line one\nline two\n").expect("Failed to write temp file");
        file.flush().expect("Failed to flush temp file");

        let source = FileHistorySource::new(file.path());
        assert_eq!(source.read_history().unwrap(), b"line one\nline two\n");
        assert_eq!(source.path(), file.path());
    }

    #[test]
    fn test_file_source_nonexistent_file() {
        let source = FileHistorySource::new("/nonexistent/path/history.jsonl");
        let err = source.read_history().unwrap_err();
        assert!(err.to_string().contains("Failed to read history file"));
    }

    #[test]
    fn test_fixed_source_success() {
        let source = FixedHistorySource::new("test");
        assert_eq!(source.read_history().unwrap(), b"test");
    }

    #[test]
    fn test_fixed_source_error() {
        let source = FixedHistorySource::failing("read error");
        let err = source.read_history().unwrap_err();
        assert_eq!(err.to_string(), "read error");
    }
}
