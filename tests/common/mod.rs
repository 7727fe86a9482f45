//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::json;
use tempfile::TempDir;

/// Builder for a temporary home directory holding `.claude/history.jsonl`
pub struct ClaudeHomeBuilder {
    temp_dir: TempDir,
}

impl ClaudeHomeBuilder {
    /// Create a new builder with an empty `.claude` directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir(temp_dir.path().join(".claude")).expect("Failed to create .claude dir");
        Self { temp_dir }
    }

    /// Path of the fake home directory
    pub fn home(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path the history log is written to
    pub fn history_path(&self) -> PathBuf {
        self.temp_dir.path().join(".claude").join("history.jsonl")
    }

    /// Write raw history content
    pub fn with_history(self, content: &str) -> Self {
        let mut file = fs::File::create(self.history_path()).expect("Failed to create history.jsonl");
        file.write_all(content.as_bytes()).expect("Failed to write history.jsonl");
        self
    }

    /// Write history entries, one JSON object per line
    pub fn with_history_entries(self, entries: &[HistoryEntryBuilder]) -> Self {
        let content = history_jsonl(entries);
        self.with_history(&content)
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for ClaudeHomeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for history.jsonl entries
#[derive(Clone)]
pub struct HistoryEntryBuilder {
    display: String,
    project: String,
    session_id: String,
    timestamp: i64,
}

impl HistoryEntryBuilder {
    /// Create a new history entry with default values
    pub fn new() -> Self {
        Self {
            display: "implement the requested feature".to_string(),
            project: "/Users/test/repo".to_string(),
            session_id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            timestamp: 1762076480016,
        }
    }

    pub fn display(mut self, display: &str) -> Self {
        self.display = display.to_string();
        self
    }

    pub fn project(mut self, project: &str) -> Self {
        self.project = project.to_string();
        self
    }

    pub fn session_id(mut self, session_id: &str) -> Self {
        self.session_id = session_id.to_string();
        self
    }

    pub fn timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Convert to a JSON line
    pub fn to_json(&self) -> String {
        json!({
            "display": self.display,
            "pastedContents": {},
            "timestamp": self.timestamp,
            "project": self.project,
            "sessionId": self.session_id,
        })
        .to_string()
    }
}

impl Default for HistoryEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Join entries into JSONL content with a trailing newline
pub fn history_jsonl(entries: &[HistoryEntryBuilder]) -> String {
    let mut content = entries.iter().map(|e| e.to_json()).collect::<Vec<_>>().join("\n");
    content.push('\n');
    content
}

/// A realistic log: two worktrees of one repo plus the main checkout
pub fn realistic_history() -> Vec<HistoryEntryBuilder> {
    vec![
        HistoryEntryBuilder::new()
            .display("explain the build setup of this repo")
            .project("/Users/test/repo")
            .session_id("sess-main")
            .timestamp(1000),
        HistoryEntryBuilder::new()
            .display("/init")
            .project("/Users/test/repo-feature-auth")
            .session_id("sess-auth")
            .timestamp(2000),
        HistoryEntryBuilder::new()
            .display("add OAuth login with GitHub to the auth service")
            .project("/Users/test/repo-feature-auth")
            .session_id("sess-auth")
            .timestamp(2100),
        HistoryEntryBuilder::new()
            .display("yes")
            .project("/Users/test/repo-feature-auth")
            .session_id("sess-auth")
            .timestamp(2200),
        HistoryEntryBuilder::new()
            .display("fix flaky pagination test in the orders API")
            .project("/Users/test/repo-fix-orders")
            .session_id("sess-orders")
            .timestamp(3000),
    ]
}
