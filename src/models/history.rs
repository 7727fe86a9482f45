use serde::{Deserialize, Serialize};

/// One line of `~/.claude/history.jsonl`.
///
/// Missing and `null` fields decode to their empty value rather than rejecting the
/// line, so a record only fails to parse when a field has the wrong shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_null_as_default"
    )]
    pub display: String,
    #[serde(
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_null_as_default"
    )]
    pub project: String,
    #[serde(
        rename = "sessionId",
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_null_as_default"
    )]
    pub session_id: String,
    /// Epoch milliseconds.
    #[serde(
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_timestamp_millis"
    )]
    pub timestamp: i64,
}

/// The earliest meaningful prompt found for a worktree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FirstPrompt {
    pub text: String,
    pub session_id: String,
    pub timestamp: i64,
}

impl From<&HistoryEntry> for FirstPrompt {
    fn from(entry: &HistoryEntry) -> Self {
        Self {
            text: entry.display.clone(),
            session_id: entry.session_id.clone(),
            timestamp: entry.timestamp,
        }
    }
}
