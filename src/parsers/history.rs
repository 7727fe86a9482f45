use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::debug;

use crate::models::HistoryEntry;

/// Parse the raw bytes of a `history.jsonl` log.
///
/// Blank lines and lines that fail to decode are skipped; the returned entries keep
/// the order in which they appear in the log.
///
/// # Examples
///
/// ```
/// use worktree_insight::parse_history;
///
/// let data = br#"{"display":"fix the login bug","project":"/repo","sessionId":"s1","timestamp":1000}
/// not-json
/// {"display":"add tests","project":"/repo","sessionId":"s2","timestamp":2000}"#;
///
/// let entries = parse_history(data)?;
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries[1].session_id, "s2");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn parse_history(data: &[u8]) -> Result<Vec<HistoryEntry>> {
    parse_history_reader(data)
}

/// Parse a `history.jsonl` log from any buffered reader.
///
/// Only a failure to read from `reader` is returned as an error.
pub fn parse_history_reader<R: BufRead>(mut reader: R) -> Result<Vec<HistoryEntry>> {
    let mut entries = Vec::new();
    let mut skipped_count = 0usize;
    let mut line = Vec::new();
    let mut line_num = 0usize;

    loop {
        line.clear();
        let read = reader
            .read_until(b'\n', &mut line)
            .context("Failed to read line from history log")?;
        if read == 0 {
            break;
        }
        line_num += 1;

        let trimmed = line.trim_ascii();
        if trimmed.is_empty() {
            continue;
        }

        // Invalid UTF-8 is rejected by serde_json here, so it is handled like any other bad line
        match decode_line(trimmed) {
            Ok(entry) => entries.push(entry),
            Err(e) => {
                debug!(line = line_num, error = %e, "skipping malformed history line");
                skipped_count += 1;
            }
        }
    }

    if skipped_count > 0 {
        debug!(entries = entries.len(), skipped = skipped_count, "parsed history log");
    }

    Ok(entries)
}

/// Decoding through [`Value`] keeps the last value of a duplicated key instead of
/// rejecting the line.
fn decode_line(line: &[u8]) -> serde_json::Result<HistoryEntry> {
    let value: Value = serde_json::from_slice(line)?;
    serde_json::from_value(value)
}

/// Open and parse a `history.jsonl` file.
pub fn parse_history_file(path: &Path) -> Result<Vec<HistoryEntry>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open history file: {}", path.display()))?;
    parse_history_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse history file: {}", path.display()))
}
