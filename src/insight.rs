//! The two questions a worktree picker asks: "what was this worktree for?" and
//! "how much has changed on it?".

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Serialize;
use tracing::warn;

use crate::correlator::find_first_prompt;
use crate::diffstat::{DiffLister, get_branch_diff_stat};
use crate::models::{FirstPrompt, HistoryEntry, StatusSummary};
use crate::parsers::parse_history;
use crate::sources::HistorySource;

/// Read and parse the whole history log from `source`.
pub fn load_history(source: &dyn HistorySource) -> Result<Vec<HistoryEntry>> {
    let data = source.read_history()?;
    parse_history(&data)
}

/// Label a worktree with the first meaningful prompt given in it at or after `since`.
///
/// An unreadable log is returned as an error; `Ok(None)` means the log was read and
/// nothing qualified.
pub fn worktree_label(
    source: &dyn HistorySource,
    worktree: &Path,
    since: i64,
) -> Result<Option<FirstPrompt>> {
    let entries = load_history(source)?;
    Ok(find_first_prompt(&entries, &worktree.to_string_lossy(), since))
}

/// Outcome of summarizing a worktree's changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DiffState {
    Summary(StatusSummary),
    Unavailable { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorktreeInsight {
    pub path: PathBuf,
    pub label: Option<FirstPrompt>,
    pub diff: DiffState,
}

/// Build the label and change summary for every worktree.
///
/// The history log is read once. If it cannot be read, every worktree is left
/// without a label instead of failing. A worktree whose diff cannot be computed gets
/// [`DiffState::Unavailable`] with the reason.
pub fn collect_insights(
    history: &dyn HistorySource,
    lister: &dyn DiffLister,
    worktrees: &[PathBuf],
    since: i64,
    base_ref: &str,
) -> Vec<WorktreeInsight> {
    let entries = load_history(history).unwrap_or_else(|e| {
        warn!("history unavailable, worktrees will have no labels: {e:#}");
        Vec::new()
    });

    worktrees
        .iter()
        .map(|path| {
            let label = find_first_prompt(&entries, &path.to_string_lossy(), since);
            let diff = match get_branch_diff_stat(lister, path, base_ref) {
                Ok(summary) => DiffState::Summary(summary),
                Err(e) => {
                    warn!(worktree = %path.display(), "diff unavailable: {e:#}");
                    DiffState::Unavailable { reason: format!("{e:#}") }
                }
            };
            WorktreeInsight { path: path.clone(), label, diff }
        })
        .collect()
}
