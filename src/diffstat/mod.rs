//! Change-size summaries for a worktree relative to its base reference.
//!
//! A [`DiffLister`] supplies one [`ChangeEntry`] per changed file and [`aggregate`]
//! reduces them to a [`StatusSummary`]. A failed listing is returned as an error and
//! never as an empty summary, so "could not compute" is not confused with "no changes".

pub mod git;

use std::path::Path;

use anyhow::{Result, anyhow};

pub use git::GitDiffLister;

use crate::models::{ChangeEntry, StatusSummary};

/// Lists per-file line changes of a worktree against a base reference.
pub trait DiffLister {
    fn list_changes(&self, worktree: &Path, base_ref: &str) -> Result<Vec<ChangeEntry>>;
}

/// Sum additions and deletions over every entry.
///
/// # Examples
///
/// ```
/// use worktree_insight::aggregate;
/// use worktree_insight::models::{ChangeEntry, StatusSummary};
///
/// let summary = aggregate(&[ChangeEntry::new(3, 1), ChangeEntry::new(5, 2)]);
/// assert_eq!(summary, StatusSummary { insertions: 8, deletions: 3 });
/// ```
pub fn aggregate(entries: &[ChangeEntry]) -> StatusSummary {
    let mut summary = StatusSummary::default();
    for entry in entries {
        summary += entry;
    }
    summary
}

/// List the changes of `worktree` since `base_ref` and aggregate them.
///
/// Errors from the lister are returned as they are.
pub fn get_branch_diff_stat(
    lister: &dyn DiffLister,
    worktree: &Path,
    base_ref: &str,
) -> Result<StatusSummary> {
    let entries = lister.list_changes(worktree, base_ref)?;
    Ok(aggregate(&entries))
}

/// Returns a fixed list of entries, or a fixed error, for any worktree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedDiffLister {
    entries: Vec<ChangeEntry>,
    error: Option<String>,
}

impl FixedDiffLister {
    pub fn new(entries: Vec<ChangeEntry>) -> Self {
        Self { entries, error: None }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self { entries: Vec::new(), error: Some(message.into()) }
    }
}

impl DiffLister for FixedDiffLister {
    fn list_changes(&self, _worktree: &Path, _base_ref: &str) -> Result<Vec<ChangeEntry>> {
        match &self.error {
            Some(message) => Err(anyhow!("{message}")),
            None => Ok(self.entries.clone()),
        }
    }
}
