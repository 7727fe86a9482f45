use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::diffstat::DiffLister;
use crate::models::ChangeEntry;
use crate::parsers::parse_numstat;
use crate::process::{CommandRunner, OsCommandRunner, run_checked};

/// Lists changes with `git diff <base>...HEAD --numstat`, i.e. everything committed on
/// the worktree's branch since it forked from `base`.
#[derive(Debug, Clone, Default)]
pub struct GitDiffLister<R = OsCommandRunner> {
    runner: R,
}

impl<R: CommandRunner> GitDiffLister<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }
}

impl<R: CommandRunner> DiffLister for GitDiffLister<R> {
    fn list_changes(&self, worktree: &Path, base_ref: &str) -> Result<Vec<ChangeEntry>> {
        let range = format!("{base_ref}...HEAD");
        let args = ["diff", range.as_str(), "--numstat"];
        let stdout = run_checked(&self.runner, "git", &args, Some(worktree)).with_context(|| {
            format!("Failed to diff {} against {}", worktree.display(), base_ref)
        })?;

        let entries = parse_numstat(&stdout);
        debug!(
            worktree = %worktree.display(),
            base_ref,
            files = entries.len(),
            "listed branch changes"
        );
        Ok(entries)
    }
}
