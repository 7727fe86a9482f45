//! Worktree Insight - tell git worktrees apart by what was asked in them
//!
//! This library correlates Claude Code's prompt history (`~/.claude/history.jsonl`)
//! with git worktrees and summarizes how much each worktree's branch has changed.
//! It supports:
//!
//! - Parsing the history log, skipping corrupt lines
//! - Deciding which prompts are meaningful enough to label a worktree
//! - Finding the first such prompt given in a worktree after a point in time
//! - Aggregating `git diff --numstat` output into insertion/deletion totals
//!
//! The history log and the diff listing are reached through the [`HistorySource`] and
//! [`DiffLister`] traits, so fixed data can stand in for the file system and git.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use worktree_insight::process::OsCommandRunner;
//! use worktree_insight::{FileHistorySource, GitDiffLister, get_branch_diff_stat, worktree_label};
//!
//! let worktree = Path::new("/Users/alice/src/app-feature");
//! let history = FileHistorySource::default_location()?;
//! if let Some(prompt) = worktree_label(&history, worktree, 0)? {
//!     println!("{}", prompt.text);
//! }
//!
//! let summary = get_branch_diff_stat(&GitDiffLister::new(OsCommandRunner), worktree, "main")?;
//! println!("+{} -{}", summary.insertions, summary.deletions);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod correlator;
pub mod diffstat;
pub mod insight;
pub mod models;
pub mod parsers;
pub mod process;
pub mod sources;
pub mod utils;

// Re-export commonly used types
pub use correlator::{find_first_prompt, is_skippable};
pub use diffstat::{DiffLister, FixedDiffLister, GitDiffLister, aggregate, get_branch_diff_stat};
pub use insight::{DiffState, WorktreeInsight, collect_insights, load_history, worktree_label};
pub use parsers::parse_history;
pub use sources::{FileHistorySource, FixedHistorySource, HistorySource};
