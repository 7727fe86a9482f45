//! Data models for worktree insight.
//!
//! - [`HistoryEntry`] - one user prompt from `history.jsonl`
//! - [`FirstPrompt`] - the label-worthy prompt matched to a worktree
//! - [`ChangeEntry`] - one file's line counts from a numstat listing
//! - [`StatusSummary`] - aggregated insertions/deletions for a worktree
//!
//! All models are plain values. Nothing here holds references across calls.

pub mod diff;
pub mod history;

pub use diff::{ChangeEntry, StatusSummary};
pub use history::{FirstPrompt, HistoryEntry};
