use crate::correlator::qualifier::is_skippable;
use crate::models::{FirstPrompt, HistoryEntry};

/// Find the first meaningful prompt recorded in `worktree_path` at or after `since`.
///
/// Entries are scanned in log order and the first one satisfying all of the
/// following wins:
/// - `project` equals `worktree_path` exactly (no path normalization)
/// - `timestamp >= since`
/// - the prompt text is not [`is_skippable`]
///
/// The log is appended chronologically, so the first match in file order is the
/// earliest one. Entries are not re-sorted.
///
/// # Examples
///
/// ```
/// use worktree_insight::find_first_prompt;
/// use worktree_insight::models::HistoryEntry;
///
/// let entries = vec![HistoryEntry {
///     display: "add user settings page to the dashboard".to_string(),
///     project: "/my/repo".to_string(),
///     session_id: "s2".to_string(),
///     timestamp: 200,
/// }];
///
/// let prompt = find_first_prompt(&entries, "/my/repo", 0).unwrap();
/// assert_eq!(prompt.session_id, "s2");
/// assert!(find_first_prompt(&entries, "/my/repo", 250).is_none());
/// ```
pub fn find_first_prompt(
    entries: &[HistoryEntry],
    worktree_path: &str,
    since: i64,
) -> Option<FirstPrompt> {
    entries
        .iter()
        .find(|e| e.project == worktree_path && e.timestamp >= since && !is_skippable(&e.display))
        .map(FirstPrompt::from)
}
