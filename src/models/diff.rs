use std::ops::AddAssign;

use serde::Serialize;

/// One changed file from a numstat-style listing.
///
/// Binary files carry no line counts and are recorded as zero/zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ChangeEntry {
    pub additions: u64,
    pub deletions: u64,
}

impl ChangeEntry {
    pub fn new(additions: u64, deletions: u64) -> Self {
        Self { additions, deletions }
    }
}

/// Total line changes of a worktree relative to its base reference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusSummary {
    pub insertions: u64,
    pub deletions: u64,
}

impl AddAssign<&ChangeEntry> for StatusSummary {
    fn add_assign(&mut self, entry: &ChangeEntry) {
        self.insertions = self.insertions.saturating_add(entry.additions);
        self.deletions = self.deletions.saturating_add(entry.deletions);
    }
}
