//! Session-to-worktree correlation.
//!
//! [`is_skippable`] decides whether a prompt is worth showing as a label and
//! [`find_first_prompt`] picks the first such prompt recorded for a worktree.

pub mod qualifier;
pub mod session;

pub use qualifier::is_skippable;
pub use session::find_first_prompt;
