/// Minimum character count for a prompt to be meaningful enough to label a worktree.
///
/// Counted in Unicode scalar values after trimming, not in bytes.
pub const MIN_PROMPT_CHARS: usize = 10;

/// Inputs that are answers or shell-style commands rather than instructions.
const SKIP_TOKENS: [&str; 8] = ["exit", "quit", "q", "go", "yes", "no", "y", "n"];

/// Returns true if `display` is too short or looks like a command.
///
/// Checks run in order on the trimmed text:
/// 1. fewer than [`MIN_PROMPT_CHARS`] characters
/// 2. a slash command such as `/commit` or `/review-pr 123`
/// 3. case-insensitively equal to one of the skip tokens, or starting with one
///    followed by a space (`go build ./...` is skipped, `going forward` is not)
///
/// # Examples
///
/// ```
/// use worktree_insight::is_skippable;
///
/// assert!(is_skippable("/commit"));
/// assert!(is_skippable("go build ./..."));
/// assert!(!is_skippable("implement dark mode for the user profile page"));
/// ```
pub fn is_skippable(display: &str) -> bool {
    let trimmed = display.trim();
    if trimmed.chars().count() < MIN_PROMPT_CHARS {
        return true;
    }

    if trimmed.starts_with('/') {
        return true;
    }

    let lower = trimmed.to_lowercase();
    SKIP_TOKENS.iter().any(|token| {
        lower == *token
            || lower.strip_prefix(token).is_some_and(|rest| rest.starts_with(' '))
    })
}
