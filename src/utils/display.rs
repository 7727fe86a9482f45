//! Formatting of labels and change summaries for single-line terminal output.
//!
//! Prompt text comes straight from the history log, so it is sanitized before display:
//! ANSI CSI sequences and control characters are removed and all whitespace runs,
//! including newlines from multi-line prompts, collapse to one space.

use std::borrow::Cow;
use std::path::Path;

use crate::models::StatusSummary;

const ELLIPSIS: char = '…';

/// Make prompt text safe and compact enough to show on one line.
///
/// # Examples
///
/// ```
/// use worktree_insight::utils::sanitize_label;
///
/// assert_eq!(sanitize_label("\x1b[31mfix\x1b[0m the\n  login bug"), "fix the login bug");
/// ```
pub fn sanitize_label(text: &str) -> String {
    let mut stripped = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            // CSI sequences end at the first ASCII letter
            for next_ch in chars.by_ref() {
                if next_ch.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }

        if ch.is_whitespace() {
            stripped.push(' ');
        } else if !ch.is_control() {
            stripped.push(ch);
        }
    }

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Shorten `text` to at most `max_chars` characters, ending with an ellipsis when cut.
pub fn truncate_label(text: &str, max_chars: usize) -> Cow<'_, str> {
    if text.chars().count() <= max_chars {
        return Cow::Borrowed(text);
    }
    if max_chars == 0 {
        return Cow::Borrowed("");
    }

    let mut truncated: String = text.chars().take(max_chars - 1).collect();
    truncated.truncate(truncated.trim_end().len());
    truncated.push(ELLIPSIS);
    Cow::Owned(truncated)
}

/// Render a change summary as `+insertions -deletions`.
pub fn format_diff_stat(summary: &StatusSummary) -> String {
    format!("+{} -{}", summary.insertions, summary.deletions)
}

/// Formats a path with ~ substitution for the home directory
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, dirs::home_dir().as_deref())
}

pub(crate) fn format_path_with_tilde_internal(path: &Path, home: Option<&Path>) -> String {
    if let Some(home) = home
        && let Ok(rest) = path.strip_prefix(home)
    {
        if rest.as_os_str().is_empty() {
            return "~".to_string();
        }
        return format!("~/{}", rest.display());
    }

    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_sanitize_strips_color_codes() {
        assert_eq!(sanitize_label("\x1b[31mRed text\x1b[0m normal"), "Red text normal");
    }

    #[test]
    fn test_sanitize_strips_cursor_movement() {
        assert_eq!(sanitize_label("\x1b[2J\x1b[H Cleared screen"), "Cleared screen");
    }

    #[test]
    fn test_sanitize_removes_bell_and_backspace() {
        assert_eq!(sanitize_label("Alert!\x07 Test\x08"), "Alert! Test");
    }

    #[test]
    fn test_sanitize_collapses_multiline_prompt() {
        let text = "refactor the parser\n\n- keep the API\n\t- add tests\r\n";
        assert_eq!(sanitize_label(text), "refactor the parser - keep the API - add tests");
    }

    #[test]
    fn test_sanitize_keeps_unicode() {
        assert_eq!(sanitize_label("Hello 👋 \x1b[31mWorld\x1b[0m 🌍"), "Hello 👋 World 🌍");
    }

    #[test]
    fn test_sanitize_only_escape_sequences() {
        assert_eq!(sanitize_label("\x1b[31m\x1b[0m\x1b[2J"), "");
    }

    #[test]
    fn test_truncate_short_text_is_borrowed() {
        let label = truncate_label("fix the bug", 20);
        assert!(matches!(label, Cow::Borrowed("fix the bug")));
    }

    #[test]
    fn test_truncate_long_text() {
        assert_eq!(truncate_label("implement dark mode for the profile page", 16), "implement dark…");
    }

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate_label("日本語のプロンプトです", 5), "日本語の…");
    }

    #[test]
    fn test_truncate_zero_width() {
        assert_eq!(truncate_label("anything", 0), "");
    }

    #[test]
    fn test_format_diff_stat() {
        let summary = StatusSummary { insertions: 8, deletions: 3 };
        assert_eq!(format_diff_stat(&summary), "+8 -3");
        assert_eq!(format_diff_stat(&StatusSummary::default()), "+0 -0");
    }

    #[test]
    fn test_format_path_with_tilde() {
        let home = PathBuf::from("/Users/testuser");

        let path = PathBuf::from("/Users/testuser/Documents/project");
        assert_eq!(format_path_with_tilde_internal(&path, Some(&home)), "~/Documents/project");

        let outside = PathBuf::from("/opt/local/bin");
        assert_eq!(format_path_with_tilde_internal(&outside, Some(&home)), "/opt/local/bin");

        assert_eq!(format_path_with_tilde_internal(&home, Some(&home)), "~");

        // Sibling directory sharing the home prefix as a string
        let sibling = PathBuf::from("/Users/testuser2/project");
        assert_eq!(format_path_with_tilde_internal(&sibling, Some(&home)), "/Users/testuser2/project");

        assert_eq!(format_path_with_tilde_internal(&outside, None), "/opt/local/bin");
    }
}
