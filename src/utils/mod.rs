pub mod display;
pub mod environment;
pub mod logging;

pub use display::{format_diff_stat, format_path_with_tilde, sanitize_label, truncate_label};
pub use environment::{get_claude_dir, history_path};
pub use logging::setup_tracing;
