use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

use crate::diffstat::{GitDiffLister, get_branch_diff_stat};
use crate::insight::{DiffState, WorktreeInsight, collect_insights, load_history, worktree_label};
use crate::models::HistoryEntry;
use crate::process::OsCommandRunner;
use crate::sources::FileHistorySource;
use crate::utils::{
    format_diff_stat, format_path_with_tilde, sanitize_label, setup_tracing, truncate_label,
};

pub const DEFAULT_BASE_REF: &str = "main";
const DEFAULT_LABEL_WIDTH: usize = 60;
const NO_LABEL: &str = "-";

#[derive(Parser)]
#[command(name = "worktree-insight")]
#[command(version = "0.1.0")]
#[command(
    about = "Label git worktrees with their first Claude Code prompt and branch change size",
    long_about = None
)]
pub struct Cli {
    /// History log to read [default: ~/.claude/history.jsonl]
    #[arg(long, global = true, value_name = "PATH")]
    pub history: Option<PathBuf>,

    /// Log debug diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the first meaningful prompt given in a worktree
    Label {
        /// Worktree path, exactly as recorded in the history log
        worktree: PathBuf,
        /// Ignore prompts before this time (epoch milliseconds or RFC3339)
        #[arg(long, default_value = "0", value_parser = parse_since)]
        since: i64,
        /// Prefix the label with its session ID
        #[arg(long)]
        session: bool,
    },
    /// Print lines inserted and deleted on a worktree's branch since it left the base
    Diffstat {
        worktree: PathBuf,
        /// Base reference the branch is compared against
        #[arg(long, default_value = DEFAULT_BASE_REF)]
        base: String,
    },
    /// Show label and change size for each worktree
    Show {
        #[arg(required = true)]
        worktrees: Vec<PathBuf>,
        #[arg(long, default_value = DEFAULT_BASE_REF)]
        base: String,
        #[arg(long, default_value = "0", value_parser = parse_since)]
        since: i64,
        /// Maximum label width in characters
        #[arg(long, default_value_t = DEFAULT_LABEL_WIDTH)]
        width: usize,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show statistics about the history log
    Stats,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    match &cli.command {
        Some(Commands::Label { worktree, since, session }) => {
            let source = history_source(&cli)?;
            if let Some(prompt) = worktree_label(&source, worktree, *since)? {
                let label = sanitize_label(&prompt.text);
                if *session {
                    println!("{}\t{}", prompt.session_id, label);
                } else {
                    println!("{}", label);
                }
            }
        }
        Some(Commands::Diffstat { worktree, base }) => {
            let lister = GitDiffLister::new(OsCommandRunner);
            let summary = get_branch_diff_stat(&lister, worktree, base)?;
            println!("{}", format_diff_stat(&summary));
        }
        Some(Commands::Show { worktrees, base, since, width, json }) => {
            let source = history_source(&cli)?;
            let lister = GitDiffLister::new(OsCommandRunner);
            let insights = collect_insights(&source, &lister, worktrees, *since, base);
            if *json {
                println!("{}", serde_json::to_string_pretty(&insights)?);
            } else {
                for insight in &insights {
                    println!("{}", render_insight(insight, *width));
                }
            }
        }
        Some(Commands::Stats) => {
            let source = history_source(&cli)?;
            show_stats(&source)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn history_source(cli: &Cli) -> Result<FileHistorySource> {
    match &cli.history {
        Some(path) => Ok(FileHistorySource::new(path)),
        None => FileHistorySource::default_location(),
    }
}

/// Parse a `--since` bound given as epoch milliseconds or an RFC3339 time.
pub fn parse_since(raw: &str) -> Result<i64, String> {
    let raw = raw.trim();
    if let Ok(millis) = raw.parse::<i64>() {
        return Ok(millis);
    }
    raw.parse::<DateTime<Utc>>()
        .map(|dt| dt.timestamp_millis())
        .map_err(|_| format!("expected epoch milliseconds or an RFC3339 time, got '{}'", raw))
}

/// One line per worktree: path, change size (or the reason it is missing), label.
pub fn render_insight(insight: &WorktreeInsight, width: usize) -> String {
    let diff = match &insight.diff {
        DiffState::Summary(summary) => format_diff_stat(summary),
        DiffState::Unavailable { reason } => format!("[diff error: {}]", sanitize_label(reason)),
    };
    let label = match &insight.label {
        Some(prompt) => truncate_label(&sanitize_label(&prompt.text), width).into_owned(),
        None => NO_LABEL.to_string(),
    };
    format!("{}\t{}\t{}", format_path_with_tilde(&insight.path), diff, label)
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct HistoryStats {
    pub entries: usize,
    pub sessions: usize,
    pub projects: usize,
    pub oldest: Option<i64>,
    pub newest: Option<i64>,
}

impl HistoryStats {
    pub fn from_entries(entries: &[HistoryEntry]) -> Self {
        let sessions: HashSet<&str> = entries
            .iter()
            .map(|e| e.session_id.as_str())
            .filter(|s| !s.is_empty())
            .collect();
        let projects: HashSet<&str> =
            entries.iter().map(|e| e.project.as_str()).filter(|p| !p.is_empty()).collect();

        Self {
            entries: entries.len(),
            sessions: sessions.len(),
            projects: projects.len(),
            oldest: entries.iter().map(|e| e.timestamp).min(),
            newest: entries.iter().map(|e| e.timestamp).max(),
        }
    }
}

fn show_stats(source: &FileHistorySource) -> Result<()> {
    let entries = load_history(source)
        .with_context(|| format!("Cannot compute statistics for {}", source.path().display()))?;
    let stats = HistoryStats::from_entries(&entries);

    println!("Claude Code History Statistics");
    println!("================================");
    println!("Total entries: {}", stats.entries);
    println!("  Sessions: {}", stats.sessions);
    println!("  Projects: {}", stats.projects);
    println!();
    println!("History file: {}", format_path_with_tilde(source.path()));

    if let Some(oldest) = stats.oldest.and_then(DateTime::<Utc>::from_timestamp_millis) {
        println!("Oldest entry: {}", oldest.format("%Y-%m-%d %H:%M:%S"));
    }
    if let Some(newest) = stats.newest.and_then(DateTime::<Utc>::from_timestamp_millis) {
        println!("Newest entry: {}", newest.format("%Y-%m-%d %H:%M:%S"));
    }

    Ok(())
}
