use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Environment variable that relocates the Claude directory.
pub const CLAUDE_CONFIG_DIR_ENV: &str = "CLAUDE_CONFIG_DIR";

const HISTORY_FILE_NAME: &str = "history.jsonl";

/// Get the Claude directory path (`$CLAUDE_CONFIG_DIR`, else `~/.claude`)
pub fn get_claude_dir() -> Result<PathBuf> {
    claude_dir_from(env::var_os(CLAUDE_CONFIG_DIR_ENV), dirs::home_dir())
}

/// Path of the assistant's prompt history log.
pub fn history_path() -> Result<PathBuf> {
    Ok(get_claude_dir()?.join(HISTORY_FILE_NAME))
}

fn claude_dir_from(config_dir: Option<OsString>, home: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = config_dir.filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let home = home.context("Could not determine home directory")?;
    Ok(home.join(".claude"))
}
