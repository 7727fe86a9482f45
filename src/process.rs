//! External command execution behind a small trait so git can be swapped for a
//! fixed-output double in tests.

use std::io;
use std::path::Path;
use std::process::Command;

use thiserror::Error;
use tracing::debug;

/// Captured result of a finished command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CmdOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("`{command}` exited with {}: {message}", exit_code_label(.code))]
    Failed { command: String, code: Option<i32>, message: String },
}

fn exit_code_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "no status".to_string(),
    }
}

/// Runs an external program and captures its output.
pub trait CommandRunner {
    fn run(
        &self,
        program: &str,
        args: &[&str],
        cwd: Option<&Path>,
    ) -> Result<CmdOutput, CommandError>;
}

/// Runs commands with [`std::process::Command`].
#[derive(Debug, Clone, Copy, Default)]
pub struct OsCommandRunner;

impl CommandRunner for OsCommandRunner {
    fn run(
        &self,
        program: &str,
        args: &[&str],
        cwd: Option<&Path>,
    ) -> Result<CmdOutput, CommandError> {
        let mut command = Command::new(program);
        command.args(args);
        if let Some(cwd) = cwd {
            command.current_dir(cwd);
        }
        debug!(program, ?args, ?cwd, "running command");

        let output = command
            .output()
            .map_err(|source| CommandError::Spawn { program: program.to_string(), source })?;

        Ok(CmdOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Run a command and return its stdout, turning a non-zero exit into
/// [`CommandError::Failed`].
pub fn run_checked(
    runner: &dyn CommandRunner,
    program: &str,
    args: &[&str],
    cwd: Option<&Path>,
) -> Result<String, CommandError> {
    let output = runner.run(program, args, cwd)?;
    if !output.success {
        return Err(CommandError::Failed {
            command: format!("{program} {}", args.join(" ")),
            code: output.code,
            message: best_error_line(&output.stderr),
        });
    }
    Ok(output.stdout)
}

/// Pick the most useful line of a command's stderr: the first `error:`/`fatal:`
/// line if there is one, otherwise the last non-empty line.
pub fn best_error_line(stderr: &str) -> String {
    let lines: Vec<&str> = stderr.lines().map(str::trim).filter(|line| !line.is_empty()).collect();

    if let Some(line) = lines.iter().find(|line| {
        let lower = line.to_ascii_lowercase();
        lower.starts_with("error:") || lower.starts_with("fatal:")
    }) {
        return (*line).to_string();
    }

    lines.last().map_or_else(|| "unknown error".to_string(), |line| (*line).to_string())
}
