use std::process::ExitCode;

fn main() -> ExitCode {
    match worktree_insight::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("worktree-insight error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
