//! Git subprocess execution.
//!
//! All operations shell out to the system `git` binary, inheriting the user's
//! existing git config, hooks and signing setup.

use std::process::Command;

use tracing::debug;

use crate::error::GitError;

/// Runs a git subcommand and returns its captured standard output.
///
/// This abstraction lets the pipeline stages be exercised without a real
/// repository.
pub trait GitRunner {
    fn run(&self, args: &[&str]) -> Result<String, GitError>;
}

/// Runner backed by the `git` binary on `PATH`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemGit;

impl GitRunner for SystemGit {
    fn run(&self, args: &[&str]) -> Result<String, GitError> {
        let command = command_line(args);
        debug!("Running {}", command);

        let output = Command::new("git")
            .args(args)
            .output()
            .map_err(|source| GitError::SpawnFailed {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GitError::NonZeroExit {
                command,
                code: output.status.code().unwrap_or(-1),
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

/// Render the full command line for messages and transcripts.
pub fn command_line(args: &[&str]) -> String {
    let mut line = String::from("git");
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line
}
