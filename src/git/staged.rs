//! Staged-change detection and context gathering for the prompt.

use tracing::debug;

use crate::error::GitError;
use crate::git::runner::{GitRunner, command_line};

/// Summary of the staged changes, also used as the staged-change check.
pub const STAGED_STAT_ARGS: &[&str] = &["diff", "--cached", "--stat"];

/// Full staged diff.
pub const STAGED_DIFF_ARGS: &[&str] = &["diff", "--cached"];

/// The last five commits, one per line.
pub const RECENT_LOG_ARGS: &[&str] = &["log", "-n", "5", "--pretty=oneline", "--abbrev-commit"];

/// A git command line together with the output it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    pub command: String,
    pub output: String,
}

impl Transcript {
    /// Run `git <args>` and record the command alongside its output.
    pub fn capture<G: GitRunner + ?Sized>(git: &G, args: &[&str]) -> Result<Self, GitError> {
        let output = git.run(args)?;
        Ok(Self {
            command: command_line(args),
            output,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.output.trim().is_empty()
    }

    /// Render as a console fence that echoes the command before its output:
    ///
    /// ````text
    /// ```console
    /// $ git diff --cached --stat
    ///  src/lib.rs | 2 +-
    /// ```
    /// ````
    pub fn to_console_block(&self) -> String {
        let mut block = format!("```console\n$ {}\n{}", self.command, self.output);
        if !block.ends_with('\n') {
            block.push('\n');
        }
        block.push_str("```\n");
        block
    }
}

/// Check that something is staged.
///
/// Returns the `git diff --cached --stat` transcript, or `None` when the
/// index matches HEAD and there is nothing to commit.
pub fn check_staged_changes<G: GitRunner + ?Sized>(git: &G) -> Result<Option<Transcript>, GitError> {
    let stat = Transcript::capture(git, STAGED_STAT_ARGS)?;
    if stat.is_empty() {
        debug!("No staged changes");
        return Ok(None);
    }
    Ok(Some(stat))
}

/// Collect the full staged diff.
pub fn collect_staged_diff<G: GitRunner + ?Sized>(git: &G) -> Result<Transcript, GitError> {
    Transcript::capture(git, STAGED_DIFF_ARGS)
}

/// Collect the recent commit history used as style context.
pub fn collect_recent_history<G: GitRunner + ?Sized>(git: &G) -> Result<Transcript, GitError> {
    Transcript::capture(git, RECENT_LOG_ARGS)
}
