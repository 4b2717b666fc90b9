//! Commit creation through `git commit`.

use tracing::{debug, info};

use crate::commit::CommitCandidate;
use crate::error::GitError;
use crate::git::runner::GitRunner;

/// Build the `git commit` arguments for a candidate.
///
/// The title becomes the first `-m` paragraph and the description the
/// second; git joins them with a blank line. A blank description is left
/// out so git does not record an empty body.
pub fn commit_args(candidate: &CommitCandidate) -> Vec<&str> {
    let mut args = vec!["commit", "-m", candidate.title.as_str()];
    if !candidate.description.trim().is_empty() {
        args.push("-m");
        args.push(candidate.description.as_str());
    }
    args
}

/// Commit the staged changes with the chosen message.
///
/// Returns git's captured output, e.g. `[main 1a2b3c4] feat: add X`.
pub fn create_commit<G: GitRunner + ?Sized>(
    git: &G,
    candidate: &CommitCandidate,
) -> Result<String, GitError> {
    let args = commit_args(candidate);
    debug!("Committing with title '{}'", candidate.title);

    let output = git.run(&args)?;
    info!("Commit created");
    Ok(output)
}
