//! Prompt construction for generating commit message candidates.

use tracing::debug;

use crate::error::GitError;
use crate::git::runner::GitRunner;
use crate::git::staged::{Transcript, collect_recent_history, collect_staged_diff};

/// Number of candidates requested when none is configured.
pub const DEFAULT_CANDIDATE_COUNT: u32 = 5;

/// Heading of the staged diff section.
pub const DIFF_HEADING: &str = "# Diff to analyze:\n";

/// Heading of the commit history section.
pub const HISTORY_HEADING: &str = "# List of the last commits (additional context):\n";

/// Instruction block sent ahead of the repository context.
///
/// The agent's reply is decoded as-is, so the output example must stay in
/// sync with `CommitCandidate`.
pub fn rules(candidate_count: u32) -> String {
    format!(
        r#"You are a helpful commit message generator.
Generate me an array of the top {candidate_count} commit message recommendations in json format.
Only one commit is picked from the returned commit message list.
Only answer with the json! Nothing else! No markdown!

# Rules for writing commit messages:
- Use the conventional commit specification.
- Capitalized, short (50 chars or less) summary (title)
- More detailed description, if necessary. Bullet points can be used, too. Typically a hyphen or asterisk is used for the bullet, preceded by a single space, with blank lines in between
- What was the motivation for the change?
- How does it differ from the previous implementation?
- You MUST insert newlines in the description to ensure a maximum of 72 characters per line.
- Write your commit message in the imperative: "Fix bug" and not "Fixed bug" or "Fixes bug."

# Example output format:
Here is an example of the output format:
[
	{{
		"title": "feat: add user authentication flow",
		"description": "Implement login, registration, and JWT-based session management for secure user access."
	}}
]

"#
    )
}

/// Repository context gathered for the prompt.
#[derive(Debug, Clone)]
pub struct PromptContext {
    pub diff_stat: Transcript,
    pub diff: Transcript,
    pub history: Transcript,
}

impl PromptContext {
    /// Gather the full diff and recent history, reusing the stat from the
    /// staged-change check.
    pub fn gather<G: GitRunner + ?Sized>(git: &G, diff_stat: Transcript) -> Result<Self, GitError> {
        let diff = collect_staged_diff(git)?;
        let history = collect_recent_history(git)?;
        Ok(Self {
            diff_stat,
            diff,
            history,
        })
    }
}

/// Build the agent prompt.
///
/// Order: rules, then the diff section (stat and full diff), then the
/// commit history section.
pub fn build_commit_prompt(candidate_count: u32, context: &PromptContext) -> String {
    let mut prompt = rules(candidate_count);

    prompt.push_str(DIFF_HEADING);
    prompt.push_str(&context.diff_stat.to_console_block());
    prompt.push_str(&context.diff.to_console_block());

    prompt.push_str(HISTORY_HEADING);
    prompt.push_str(&context.history.to_console_block());

    debug!("Commit prompt length: {} chars", prompt.len());
    prompt
}
