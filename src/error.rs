//! Error types for commitpick modules using thiserror.

use thiserror::Error;

/// Errors from git subprocess calls.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Failed to run '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command}' exited with code {code}: {stderr}")]
    NonZeroExit {
        command: String,
        code: i32,
        stderr: String,
    },
}

impl GitError {
    /// The command line that failed, e.g. `git diff --cached --stat`.
    pub fn command(&self) -> &str {
        match self {
            GitError::SpawnFailed { command, .. } => command,
            GitError::NonZeroExit { command, .. } => command,
        }
    }
}

/// Errors from the external generation agent.
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("opencode CLI not found. Install it from https://opencode.ai and make sure it is on PATH")]
    NotInstalled,

    #[error("Failed to spawn opencode process: {0}")]
    SpawnFailed(#[source] std::io::Error),

    #[error("opencode exited with code {code}: {stderr}")]
    NonZeroExit { code: i32, stderr: String },

    #[error("opencode timed out after {0} seconds")]
    Timeout(u64),
}

/// Errors from decoding the agent's reply into commit candidates.
#[derive(Error, Debug)]
pub enum ResponseError {
    #[error("Agent returned invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Candidate {index} has an empty title")]
    MissingTitle { index: usize },

    #[error("no commit messages generated")]
    Empty,
}

/// Errors from the interactive candidate picker.
#[derive(Error, Debug)]
pub enum SelectError {
    #[error("Selection cancelled")]
    Interrupted,

    #[error("Terminal error: {0}")]
    Terminal(#[source] std::io::Error),

    #[error("No interactive terminal available for selection")]
    NoInteractiveTerminal,

    #[error("Selected index {index} is out of range for {len} candidates")]
    OutOfRange { index: usize, len: usize },
}

/// Any failure of a commit-generation run.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Git(#[from] GitError),

    #[error(transparent)]
    Agent(#[from] AgentError),

    #[error(transparent)]
    Response(#[from] ResponseError),

    #[error(transparent)]
    Select(#[from] SelectError),
}
