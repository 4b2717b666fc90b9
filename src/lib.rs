//! commitpick - A CLI tool that drafts commit messages from the staged diff.
//!
//! # Overview
//!
//! commitpick sends the staged diff and recent history to the opencode CLI,
//! asks for several conventional commit messages as JSON, lets the user pick
//! one in a searchable menu, and commits with it.

pub mod agent;
pub mod commit;
pub mod error;
pub mod git;
pub mod pipeline;
pub mod select;

// Re-export commonly used types
pub use agent::{AgentExecutor, AgentModel, DefaultExecutor};
pub use commit::{CommitCandidate, parse_candidates};
pub use error::{AgentError, GitError, PipelineError, ResponseError, SelectError};
pub use git::{GitRunner, SystemGit};
pub use pipeline::{PipelineConfig, PipelineOutcome, run_pipeline};
pub use select::{CandidateSelector, TerminalSelector};
