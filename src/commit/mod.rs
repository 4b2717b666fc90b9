//! AI-generated commit message candidates.

pub mod candidate;
pub mod prompt;

pub use candidate::{CommitCandidate, parse_candidates};
pub use prompt::{DEFAULT_CANDIDATE_COUNT, PromptContext, build_commit_prompt};
