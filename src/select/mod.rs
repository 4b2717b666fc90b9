//! Interactive choice of one commit candidate.

pub mod filter;
pub mod terminal;

pub use filter::{Menu, MenuInput, MenuStep, matches};
pub use terminal::TerminalSelector;

use crate::commit::CommitCandidate;
use crate::error::SelectError;

/// Lets the user pick exactly one candidate.
pub trait CandidateSelector {
    /// Returns the index of the chosen candidate in `candidates`.
    fn select(&self, candidates: &[CommitCandidate]) -> Result<usize, SelectError>;
}
