//! Commit message candidates returned by the agent.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ResponseError;

/// Maximum characters of raw agent output quoted in a parse error.
const MAX_QUOTED_RESPONSE: usize = 500;

/// One proposed commit message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitCandidate {
    /// Commit subject line.
    pub title: String,
    /// Commit body. May span several lines.
    #[serde(default)]
    pub description: String,
}

impl CommitCandidate {
    /// Format the candidate as a full commit message.
    ///
    /// Produces:
    /// ```text
    /// feat: add user authentication flow
    ///
    /// Implement login, registration, and JWT-based sessions.
    /// ```
    pub fn format(&self) -> String {
        if self.description.trim().is_empty() {
            return self.title.clone();
        }
        format!("{}\n\n{}", self.title, self.description)
    }
}

/// Decode the agent's reply into commit candidates.
///
/// The reply must be exactly a JSON array of `{"title", "description"}`
/// objects. Markdown fences or commentary around it are rejected rather than
/// stripped, as is an empty array or a candidate without a title.
pub fn parse_candidates(raw: &str) -> Result<Vec<CommitCandidate>, ResponseError> {
    let candidates: Vec<CommitCandidate> = serde_json::from_str(raw).map_err(|e| {
        debug!("Raw agent response: {}", raw);
        let quoted: String = raw.chars().take(MAX_QUOTED_RESPONSE).collect();
        ResponseError::InvalidJson(format!("{}. Response: {}", e, quoted))
    })?;

    if candidates.is_empty() {
        return Err(ResponseError::Empty);
    }

    if let Some(index) = candidates.iter().position(|c| c.title.trim().is_empty()) {
        return Err(ResponseError::MissingTitle { index });
    }

    debug!("Parsed {} commit candidates", candidates.len());
    Ok(candidates)
}
