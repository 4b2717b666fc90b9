//! Agent executor seam.

use std::time::Duration;

use async_trait::async_trait;

use crate::agent::model::AgentModel;
use crate::agent::subprocess::{check_agent_installed, run_agent};
use crate::error::AgentError;

/// Trait for invoking the generation agent.
///
/// This abstraction allows mocking the agent subprocess in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AgentExecutor: Send + Sync {
    /// Verify the agent can be started at all.
    async fn ensure_available(&self) -> Result<(), AgentError>;

    /// Run the agent with the given model and prompt and return its raw output.
    async fn run(&self, model: AgentModel, prompt: &str) -> Result<String, AgentError>;
}

/// Default executor that calls the real opencode CLI.
#[derive(Debug, Clone, Copy)]
pub struct DefaultExecutor {
    limit: Option<Duration>,
}

impl DefaultExecutor {
    /// `limit` of `None` waits for the agent indefinitely.
    pub fn new(limit: Option<Duration>) -> Self {
        Self { limit }
    }
}

#[async_trait]
impl AgentExecutor for DefaultExecutor {
    async fn ensure_available(&self) -> Result<(), AgentError> {
        check_agent_installed()
    }

    async fn run(&self, model: AgentModel, prompt: &str) -> Result<String, AgentError> {
        run_agent(model, prompt, self.limit).await
    }
}
