//! Backend models the agent can be asked to use.

use std::fmt;

use clap::ValueEnum;

/// Model identifier passed to `opencode -m`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum AgentModel {
    #[default]
    #[value(name = "gpt-4.1")]
    Gpt41,
    #[value(name = "gpt-4o")]
    Gpt4o,
}

impl AgentModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentModel::Gpt41 => "github-copilot/gpt-4.1",
            AgentModel::Gpt4o => "github-copilot/gpt-4o",
        }
    }
}

impl fmt::Display for AgentModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
