//! opencode agent integration.

pub mod executor;
pub mod model;
pub mod subprocess;

pub use executor::{AgentExecutor, DefaultExecutor};
pub use model::AgentModel;
pub use subprocess::{check_agent_installed, resolve_timeout, run_agent};
