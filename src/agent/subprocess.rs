//! opencode CLI spawning.

use std::env;
use std::process::Stdio;
use std::time::{Duration, Instant};

use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::agent::model::AgentModel;
use crate::error::AgentError;

/// Name of the agent executable.
pub const AGENT_BIN: &str = "opencode";

/// Default timeout for the agent subprocess (5 minutes).
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Environment variable to override the default timeout.
pub const TIMEOUT_ENV_VAR: &str = "COMMITPICK_AGENT_TIMEOUT";

/// Resolve the agent timeout.
///
/// An explicit value wins; otherwise `COMMITPICK_AGENT_TIMEOUT` is read, and
/// an invalid value there logs a warning and falls back to 300 seconds.
/// Zero means wait without limit.
pub fn resolve_timeout(explicit_secs: Option<u64>) -> Option<Duration> {
    let secs = explicit_secs.unwrap_or_else(timeout_from_env);
    if secs == 0 {
        None
    } else {
        Some(Duration::from_secs(secs))
    }
}

fn timeout_from_env() -> u64 {
    match env::var(TIMEOUT_ENV_VAR) {
        Ok(v) if !v.is_empty() => match v.parse::<u64>() {
            Ok(secs) => secs,
            Err(_) => {
                warn!(
                    "Invalid {} value '{}', using default {}s",
                    TIMEOUT_ENV_VAR, v, DEFAULT_TIMEOUT_SECS
                );
                DEFAULT_TIMEOUT_SECS
            }
        },
        _ => DEFAULT_TIMEOUT_SECS,
    }
}

/// Check that the opencode CLI is on `PATH`.
///
/// Uses the `which` crate for cross-platform executable detection.
pub fn check_agent_installed() -> Result<(), AgentError> {
    which::which(AGENT_BIN)
        .map(|path| debug!("Found {} at {}", AGENT_BIN, path.display()))
        .map_err(|_| AgentError::NotInstalled)
}

/// Run `opencode -m <model> run <prompt>` and return its standard output.
///
/// With a timeout, the child is killed once it elapses and
/// `AgentError::Timeout` is returned.
pub async fn run_agent(
    model: AgentModel,
    prompt: &str,
    limit: Option<Duration>,
) -> Result<String, AgentError> {
    run_agent_command(AGENT_BIN, &["-m", model.as_str(), "run", prompt], limit).await
}

/// Shared subprocess helper: runs `program args...` and captures stdout.
pub(crate) async fn run_agent_command(
    program: &str,
    args: &[&str],
    limit: Option<Duration>,
) -> Result<String, AgentError> {
    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let started = Instant::now();
    let output = match limit {
        Some(duration) => timeout(duration, cmd.output())
            .await
            .map_err(|_| AgentError::Timeout(duration.as_secs()))?,
        None => cmd.output().await,
    }
    .map_err(AgentError::SpawnFailed)?;

    debug!("{} finished in {:?}", program, started.elapsed());

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let code = output.status.code().unwrap_or(-1);
        return Err(AgentError::NonZeroExit { code, stderr });
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}
