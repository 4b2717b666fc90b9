//! commitpick - CLI entry point.

use std::process::ExitCode;

use anyhow::{Result, anyhow};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use commitpick::agent::resolve_timeout;
use commitpick::commit::DEFAULT_CANDIDATE_COUNT;
use commitpick::{
    AgentModel, DefaultExecutor, PipelineConfig, PipelineOutcome, SystemGit, TerminalSelector,
    run_pipeline,
};

/// Generate commit messages for the staged changes and pick one.
#[derive(Parser, Debug)]
#[command(name = "commitpick")]
#[command(about = "Generate commit messages for staged changes and pick one")]
#[command(version)]
struct Cli {
    /// Model the agent should use
    #[arg(long, value_enum, default_value_t = AgentModel::default())]
    model: AgentModel,

    /// Number of commit messages to request
    #[arg(short = 'n', long, default_value_t = DEFAULT_CANDIDATE_COUNT,
          value_parser = clap::value_parser!(u32).range(1..))]
    count: u32,

    /// Seconds to wait for the agent (0 waits forever) [env: COMMITPICK_AGENT_TIMEOUT]
    #[arg(long)]
    timeout: Option<u64>,

    /// Print the chosen message instead of committing
    #[arg(long)]
    dry_run: bool,

    /// Show debug logging
    #[arg(short, long)]
    verbose: bool,
}

const NO_STAGED_CHANGES: &str =
    "No staged changes found. Please stage your changes before running this tool.";

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let report = Report::from_result(run(cli).await);
    print!("{}", report.stdout);
    eprint!("{}", report.stderr);
    ExitCode::from(report.status)
}

/// What the process writes and the status it exits with.
#[derive(Debug, PartialEq, Eq)]
struct Report {
    status: u8,
    stdout: String,
    stderr: String,
}

impl Report {
    fn from_result(result: Result<PipelineOutcome>) -> Self {
        match result {
            Ok(PipelineOutcome::NoStagedChanges) => {
                Self::success(format!("{}\n", NO_STAGED_CHANGES))
            }
            // git's own output, verbatim
            Ok(PipelineOutcome::Committed { output, .. }) => Self::success(output),
            Ok(PipelineOutcome::DryRun { candidate }) => {
                Self::success(format!("{}\n", candidate.format()))
            }
            Err(e) => Self {
                status: 1,
                stdout: String::new(),
                stderr: format!("Error: {:#}\n", e),
            },
        }
    }

    fn success(stdout: String) -> Self {
        Self {
            status: 0,
            stdout,
            stderr: String::new(),
        }
    }
}

async fn run(cli: Cli) -> Result<PipelineOutcome> {
    init_tracing(cli.verbose)?;

    let config = PipelineConfig {
        model: cli.model,
        candidate_count: cli.count,
        dry_run: cli.dry_run,
    };
    let agent = DefaultExecutor::new(resolve_timeout(cli.timeout));

    let outcome = run_pipeline(&config, &SystemGit, &agent, &TerminalSelector::new()).await?;
    Ok(outcome)
}

/// Log to stderr so stdout carries only the commit output.
fn init_tracing(verbose: bool) -> Result<()> {
    let default_directive = if verbose { "commitpick=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialise logging: {}", e))
}
