//! The commit pipeline: staged-change check, prompt, agent, parse, pick,
//! commit.
//!
//! Every stage either hands its result to the next one or ends the run with
//! an error. Nothing is retried.

use tracing::{debug, info};

use crate::agent::{AgentExecutor, AgentModel};
use crate::commit::{
    CommitCandidate, DEFAULT_CANDIDATE_COUNT, PromptContext, build_commit_prompt, parse_candidates,
};
use crate::error::{PipelineError, SelectError};
use crate::git::{GitRunner, check_staged_changes, create_commit};
use crate::select::CandidateSelector;

/// Configuration for one run, derived from CLI flags.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub model: AgentModel,
    pub candidate_count: u32,
    pub dry_run: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            model: AgentModel::default(),
            candidate_count: DEFAULT_CANDIDATE_COUNT,
            dry_run: false,
        }
    }
}

/// How a run ended when nothing failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome {
    /// The index was empty; the agent was never called.
    NoStagedChanges,
    /// The commit was created; `output` is git's stdout.
    Committed {
        candidate: CommitCandidate,
        output: String,
    },
    /// A candidate was chosen but `--dry-run` skipped the commit.
    DryRun { candidate: CommitCandidate },
}

/// Run the full pipeline.
pub async fn run_pipeline<G, A, S>(
    config: &PipelineConfig,
    git: &G,
    agent: &A,
    selector: &S,
) -> Result<PipelineOutcome, PipelineError>
where
    G: GitRunner + ?Sized,
    A: AgentExecutor + ?Sized,
    S: CandidateSelector + ?Sized,
{
    // ── Stage 1: Staged changes ──
    let Some(diff_stat) = check_staged_changes(git)? else {
        return Ok(PipelineOutcome::NoStagedChanges);
    };

    agent.ensure_available().await?;

    // ── Stage 2: Prompt ──
    let context = PromptContext::gather(git, diff_stat)?;
    let prompt = build_commit_prompt(config.candidate_count, &context);

    // ── Stage 3: Agent ──
    eprintln!("Generating commit messages with {}...", config.model);
    let raw = agent.run(config.model, &prompt).await?;
    debug!("Agent returned {} bytes", raw.len());

    // ── Stage 4: Parse ──
    let candidates = parse_candidates(&raw)?;
    info!("Agent proposed {} commit messages", candidates.len());

    // ── Stage 5: Pick ──
    let index = selector.select(&candidates)?;
    let len = candidates.len();
    let candidate = candidates
        .into_iter()
        .nth(index)
        .ok_or(SelectError::OutOfRange { index, len })?;

    if config.dry_run {
        return Ok(PipelineOutcome::DryRun { candidate });
    }

    // ── Stage 6: Commit ──
    let output = create_commit(git, &candidate)?;
    Ok(PipelineOutcome::Committed { candidate, output })
}
