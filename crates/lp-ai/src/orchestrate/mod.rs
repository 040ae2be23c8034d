//! Task orchestrators.
//!
//! Each orchestrator validates its input, builds the prompt, makes one
//! provider call through the injected [`CompletionProvider`], and parses the
//! reply. Launch briefs, similarity analysis, and email drafts are
//! all-or-nothing; batch scoring degrades failed items to a fallback score.

mod batch;
mod brief;
mod draft;
mod probe;
mod similar;
mod stage;

pub use batch::{BatchScore, ScoredProspect, score_prospects, score_prospects_with_progress};
pub use brief::generate_launch_brief;
pub use draft::draft_email;
pub use probe::{ProbeOutcome, probe};
pub use similar::find_similar;
pub use stage::StageTracker;

use lp_core::enums::{AiTask, TaskStage};
use serde::Serialize;

use crate::error::{AiError, ParseError};
use crate::models::{self, ModelSummary};
use crate::prompts::Prompt;
use crate::provider::{CompletionProvider, CompletionRequest, TokenUsage};

/// A parsed task result and the model that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskOutput<T> {
    pub value: T,
    pub model: ModelSummary,
    pub usage: Option<TokenUsage>,
}

/// Drive one call through `prompting → awaiting_model → parsing`.
async fn run<P, T>(
    provider: &P,
    task: AiTask,
    build: impl FnOnce() -> Prompt,
    parse: fn(&str) -> Result<T, ParseError>,
) -> Result<TaskOutput<T>, AiError>
where
    P: CompletionProvider,
{
    let mut tracker = StageTracker::start(task);
    let result = drive(provider, task, build, parse, &mut tracker).await;
    match &result {
        Ok(_) => tracing::info!(%task, "task completed"),
        Err(err) => tracker.fail(err),
    }
    result
}

async fn drive<P, T>(
    provider: &P,
    task: AiTask,
    build: impl FnOnce() -> Prompt,
    parse: fn(&str) -> Result<T, ParseError>,
    tracker: &mut StageTracker,
) -> Result<TaskOutput<T>, AiError>
where
    P: CompletionProvider,
{
    tracker.advance(TaskStage::Prompting)?;
    let prompt = build();
    let descriptor = models::model_for(task);
    let request = CompletionRequest {
        model: descriptor.identifier.to_string(),
        instruction: prompt.instruction,
        max_tokens: models::max_tokens(task),
    };

    tracker.advance(TaskStage::AwaitingModel)?;
    let completion = provider.complete(&request).await?;

    tracker.advance(TaskStage::Parsing)?;
    let value = parse(&completion.text)?;

    tracker.advance(TaskStage::Succeeded)?;
    Ok(TaskOutput {
        value,
        model: descriptor.summary(),
        usage: completion.usage,
    })
}
