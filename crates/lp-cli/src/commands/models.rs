use lp_ai::models::{self, ModelDescriptor, ModelSummary};
use lp_ai::orchestrate::{ProbeOutcome, probe};
use lp_core::enums::{AiTask, ModelTier};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ModelsCommands;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

const TASKS: [AiTask; 5] = [
    AiTask::LaunchBrief,
    AiTask::ProspectScoring,
    AiTask::ProspectSimilarity,
    AiTask::EmailDrafting,
    AiTask::SocialDrafting,
];

#[derive(Serialize)]
struct ModelView {
    #[serde(flatten)]
    descriptor: &'static ModelDescriptor,
    used_for: Vec<AiTask>,
}

#[derive(Serialize)]
struct CheckReport {
    launch_brief_tier: ModelTier,
    launch_brief_model: ModelSummary,
    models: Vec<ModelSummary>,
    api_key_configured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key_preview: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    probe: Option<ProbeOutcome>,
}

/// Handle `launchpad models`.
pub async fn handle(
    action: &ModelsCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ModelsCommands::List => {
            let views: Vec<ModelView> = models::list_all().iter().map(view).collect();
            output(&views, flags.format)
        }
        ModelsCommands::Describe { tier } => {
            let tier: ModelTier = parse_enum(tier, "tier")?;
            output(&view(models::describe(tier)), flags.format)
        }
        ModelsCommands::Check => check(ctx, flags).await,
    }
}

fn view(descriptor: &'static ModelDescriptor) -> ModelView {
    ModelView {
        descriptor,
        used_for: TASKS
            .into_iter()
            .filter(|task| models::assignment(*task) == descriptor.tier)
            .collect(),
    }
}

async fn check(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let configured = ctx.config.anthropic.is_configured();
    let probe = if configured {
        let client = ctx.ai()?;
        let spinner = Progress::spinner("Contacting Anthropic...");
        let outcome = probe(&client).await;
        spinner.finish_clear();
        Some(outcome)
    } else {
        None
    };

    let report = CheckReport {
        launch_brief_tier: models::assignment(AiTask::LaunchBrief),
        launch_brief_model: models::model_for(AiTask::LaunchBrief).summary(),
        models: models::list_all().iter().map(ModelDescriptor::summary).collect(),
        api_key_configured: configured,
        api_key_preview: ctx.config.anthropic.key_preview(),
        probe,
    };
    output(&report, flags.format)?;

    if report.probe.as_ref().is_some_and(|p| !p.ok) {
        anyhow::bail!("provider check failed");
    }
    Ok(())
}
