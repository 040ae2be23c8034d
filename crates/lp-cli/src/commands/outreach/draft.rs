use chrono::Utc;
use lp_ai::CompletionProvider;
use lp_ai::models::ModelSummary;
use lp_ai::orchestrate::draft_email;
use lp_core::entities::{Campaign, Outreach, Prospect};
use lp_core::ids::{PREFIX_OUTREACH, gen_id};
use lp_store::RecordStore;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct DraftResponse {
    outreach: Outreach,
    model: ModelSummary,
    word_count: usize,
}

pub async fn run(
    prospect: &str,
    campaign: Option<&str>,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let provider = ctx.ai()?;
    let spinner = Progress::spinner("Drafting email...");
    let result = draft(&provider, prospect, campaign, ctx).await;
    spinner.finish_clear();
    output(&result?, flags.format)
}

/// Draft an email and keep it as a draft outreach for review before sending.
async fn draft<P: CompletionProvider>(
    provider: &P,
    prospect_id: &str,
    campaign: Option<&str>,
    ctx: &mut AppContext,
) -> anyhow::Result<DraftResponse> {
    let prospect: Prospect = ctx.store.get(&ctx.owner_id, prospect_id)?;
    let campaign_id = match campaign {
        Some(id) => Some(ctx.store.get::<Campaign>(&ctx.owner_id, id)?.id),
        None => prospect.campaign_id.clone(),
    };

    let generated = draft_email(provider, &prospect).await?;
    let word_count = generated.value.word_count();
    let outreach = Outreach::from_draft(
        gen_id(PREFIX_OUTREACH)?,
        ctx.owner_id.clone(),
        Some(prospect.id),
        campaign_id,
        generated.value,
        Utc::now(),
    );
    let outreach = ctx.store.create(outreach)?;

    Ok(DraftResponse {
        outreach,
        model: generated.model,
        word_count,
    })
}
