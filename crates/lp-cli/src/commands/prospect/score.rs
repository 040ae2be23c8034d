use chrono::Utc;
use lp_ai::CompletionProvider;
use lp_ai::models::ModelSummary;
use lp_ai::orchestrate::{ScoredProspect, score_prospects_with_progress};
use lp_core::entities::Prospect;
use lp_store::RecordStore;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct ScoreResponse {
    model: ModelSummary,
    items: Vec<ScoredProspect>,
    succeeded: usize,
    failed: usize,
}

pub async fn run(
    ids: &[String],
    campaign: Option<&str>,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let provider = ctx.ai()?;
    let prospects = select(ids, campaign, ctx)?;
    let progress = Progress::bar(prospects.len() as u64, "Scoring prospects");
    let response = score(&provider, &prospects, ctx, &progress).await?;
    progress.finish_clear();
    output(&response, flags.format)
}

fn select(ids: &[String], campaign: Option<&str>, ctx: &AppContext) -> anyhow::Result<Vec<Prospect>> {
    let prospects: Vec<Prospect> = match campaign {
        Some(campaign) => ctx.store.list_where(&ctx.owner_id, |p: &Prospect| {
            p.campaign_id.as_deref() == Some(campaign)
        }),
        None if ids.is_empty() => anyhow::bail!("pass prospect IDs or --campaign"),
        None => ids
            .iter()
            .map(|id| ctx.store.get::<Prospect>(&ctx.owner_id, id))
            .collect::<Result<Vec<_>, _>>()?,
    };
    if prospects.is_empty() {
        anyhow::bail!("no prospects to score");
    }
    Ok(prospects)
}

/// Score in input order and store every successful score.
///
/// Fallback items are reported but never written to the prospect.
async fn score<P: CompletionProvider>(
    provider: &P,
    prospects: &[Prospect],
    ctx: &mut AppContext,
    progress: &Progress,
) -> anyhow::Result<ScoreResponse> {
    let batch = score_prospects_with_progress(provider, prospects, |prospect, _| {
        progress.set_message(prospect.display_name());
        progress.inc(1);
    })
    .await;

    let now = Utc::now();
    let scores = batch.value.scores_by_id();
    for prospect in prospects {
        if let Some(result) = scores.get(prospect.id.as_str()) {
            let mut updated = prospect.clone();
            updated.apply_score(result, now);
            ctx.store.update(updated)?;
        }
    }

    if batch.value.failed > 0 {
        tracing::warn!(failed = batch.value.failed, "some prospects kept their previous score");
    }
    Ok(ScoreResponse {
        model: batch.model,
        items: batch.value.items,
        succeeded: batch.value.succeeded,
        failed: batch.value.failed,
    })
}
