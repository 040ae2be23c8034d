use chrono::Utc;
use lp_core::entities::{Campaign, Prospect};
use lp_store::RecordStore;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct DeleteResponse {
    deleted: String,
    detached_prospects: usize,
}

pub async fn run(id: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = delete(id, ctx)?;
    output(&response, flags.format)
}

/// Delete the campaign and detach its prospects, which stay in the pipeline.
fn delete(id: &str, ctx: &mut AppContext) -> anyhow::Result<DeleteResponse> {
    let campaign: Campaign = ctx.store.delete(&ctx.owner_id, id)?;

    let attached: Vec<Prospect> = ctx.store.list_where(&ctx.owner_id, |p: &Prospect| {
        p.campaign_id.as_deref() == Some(campaign.id.as_str())
    });
    let detached_prospects = attached.len();
    let now = Utc::now();
    for mut prospect in attached {
        prospect.campaign_id = None;
        prospect.updated_at = now;
        ctx.store.update(prospect)?;
    }

    tracing::info!(campaign = %campaign.id, detached_prospects, "campaign deleted");
    Ok(DeleteResponse {
        deleted: campaign.id,
        detached_prospects,
    })
}
