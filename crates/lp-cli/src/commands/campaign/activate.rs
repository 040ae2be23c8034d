use chrono::Utc;
use lp_core::entities::Campaign;
use lp_store::RecordStore;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let campaign = activate(id, ctx)?;
    output(&campaign, flags.format)
}

fn activate(id: &str, ctx: &mut AppContext) -> anyhow::Result<Campaign> {
    let mut campaign: Campaign = ctx.store.get(&ctx.owner_id, id)?;
    campaign.activate(Utc::now())?;
    let campaign = ctx.store.update(campaign)?;
    tracing::info!(campaign = %campaign.id, "campaign activated");
    Ok(campaign)
}
