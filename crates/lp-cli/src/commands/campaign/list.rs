use lp_core::entities::Campaign;
use lp_store::RecordStore;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    active_only: bool,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let limit = ctx.limit(limit, flags.limit);
    let mut campaigns: Vec<Campaign> = ctx
        .store
        .list_where(&ctx.owner_id, |c: &Campaign| !active_only || c.is_active);
    campaigns.truncate(limit);
    output(&campaigns, flags.format)
}
