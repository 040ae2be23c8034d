use lp_core::entities::Campaign;
use lp_store::RecordStore;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let campaign: Campaign = ctx.store.get(&ctx.owner_id, id)?;
    output(&campaign, flags.format)
}
