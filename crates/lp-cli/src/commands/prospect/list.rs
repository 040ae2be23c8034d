use lp_core::entities::Prospect;
use lp_core::enums::ProspectStatus;
use lp_store::RecordStore;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    campaign: Option<&str>,
    status: Option<&str>,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let status = status
        .map(|value| parse_enum::<ProspectStatus>(value, "status"))
        .transpose()?;
    let limit = ctx.limit(limit, flags.limit);

    let mut prospects: Vec<Prospect> = ctx.store.list_where(&ctx.owner_id, |p: &Prospect| {
        campaign.is_none_or(|id| p.campaign_id.as_deref() == Some(id))
            && status.is_none_or(|s| p.status == s)
    });
    prospects.truncate(limit);
    output(&prospects, flags.format)
}
