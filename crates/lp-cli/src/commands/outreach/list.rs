use lp_core::entities::Outreach;
use lp_core::enums::OutreachStatus;
use lp_store::RecordStore;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    prospect: Option<&str>,
    status: Option<&str>,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let status = status
        .map(|value| parse_enum::<OutreachStatus>(value, "status"))
        .transpose()?;
    let limit = ctx.limit(limit, flags.limit);

    let mut outreach: Vec<Outreach> = ctx.store.list_where(&ctx.owner_id, |o: &Outreach| {
        prospect.is_none_or(|id| o.prospect_id.as_deref() == Some(id))
            && status.is_none_or(|s| o.status == s)
    });
    outreach.truncate(limit);
    output(&outreach, flags.format)
}
