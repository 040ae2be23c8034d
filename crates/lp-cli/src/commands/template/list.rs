use lp_core::entities::Template;
use lp_core::enums::OutreachChannel;
use lp_store::RecordStore;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    channel: Option<&str>,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let channel = channel
        .map(|value| parse_enum::<OutreachChannel>(value, "channel"))
        .transpose()?;
    let limit = ctx.limit(limit, flags.limit);

    let mut templates: Vec<Template> = ctx.store.list_where(&ctx.owner_id, |t: &Template| {
        channel.is_none_or(|c| t.channel == c)
    });
    templates.truncate(limit);
    output(&templates, flags.format)
}
