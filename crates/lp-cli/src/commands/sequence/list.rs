use lp_core::entities::Sequence;
use lp_store::RecordStore;

use super::SequenceView;
use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    campaign: Option<&str>,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let limit = ctx.limit(limit, flags.limit);
    let sequences: Vec<SequenceView> = ctx
        .store
        .list_where(&ctx.owner_id, |s: &Sequence| {
            campaign.is_none_or(|id| s.campaign_id.as_deref() == Some(id))
        })
        .into_iter()
        .take(limit)
        .map(SequenceView::from)
        .collect();
    output(&sequences, flags.format)
}
