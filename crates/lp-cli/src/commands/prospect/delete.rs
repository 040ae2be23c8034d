use chrono::Utc;
use lp_core::entities::{Outreach, Prospect};
use lp_store::RecordStore;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct DeleteResponse {
    deleted: String,
    detached_outreach: usize,
}

pub async fn run(id: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = delete(id, ctx)?;
    output(&response, flags.format)
}

/// Delete the prospect. Its outreach stays for the dashboard, unlinked.
fn delete(id: &str, ctx: &mut AppContext) -> anyhow::Result<DeleteResponse> {
    let prospect: Prospect = ctx.store.delete(&ctx.owner_id, id)?;

    let linked: Vec<Outreach> = ctx.store.list_where(&ctx.owner_id, |o: &Outreach| {
        o.prospect_id.as_deref() == Some(prospect.id.as_str())
    });
    let detached_outreach = linked.len();
    let now = Utc::now();
    for mut outreach in linked {
        outreach.prospect_id = None;
        outreach.updated_at = now;
        ctx.store.update(outreach)?;
    }

    tracing::info!(prospect = %prospect.id, detached_outreach, "prospect deleted");
    Ok(DeleteResponse {
        deleted: prospect.id,
        detached_outreach,
    })
}
