use std::collections::BTreeSet;

use anyhow::Context;
use chrono::Utc;
use lp_core::entities::{Campaign, Prospect};
use lp_core::enums::ActivityType;
use lp_core::ids::{PREFIX_PROSPECT, gen_id};
use lp_core::import::{ImportReport, parse_csv, validate_import};
use lp_store::RecordStore;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    file: &str,
    campaign: Option<&str>,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(file).with_context(|| format!("failed to read {file}"))?;
    let report = import(&text, campaign, ctx)?;
    output(&report, flags.format)
}

/// Create a prospect for every valid, previously unseen row.
///
/// Emails are compared case-insensitively against the owner's existing
/// prospects and against earlier rows in the same file.
fn import(text: &str, campaign: Option<&str>, ctx: &mut AppContext) -> anyhow::Result<ImportReport> {
    if let Some(id) = campaign {
        ctx.store.get::<Campaign>(&ctx.owner_id, id)?;
    }

    let rows = parse_csv(text)?;
    let (valid, mut report) = validate_import(rows);

    let mut seen: BTreeSet<String> = ctx
        .store
        .list::<Prospect>(&ctx.owner_id)
        .into_iter()
        .map(|p| p.email.to_lowercase())
        .collect();

    let now = Utc::now();
    for row in valid {
        if !seen.insert(row.email.to_lowercase()) {
            report.record_failure(&row.email, "prospect already exists");
            continue;
        }
        let prospect = Prospect::new(
            gen_id(PREFIX_PROSPECT)?,
            ctx.owner_id.clone(),
            campaign.map(ToString::to_string),
            row,
            now,
        );
        let description = format!("Imported {}", prospect.display_name());
        let prospect = ctx.store.create(prospect)?;
        ctx.log_activity(ActivityType::ProspectAdded, "prospect", &prospect.id, description)?;
        report.record_success();
    }

    tracing::info!(
        success = report.success,
        failed = report.failed,
        "prospect import finished"
    );
    Ok(report)
}
