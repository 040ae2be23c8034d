use chrono::{DateTime, Utc};
use lp_core::dashboard::{DashboardStats, top_templates, upcoming_schedule};
use lp_core::entities::{Campaign, Outreach, Prospect, Template};
use lp_store::RecordStore;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DashboardArgs;
use crate::context::AppContext;
use crate::output::output;

const TOP_TEMPLATES: usize = 5;
const UPCOMING: usize = 10;

#[derive(Debug, Serialize)]
struct DashboardView {
    #[serde(flatten)]
    stats: DashboardStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_templates: Option<Vec<Template>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    upcoming: Option<Vec<Outreach>>,
}

/// Handle `launchpad dashboard`.
pub async fn handle(
    args: &DashboardArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    output(&build(args.detail, ctx, Utc::now()), flags.format)
}

fn build(detail: bool, ctx: &AppContext, now: DateTime<Utc>) -> DashboardView {
    let owner = ctx.owner_id.as_str();
    let campaigns: Vec<Campaign> = ctx.store.list(owner);
    let prospects: Vec<Prospect> = ctx.store.list(owner);
    let outreach: Vec<Outreach> = ctx.store.list(owner);
    let stats = DashboardStats::compute(&campaigns, &prospects, &outreach);

    if !detail {
        return DashboardView {
            stats,
            top_templates: None,
            upcoming: None,
        };
    }
    let templates: Vec<Template> = ctx.store.list(owner);
    DashboardView {
        stats,
        top_templates: Some(
            top_templates(&templates, TOP_TEMPLATES)
                .into_iter()
                .cloned()
                .collect(),
        ),
        upcoming: Some(
            upcoming_schedule(&outreach, now, UPCOMING)
                .into_iter()
                .cloned()
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use lp_core::enums::{OutreachStatus, ProspectStatus};
    use lp_core::generated::EmailDraft;

    use super::*;
    use crate::commands::shared::testing::{seed_campaign, seed_prospect};

    #[test]
    fn empty_store_has_zero_rates() {
        let ctx = AppContext::for_tests();
        let view = build(false, &ctx, Utc::now());
        assert_eq!(view.stats.total_prospects, 0);
        assert_eq!(view.stats.response_rate, "0");
        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("top_templates").is_none());
        assert_eq!(json["conversion_rate"], "0");
    }

    #[test]
    fn counts_only_the_owner_records() {
        let mut ctx = AppContext::for_tests();
        seed_campaign(&mut ctx, "cmp-00000001");
        let mut converted = seed_prospect(&mut ctx, "prs-00000001", "a@example.com");
        converted.status = ProspectStatus::Converted;
        ctx.store.update(converted).unwrap();
        seed_prospect(&mut ctx, "prs-00000002", "b@example.com");

        ctx.owner_id = "usr-other".into();
        seed_prospect(&mut ctx, "prs-00000003", "c@example.com");
        ctx.owner_id = "usr-test".into();

        let view = build(false, &ctx, Utc::now());
        assert_eq!(view.stats.total_prospects, 2);
        assert_eq!(view.stats.converted_prospects, 1);
        assert_eq!(view.stats.conversion_rate, "50.0");
        assert_eq!(view.stats.active_campaigns, 0);
    }

    #[test]
    fn detail_lists_upcoming_outreach() {
        let mut ctx = AppContext::for_tests();
        let now = Utc::now();
        let mut outreach = Outreach::from_draft(
            "out-00000001".into(),
            "usr-test".into(),
            None,
            None,
            EmailDraft {
                subject: "s".into(),
                body: "b".into(),
            },
            now,
        );
        outreach.schedule(now + Duration::days(1), now).unwrap();
        ctx.store.create(outreach).unwrap();

        let view = build(true, &ctx, now);
        assert_eq!(view.upcoming.unwrap().len(), 1);
        assert!(view.top_templates.unwrap().is_empty());
    }

    fn sent_email(ctx: &AppContext, id: &str, prospect_id: &str, now: DateTime<Utc>) -> Outreach {
        let mut outreach = Outreach::from_draft(
            id.into(),
            ctx.owner_id.clone(),
            Some(prospect_id.into()),
            None,
            EmailDraft {
                subject: "s".into(),
                body: "b".into(),
            },
            now,
        );
        outreach.mark_sent("msg-0001", now).unwrap();
        outreach
    }

    #[test]
    fn tracked_replies_and_conversions_move_the_rates() {
        let mut ctx = AppContext::for_tests();
        let now = Utc::now();
        for (n, email) in ["a@example.com", "b@example.com", "c@example.com", "d@example.com"]
            .iter()
            .enumerate()
        {
            let prospect_id = format!("prs-0000000{n}");
            let mut prospect = seed_prospect(&mut ctx, &prospect_id, email);
            prospect.transition(ProspectStatus::Contacted, now).unwrap();

            let mut outreach = sent_email(&ctx, &format!("out-0000000{n}"), &prospect_id, now);
            if n < 2 {
                outreach.transition(OutreachStatus::Opened, now).unwrap();
            }
            if n == 0 {
                outreach.transition(OutreachStatus::Replied, now).unwrap();
                prospect.transition(ProspectStatus::Responded, now).unwrap();
                prospect.transition(ProspectStatus::Converted, now).unwrap();
            }
            if n == 3 {
                outreach.transition(OutreachStatus::Bounced, now).unwrap();
            }
            ctx.store.create(outreach).unwrap();
            ctx.store.update(prospect).unwrap();
        }

        let stats = build(false, &ctx, now).stats;
        assert_eq!(stats.emails_sent, 4);
        assert_eq!(stats.emails_opened, 2);
        assert_eq!(stats.emails_replied, 1);
        assert_eq!(stats.open_rate, "50.0");
        assert_eq!(stats.response_rate, "25.0");
        assert_eq!(stats.conversion_rate, "25.0");
        assert_eq!(stats.contacted_prospects, 3);
        assert_eq!(stats.converted_prospects, 1);
    }
}
