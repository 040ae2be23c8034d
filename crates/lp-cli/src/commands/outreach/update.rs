use chrono::{DateTime, Utc};
use lp_core::entities::{Outreach, Prospect};
use lp_core::enums::{ActivityType, OutreachStatus, ProspectStatus};
use lp_store::RecordStore;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

const TRACKED: &[OutreachStatus] = &[
    OutreachStatus::Delivered,
    OutreachStatus::Opened,
    OutreachStatus::Replied,
    OutreachStatus::Bounced,
];

pub async fn run(id: &str, status: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let status = parse_enum::<OutreachStatus>(status, "status")?;
    let outreach = update(id, status, ctx, Utc::now())?;
    output(&outreach, flags.format)
}

/// Record delivery progress on a sent outreach.
///
/// A reply also moves the linked prospect to responded when the pipeline
/// allows it.
fn update(
    id: &str,
    status: OutreachStatus,
    ctx: &mut AppContext,
    now: DateTime<Utc>,
) -> anyhow::Result<Outreach> {
    if !TRACKED.contains(&status) {
        anyhow::bail!(
            "outreach status can only be set to delivered, opened, replied, or bounced; \
             use `outreach send` to deliver"
        );
    }
    let mut outreach: Outreach = ctx.store.get(&ctx.owner_id, id)?;
    outreach.transition(status, now)?;
    let outreach = ctx.store.update(outreach)?;
    tracing::info!(outreach = %outreach.id, status = %outreach.status, "outreach updated");

    if status != OutreachStatus::Replied {
        return Ok(outreach);
    }
    let prospect = outreach
        .prospect_id
        .as_deref()
        .and_then(|pid| ctx.store.get::<Prospect>(&ctx.owner_id, pid).ok());
    let who = match prospect {
        Some(mut prospect) => {
            if prospect.status.can_transition_to(ProspectStatus::Responded) {
                prospect.transition(ProspectStatus::Responded, now)?;
                ctx.store.update(prospect.clone())?;
            }
            prospect.display_name().to_string()
        }
        None => "Prospect".to_string(),
    };
    ctx.log_activity(
        ActivityType::ResponseReceived,
        "outreach",
        &outreach.id,
        format!("{who} replied"),
    )?;
    Ok(outreach)
}

#[cfg(test)]
mod tests {
    use lp_core::entities::ActivityLog;
    use lp_core::generated::EmailDraft;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::commands::shared::testing::seed_prospect;

    fn sent(ctx: &mut AppContext, prospect_id: Option<&str>) -> Outreach {
        let now = Utc::now();
        let mut outreach = Outreach::from_draft(
            "out-00000001".into(),
            ctx.owner_id.clone(),
            prospect_id.map(ToString::to_string),
            None,
            EmailDraft {
                subject: "Faster audits".into(),
                body: "Hi Dana".into(),
            },
            now,
        );
        outreach.mark_sent("msg-0001", now).unwrap();
        ctx.store.create(outreach).unwrap()
    }

    #[test]
    fn open_then_reply_stamps_times() {
        let mut ctx = AppContext::for_tests();
        sent(&mut ctx, None);

        let opened = update("out-00000001", OutreachStatus::Opened, &mut ctx, Utc::now()).unwrap();
        assert!(opened.opened_at.is_some());
        let replied = update("out-00000001", OutreachStatus::Replied, &mut ctx, Utc::now()).unwrap();
        assert_eq!(replied.status, OutreachStatus::Replied);
        assert!(replied.replied_at.is_some());
    }

    #[test]
    fn reply_marks_contacted_prospect_responded() {
        let mut ctx = AppContext::for_tests();
        let mut prospect = seed_prospect(&mut ctx, "prs-00000001", "dana@brightsmiles.example");
        prospect.status = ProspectStatus::Contacted;
        ctx.store.update(prospect).unwrap();
        sent(&mut ctx, Some("prs-00000001"));

        update("out-00000001", OutreachStatus::Replied, &mut ctx, Utc::now()).unwrap();
        let prospect: Prospect = ctx.store.get("usr-test", "prs-00000001").unwrap();
        assert_eq!(prospect.status, ProspectStatus::Responded);
        let log: Vec<ActivityLog> = ctx.store.list("usr-test");
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].activity_type, ActivityType::ResponseReceived);
        assert_eq!(log[0].description, "Dana Ruiz replied");
    }

    #[test]
    fn bounced_outreach_is_terminal() {
        let mut ctx = AppContext::for_tests();
        sent(&mut ctx, None);
        update("out-00000001", OutreachStatus::Bounced, &mut ctx, Utc::now()).unwrap();
        let err = update("out-00000001", OutreachStatus::Opened, &mut ctx, Utc::now()).unwrap_err();
        assert!(err.to_string().contains("Invalid state transition"));
    }

    #[test]
    fn sent_status_is_not_settable() {
        let mut ctx = AppContext::for_tests();
        let err = update("out-00000001", OutreachStatus::Sent, &mut ctx, Utc::now()).unwrap_err();
        assert!(err.to_string().contains("outreach send"));
    }
}
