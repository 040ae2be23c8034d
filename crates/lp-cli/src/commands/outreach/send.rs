use chrono::{DateTime, Utc};
use lp_core::entities::{Outreach, Prospect, Template};
use lp_core::enums::{ActivityType, OutreachChannel, ProspectStatus};
use lp_core::generated::EmailDraft;
use lp_core::ids::{PREFIX_OUTREACH, gen_id};
use lp_mail::{Mailer, OutboundEmail};
use lp_store::RecordStore;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_time;
use crate::context::AppContext;
use crate::output::output;

pub struct SendArgs<'a> {
    pub prospect: &'a str,
    /// Supplies the subject and body when those are not given.
    pub template: Option<&'a str>,
    pub subject: Option<&'a str>,
    pub body: Option<&'a str>,
    pub schedule: Option<&'a str>,
    pub campaign: Option<&'a str>,
}

pub async fn run(args: SendArgs<'_>, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let now = Utc::now();
    let at = args
        .schedule
        .map(|raw| parse_time(raw, "schedule"))
        .transpose()?;
    let mailer = ctx.mailer()?;
    let outreach = match at {
        Some(at) => schedule(&mailer, &args, at, ctx, now).await?,
        None => send_now(&mailer, &args, ctx, now).await?,
    };
    output(&outreach, flags.format)
}

struct Prepared {
    prospect: Prospect,
    template: Option<Template>,
    outreach: Outreach,
    email: OutboundEmail,
}

/// Resolve the prospect and optional template into a validated draft.
fn prepare(
    args: &SendArgs<'_>,
    ctx: &AppContext,
    scheduled_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> anyhow::Result<Prepared> {
    let template = args
        .template
        .map(|id| ctx.store.get::<Template>(&ctx.owner_id, id))
        .transpose()?;
    if let Some(template) = &template {
        if !template.is_active {
            anyhow::bail!("template {} is inactive", template.id);
        }
        if template.channel != OutreachChannel::Email {
            anyhow::bail!("template {} is a {} template", template.id, template.channel);
        }
    }

    let subject = args
        .subject
        .or_else(|| template.as_ref().and_then(|t| t.subject.as_deref()))
        .unwrap_or_default()
        .trim()
        .to_string();
    let body = args
        .body
        .or_else(|| template.as_ref().map(|t| t.body.as_str()))
        .unwrap_or_default()
        .to_string();
    if subject.is_empty() || body.trim().is_empty() {
        anyhow::bail!("subject and body are required");
    }

    let prospect: Prospect = ctx.store.get(&ctx.owner_id, args.prospect)?;
    let email = OutboundEmail {
        to: prospect.email.clone(),
        subject: subject.clone(),
        body: body.clone(),
        scheduled_at,
    };
    email.validate()?;

    let campaign_id = args
        .campaign
        .map(ToString::to_string)
        .or_else(|| prospect.campaign_id.clone());
    let outreach = Outreach::from_draft(
        gen_id(PREFIX_OUTREACH)?,
        ctx.owner_id.clone(),
        Some(prospect.id.clone()),
        campaign_id,
        EmailDraft { subject, body },
        now,
    );
    Ok(Prepared {
        prospect,
        template,
        outreach,
        email,
    })
}

fn record_template_use(
    template: Option<Template>,
    ctx: &mut AppContext,
    now: DateTime<Utc>,
) -> anyhow::Result<()> {
    if let Some(mut template) = template {
        template.record_use(now);
        ctx.store.update(template)?;
    }
    Ok(())
}

/// Hand the email to `mailer` for delivery at `at`, then record it as
/// scheduled with the provider's message id.
///
/// Nothing is stored when the provider refuses the email.
async fn schedule<M: Mailer>(
    mailer: &M,
    args: &SendArgs<'_>,
    at: DateTime<Utc>,
    ctx: &mut AppContext,
    now: DateTime<Utc>,
) -> anyhow::Result<Outreach> {
    if at <= now {
        anyhow::bail!("schedule time {} is not in the future", at.to_rfc3339());
    }
    let Prepared {
        template,
        mut outreach,
        email,
        ..
    } = prepare(args, ctx, Some(at), now)?;

    let queued = mailer.send(&email).await?;
    outreach.schedule(at, now)?;
    outreach.record_message_id(&queued.id);
    let outreach = ctx.store.create(outreach)?;
    record_template_use(template, ctx, now)?;
    tracing::info!(outreach = %outreach.id, message_id = %queued.id, at = %at, "outreach scheduled");
    Ok(outreach)
}

/// Deliver through `mailer`, then record the sent outreach.
///
/// Nothing is stored when delivery fails. A successful send moves a new
/// prospect to contacted; prospects further along keep their status.
async fn send_now<M: Mailer>(
    mailer: &M,
    args: &SendArgs<'_>,
    ctx: &mut AppContext,
    now: DateTime<Utc>,
) -> anyhow::Result<Outreach> {
    let Prepared {
        mut prospect,
        template,
        mut outreach,
        email,
    } = prepare(args, ctx, None, now)?;

    let sent = mailer.send(&email).await?;
    outreach.mark_sent(&sent.id, now)?;
    let outreach = ctx.store.create(outreach)?;
    record_template_use(template, ctx, now)?;

    if prospect.status.can_transition_to(ProspectStatus::Contacted) {
        prospect.transition(ProspectStatus::Contacted, now)?;
        ctx.store.update(prospect.clone())?;
    }
    ctx.log_activity(
        ActivityType::OutreachSent,
        "outreach",
        &outreach.id,
        format!("Sent \"{}\" to {}", email.subject, prospect.display_name()),
    )?;
    tracing::info!(outreach = %outreach.id, message_id = %sent.id, "outreach sent");
    Ok(outreach)
}
