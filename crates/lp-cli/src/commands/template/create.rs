use chrono::Utc;
use lp_core::entities::Template;
use lp_core::enums::{ActivityType, OutreachChannel};
use lp_core::ids::{PREFIX_TEMPLATE, gen_id};
use lp_store::RecordStore;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    name: &str,
    body: &str,
    subject: Option<&str>,
    channel: &str,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let template = create(name, body, subject, channel, ctx)?;
    output(&template, flags.format)
}

fn create(
    name: &str,
    body: &str,
    subject: Option<&str>,
    channel: &str,
    ctx: &mut AppContext,
) -> anyhow::Result<Template> {
    let channel = parse_enum::<OutreachChannel>(channel, "channel")?;
    if name.trim().is_empty() || body.trim().is_empty() {
        anyhow::bail!("template name and body are required");
    }
    let template = Template::new(
        gen_id(PREFIX_TEMPLATE)?,
        ctx.owner_id.clone(),
        name.trim().to_string(),
        channel,
        subject.map(str::trim).filter(|s| !s.is_empty()).map(ToString::to_string),
        body.to_string(),
        Utc::now(),
    );
    let template = ctx.store.create(template)?;
    ctx.log_activity(
        ActivityType::TemplateCreated,
        "template",
        &template.id,
        format!("Created {channel} template \"{}\"", template.name),
    )?;
    Ok(template)
}
