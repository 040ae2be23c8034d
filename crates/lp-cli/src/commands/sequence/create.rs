use chrono::Utc;
use lp_core::entities::{Campaign, Sequence, SequenceStep, Template};
use lp_core::enums::OutreachChannel;
use lp_core::ids::{PREFIX_SEQUENCE, gen_id};
use lp_store::RecordStore;

use super::SequenceView;
use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    name: &str,
    campaign: Option<&str>,
    steps: &[String],
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let sequence = create(name, campaign, steps, ctx)?;
    output(&SequenceView::from(sequence), flags.format)
}

/// Parse `<template-id>:<delay-days>[:<channel>]`.
fn parse_step(raw: &str) -> anyhow::Result<(String, u32, Option<OutreachChannel>)> {
    let mut parts = raw.split(':').map(str::trim);
    let template_id = parts.next().unwrap_or_default().to_string();
    let delay = parts
        .next()
        .ok_or_else(|| anyhow::anyhow!("invalid step '{raw}': expected <template-id>:<delay-days>"))?;
    let delay_days = delay
        .parse::<u32>()
        .map_err(|error| anyhow::anyhow!("invalid step '{raw}': delay {error}"))?;
    let channel = parts
        .next()
        .map(|value| parse_enum::<OutreachChannel>(value, "channel"))
        .transpose()?;
    if parts.next().is_some() {
        anyhow::bail!("invalid step '{raw}': too many fields");
    }
    Ok((template_id, delay_days, channel))
}

/// Build a sequence whose steps name the owner's active templates. A step
/// channel defaults to its template's channel and must agree with it.
fn create(
    name: &str,
    campaign: Option<&str>,
    steps: &[String],
    ctx: &mut AppContext,
) -> anyhow::Result<Sequence> {
    if let Some(id) = campaign {
        ctx.store.get::<Campaign>(&ctx.owner_id, id)?;
    }

    let mut resolved = Vec::with_capacity(steps.len());
    for raw in steps {
        let (template_id, delay_days, channel) = parse_step(raw)?;
        if template_id.is_empty() {
            resolved.push(SequenceStep {
                template_id,
                delay_days,
                channel: channel.unwrap_or(OutreachChannel::Email),
            });
            continue;
        }
        let template: Template = ctx.store.get(&ctx.owner_id, &template_id)?;
        if !template.is_active {
            anyhow::bail!("template {} is inactive", template.id);
        }
        let channel = channel.unwrap_or(template.channel);
        if channel != template.channel {
            anyhow::bail!(
                "step '{raw}' uses {channel} but template {} is a {} template",
                template.id,
                template.channel
            );
        }
        resolved.push(SequenceStep {
            template_id,
            delay_days,
            channel,
        });
    }

    let sequence = Sequence::new(
        gen_id(PREFIX_SEQUENCE)?,
        ctx.owner_id.clone(),
        campaign.map(ToString::to_string),
        name.trim().to_string(),
        resolved,
        Utc::now(),
    );
    sequence.validate()?;
    let sequence = ctx.store.create(sequence)?;
    tracing::info!(sequence = %sequence.id, steps = sequence.steps.len(), "sequence created");
    Ok(sequence)
}
