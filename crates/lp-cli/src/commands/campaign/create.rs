use chrono::Utc;
use lp_core::entities::Campaign;
use lp_core::enums::ActivityType;
use lp_core::generated::BriefRequest;
use lp_core::ids::{PREFIX_CAMPAIGN, gen_id};
use lp_store::RecordStore;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub struct CreateArgs<'a> {
    pub name: &'a str,
    pub product: &'a str,
    pub buyer: &'a str,
    pub price: Option<&'a str>,
    pub geography: Option<&'a str>,
    pub description: Option<&'a str>,
}

pub async fn run(args: CreateArgs<'_>, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let campaign = create(&args, ctx)?;
    output(&campaign, flags.format)
}

fn create(args: &CreateArgs<'_>, ctx: &mut AppContext) -> anyhow::Result<Campaign> {
    if args.name.trim().is_empty() {
        anyhow::bail!("campaign name is required");
    }
    let request = BriefRequest {
        product_description: args.product.trim().to_string(),
        target_buyer: args.buyer.trim().to_string(),
        price_point: non_blank(args.price),
        geography: non_blank(args.geography),
    };
    request.validate()?;

    let mut campaign = Campaign::draft(
        gen_id(PREFIX_CAMPAIGN)?,
        ctx.owner_id.clone(),
        args.name.trim().to_string(),
        request,
        Utc::now(),
    );
    campaign.description = non_blank(args.description);

    let campaign = ctx.store.create(campaign)?;
    ctx.log_activity(
        ActivityType::CampaignCreated,
        "campaign",
        &campaign.id,
        format!("Created campaign \"{}\"", campaign.name),
    )?;
    tracing::info!(campaign = %campaign.id, "campaign created");
    Ok(campaign)
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(ToString::to_string)
}
