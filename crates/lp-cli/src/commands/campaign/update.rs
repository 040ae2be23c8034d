use chrono::Utc;
use lp_core::entities::Campaign;
use lp_store::RecordStore;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Edits for a draft campaign. Blank optional values clear the field.
#[derive(Debug, Default)]
pub struct CampaignEdits<'a> {
    pub name: Option<&'a str>,
    pub product: Option<&'a str>,
    pub buyer: Option<&'a str>,
    pub price: Option<&'a str>,
    pub geography: Option<&'a str>,
    pub description: Option<&'a str>,
}

pub async fn run(
    id: &str,
    edits: CampaignEdits<'_>,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let campaign = update(id, &edits, ctx)?;
    output(&campaign, flags.format)
}

fn update(id: &str, edits: &CampaignEdits<'_>, ctx: &mut AppContext) -> anyhow::Result<Campaign> {
    let mut campaign: Campaign = ctx.store.get(&ctx.owner_id, id)?;
    let now = Utc::now();

    let mut request = campaign.brief_request();
    if let Some(product) = edits.product {
        request.product_description = product.trim().to_string();
    }
    if let Some(buyer) = edits.buyer {
        request.target_buyer = buyer.trim().to_string();
    }
    if let Some(price) = edits.price {
        request.price_point = clearable(price);
    }
    if let Some(geography) = edits.geography {
        request.geography = clearable(geography);
    }
    campaign.revise(request, now)?;

    if let Some(name) = edits.name {
        if name.trim().is_empty() {
            anyhow::bail!("campaign name is required");
        }
        campaign.name = name.trim().to_string();
    }
    if let Some(description) = edits.description {
        campaign.description = clearable(description);
    }

    let campaign = ctx.store.update(campaign)?;
    tracing::info!(campaign = %campaign.id, "campaign updated");
    Ok(campaign)
}

fn clearable(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
