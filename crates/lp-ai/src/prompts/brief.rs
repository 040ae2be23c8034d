use lp_core::generated::{BriefRequest, MAX_CHANNELS, MAX_INSIGHTS, MIN_INSIGHTS, PLAN_DAYS};

use super::{Prompt, or_placeholder};

const SCHEMA_HINT: &str = r#"{
  "channels": [
    {
      "name": "<channel name>",
      "rank": <integer, 1 is best>,
      "rationale": "<why this channel fits this product and buyer>",
      "methods": ["<method>", "<method>"],
      "estimated_volume": "<how many prospects are reachable>",
      "expected_response_rate": "<percentage>",
      "apify_actor": "<Apify actor id, or null>",
      "sample_queries": ["<query>", "<query>", "<query>"]
    }
  ],
  "first_week_plan": [
    { "day": "Day 1", "tasks": ["<task>", "<task>", "<task>"] }
  ],
  "key_insights": ["<insight>", "<insight>", "<insight>"]
}"#;

/// Go-to-market launch brief for one product.
#[must_use]
pub fn launch_brief(request: &BriefRequest) -> Prompt {
    let price = or_placeholder(request.price_point.as_deref(), "Not specified");
    let geography = or_placeholder(request.geography.as_deref(), "Not specified");

    let body = format!(
        "You are a go-to-market strategist who plans product launches driven by outbound sales.

Write a launch brief for this product.

PRODUCT
- Product: {product}
- Target buyer: {buyer}
- Price point: {price}
- Geography: {geography}

The brief has three parts.

1. CHANNELS: the best {MAX_CHANNELS} or fewer prospecting channels, ranked 1 to N with no gaps or ties (1 is best). For each channel give its name, rank, why it fits this buyer, concrete methods, how many prospects it can reach, the response rate to expect, an Apify actor id if a scraper exists for it, and two or three search queries that can be run as-is.

2. FIRST WEEK: a {PLAN_DAYS}-day plan, one entry per day, with specific actions.

3. INSIGHTS: {MIN_INSIGHTS} to {MAX_INSIGHTS} things about this market, buyer, or approach that change how to sell.

Pick channels for this buyer, not a generic list. For example:
- Government contractors: LinkedIn and SAM.gov scraping
- Local dentists: Google Maps and Yelp
- Tech founders: LinkedIn, Twitter, and Reddit
- Insurance adjusters: LinkedIn and professional associations
- YouTubers: Social Blade, YouTube, and Twitter",
        product = request.product_description.trim(),
        buyer = request.target_buyer.trim(),
    );
    Prompt::assemble(&body, SCHEMA_HINT)
}
