use lp_core::entities::Prospect;
use serde::Serialize;

use super::{Prompt, or_placeholder};

const SCHEMA_HINT: &str = r#"{
  "patterns": ["<pattern>", "<pattern>", "<pattern>"],
  "recommended_sources": [
    {
      "source": "<source name>",
      "method": "<how to access it>",
      "query": "<search query to run>",
      "estimated_volume": "<number range>",
      "apify_actor": "<Apify actor id, or null>"
    }
  ],
  "apify_queries": ["<ready-to-run query>", "<ready-to-run query>"]
}"#;

const UNKNOWN: &str = "Unknown";

/// What the model sees of each prospect.
#[derive(Serialize)]
struct ProspectSummary<'a> {
    name: &'a str,
    email: &'a str,
    company: &'a str,
    title: &'a str,
    linkedin: &'static str,
    website: &'a str,
}

impl<'a> ProspectSummary<'a> {
    fn from_prospect(p: &'a Prospect) -> Self {
        Self {
            name: or_placeholder(p.name.as_deref(), UNKNOWN),
            email: p.email.trim(),
            company: or_placeholder(p.company.as_deref(), UNKNOWN),
            title: or_placeholder(p.title.as_deref(), UNKNOWN),
            linkedin: if or_placeholder(p.linkedin_url.as_deref(), "").is_empty() {
                "No"
            } else {
                "Yes"
            },
            website: or_placeholder(p.website.as_deref(), UNKNOWN),
        }
    }
}

/// Shared traits of a prospect set and where to find more like them.
#[must_use]
pub fn find_similar(prospects: &[Prospect]) -> Prompt {
    let summaries: Vec<ProspectSummary<'_>> =
        prospects.iter().map(ProspectSummary::from_prospect).collect();
    let listing = serde_json::to_value(&summaries)
        .map(|value| format!("{value:#}"))
        .unwrap_or_default();

    let body = format!(
        "You find B2B prospects. Study the prospects below and work out where to find more people like them.

PROSPECTS
{listing}

Answer three questions:
1. What do they have in common? Consider job titles, industries, company sizes, and locations.
2. Which sources would surface more prospects like these?
3. Which exact search queries should be run?

For each recommended source give its name (LinkedIn, Google Maps, Yelp, Reddit, Facebook Groups, and so on), the access method (scraper, manual search, or API), a concrete query, the expected number of prospects, and an Apify actor id if one applies."
    );
    Prompt::assemble(&body, SCHEMA_HINT)
}
