use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Shared traits of a selected prospect set and where to find more like them.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SimilarityAnalysis {
    pub patterns: Vec<String>,
    pub recommended_sources: Vec<RecommendedSource>,
    /// Search queries ready to paste into a scraper.
    #[serde(default, rename = "apify_queries")]
    pub queries: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RecommendedSource {
    pub source: String,
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub estimated_volume: String,
    #[serde(default, rename = "apify_actor")]
    pub actor_id: Option<String>,
}
