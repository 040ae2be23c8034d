use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::errors::CoreError;

/// Upper bound on ranked channels in one brief.
pub const MAX_CHANNELS: usize = 5;
/// Length of the first-week plan the prompt asks for.
pub const PLAN_DAYS: usize = 7;
pub const MIN_INSIGHTS: usize = 3;
pub const MAX_INSIGHTS: usize = 5;

/// Caller input for launch-brief generation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BriefRequest {
    pub product_description: String,
    pub target_buyer: String,
    #[serde(default)]
    pub price_point: Option<String>,
    #[serde(default)]
    pub geography: Option<String>,
}

impl BriefRequest {
    /// Product description and target buyer are required and must not be blank.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] naming the missing fields.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut missing = Vec::new();
        if self.product_description.trim().is_empty() {
            missing.push("product_description");
        }
        if self.target_buyer.trim().is_empty() {
            missing.push("target_buyer");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(CoreError::validation(format!(
                "{} required",
                missing.join(" and ")
            )))
        }
    }
}

/// Structured launch strategy: ranked channels, a day-by-day plan, insights.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LaunchBrief {
    pub channels: Vec<Channel>,
    pub first_week_plan: Vec<DayPlan>,
    pub key_insights: Vec<String>,
}

/// One recommended prospecting channel. Lower rank is better.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Channel {
    pub name: String,
    pub rank: u32,
    #[serde(default)]
    pub rationale: String,
    #[serde(default)]
    pub methods: Vec<String>,
    #[serde(default)]
    pub estimated_volume: String,
    #[serde(default)]
    pub expected_response_rate: String,
    /// Scraper actor that automates this channel, when one exists.
    #[serde(default, rename = "apify_actor")]
    pub actor_id: Option<String>,
    #[serde(default)]
    pub sample_queries: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DayPlan {
    pub day: String,
    pub tasks: Vec<String>,
}

/// Why a brief's channel ranks are not a dense `1..=N` sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankViolation {
    #[error("brief has no channels")]
    NoChannels,

    #[error("brief has {count} channels, at most {MAX_CHANNELS} allowed")]
    TooManyChannels { count: usize },

    #[error("channel ranks {ranks:?} are not a dense sequence starting at 1")]
    NotDense { ranks: Vec<u32> },
}

impl LaunchBrief {
    /// Order channels by ascending rank. Ties keep their original order.
    pub fn sort_channels(&mut self) {
        self.channels.sort_by_key(|channel| channel.rank);
    }

    /// Check that channel ranks form `1..=N` with no gaps or duplicates.
    ///
    /// # Errors
    ///
    /// Returns the first [`RankViolation`] found.
    pub fn check_ranks(&self) -> Result<(), RankViolation> {
        if self.channels.is_empty() {
            return Err(RankViolation::NoChannels);
        }
        if self.channels.len() > MAX_CHANNELS {
            return Err(RankViolation::TooManyChannels {
                count: self.channels.len(),
            });
        }

        let mut ranks: Vec<u32> = self.channels.iter().map(|c| c.rank).collect();
        ranks.sort_unstable();
        let dense = ranks.iter().zip(1u32..).all(|(rank, expected)| *rank == expected);
        if dense {
            Ok(())
        } else {
            Err(RankViolation::NotDense { ranks })
        }
    }

    /// Soft expectations from the prompt that do not invalidate the brief.
    #[must_use]
    pub fn advisories(&self) -> Vec<String> {
        let mut notes = Vec::new();
        if self.first_week_plan.len() != PLAN_DAYS {
            notes.push(format!(
                "first_week_plan has {} entries, expected {PLAN_DAYS}",
                self.first_week_plan.len()
            ));
        }
        if !(MIN_INSIGHTS..=MAX_INSIGHTS).contains(&self.key_insights.len()) {
            notes.push(format!(
                "key_insights has {} entries, expected {MIN_INSIGHTS}-{MAX_INSIGHTS}",
                self.key_insights.len()
            ));
        }
        notes
    }

    /// Best-ranked channel, if any.
    #[must_use]
    pub fn top_channel(&self) -> Option<&Channel> {
        self.channels.iter().min_by_key(|c| c.rank)
    }
}
