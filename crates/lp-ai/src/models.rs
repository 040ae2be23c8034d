//! Static model registry.
//!
//! Maps each [`ModelTier`] to exactly one hosted model, plus the fixed
//! feature-to-tier assignments and output token budgets. Update the table when
//! new model versions ship.

use lp_core::enums::{AiTask, ModelTier};
use serde::Serialize;

/// A hosted model and what it costs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModelDescriptor {
    pub tier: ModelTier,
    pub identifier: &'static str,
    pub display_name: &'static str,
    pub version: &'static str,
    /// USD per million input tokens.
    pub input_cost_per_mtok: f64,
    /// USD per million output tokens.
    pub output_cost_per_mtok: f64,
    pub description: &'static str,
    pub best_for: &'static [&'static str],
}

/// The part of a descriptor reported alongside each task result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelSummary {
    pub name: String,
    pub version: String,
    pub id: String,
}

impl ModelDescriptor {
    #[must_use]
    pub fn summary(&self) -> ModelSummary {
        ModelSummary {
            name: self.display_name.to_string(),
            version: self.version.to_string(),
            id: self.identifier.to_string(),
        }
    }

    /// Estimated USD cost of one call.
    #[must_use]
    pub fn estimate_cost(&self, input_tokens: u32, output_tokens: u32) -> f64 {
        (f64::from(input_tokens) * self.input_cost_per_mtok
            + f64::from(output_tokens) * self.output_cost_per_mtok)
            / 1_000_000.0
    }
}

static MODELS: [ModelDescriptor; 3] = [
    ModelDescriptor {
        tier: ModelTier::Fast,
        identifier: "claude-3-5-haiku-20241022",
        display_name: "Claude 3.5 Haiku",
        version: "3.5 (Oct 2024)",
        input_cost_per_mtok: 0.25,
        output_cost_per_mtok: 1.25,
        description: "Fast and efficient for simple tasks",
        best_for: &["Prospect scoring", "Email drafting", "Quick assists"],
    },
    ModelDescriptor {
        tier: ModelTier::Balanced,
        identifier: "claude-sonnet-4-6-20260201",
        display_name: "Claude Sonnet 4.6",
        version: "4.6 (Feb 2026)",
        input_cost_per_mtok: 3.0,
        output_cost_per_mtok: 15.0,
        description: "Balanced intelligence and speed",
        best_for: &["Launch strategies", "Market analysis", "Complex reasoning"],
    },
    ModelDescriptor {
        tier: ModelTier::Deep,
        identifier: "claude-opus-4-20260115",
        display_name: "Claude Opus 4",
        version: "4.0 (Jan 2026)",
        input_cost_per_mtok: 15.0,
        output_cost_per_mtok: 75.0,
        description: "Most intelligent for critical tasks",
        best_for: &["Strategic planning", "Deep analysis", "Critical decisions"],
    },
];

/// Output token budget for the configuration probe.
pub const PROBE_MAX_TOKENS: u32 = 10;

#[must_use]
pub fn describe(tier: ModelTier) -> &'static ModelDescriptor {
    match tier {
        ModelTier::Fast => &MODELS[0],
        ModelTier::Balanced => &MODELS[1],
        ModelTier::Deep => &MODELS[2],
    }
}

#[must_use]
pub fn resolve_identifier(tier: ModelTier) -> &'static str {
    describe(tier).identifier
}

/// Every descriptor, fastest tier first.
#[must_use]
pub fn list_all() -> &'static [ModelDescriptor] {
    &MODELS
}

#[must_use]
pub fn tier_for_identifier(identifier: &str) -> Option<ModelTier> {
    MODELS
        .iter()
        .find(|m| m.identifier == identifier)
        .map(|m| m.tier)
}

/// Tier each feature runs on.
#[must_use]
pub const fn assignment(task: AiTask) -> ModelTier {
    match task {
        AiTask::LaunchBrief => ModelTier::Balanced,
        AiTask::ProspectScoring
        | AiTask::ProspectSimilarity
        | AiTask::EmailDrafting
        | AiTask::SocialDrafting => ModelTier::Fast,
    }
}

/// Maximum output tokens requested for each feature.
#[must_use]
pub const fn max_tokens(task: AiTask) -> u32 {
    match task {
        AiTask::LaunchBrief => 4000,
        AiTask::ProspectScoring => 500,
        AiTask::ProspectSimilarity => 2000,
        AiTask::EmailDrafting | AiTask::SocialDrafting => 1000,
    }
}

/// Descriptor of the model a feature runs on.
#[must_use]
pub fn model_for(task: AiTask) -> &'static ModelDescriptor {
    describe(assignment(task))
}
