//! Central schema registry for LaunchPad types.
//!
//! The `SchemaRegistry` builds JSON Schemas from lp-core types at construction
//! time using [`schemars::schema_for!`] and provides validation via `jsonschema`.

use std::collections::HashMap;

use schemars::schema_for;

use crate::error::SchemaError;

/// Registered schema names that other crates refer to directly.
pub mod names {
    pub const LAUNCH_BRIEF: &str = "launch_brief";
    pub const SCORE_RESPONSE: &str = "score_response";
    pub const SIMILARITY_ANALYSIS: &str = "similarity_analysis";
    pub const EMAIL_DRAFT: &str = "email_draft";
}

/// Central store of all JSON Schemas in LaunchPad.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

/// Generate the schema for `$ty` and store it under `$name`.
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, serde_json::to_value(schema_for!($ty)).unwrap());
    };
}

impl SchemaRegistry {
    /// Build a registry with every AI-response and record schema.
    ///
    /// # Panics
    ///
    /// Panics if `serde_json::to_value` fails on any `schemars`-generated
    /// schema, which `schemars` output never triggers.
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        // --- Model responses (4) ---
        register!(schemas, names::LAUNCH_BRIEF, lp_core::generated::LaunchBrief);
        register!(schemas, names::SCORE_RESPONSE, lp_core::generated::ScoreResponse);
        register!(
            schemas,
            names::SIMILARITY_ANALYSIS,
            lp_core::generated::SimilarityAnalysis
        );
        register!(schemas, names::EMAIL_DRAFT, lp_core::generated::EmailDraft);

        // --- Caller inputs (2) ---
        register!(schemas, "brief_request", lp_core::generated::BriefRequest);
        register!(schemas, "prospect_input", lp_core::entities::ProspectInput);

        // --- Records (6) ---
        register!(schemas, "campaign", lp_core::entities::Campaign);
        register!(schemas, "prospect", lp_core::entities::Prospect);
        register!(schemas, "outreach", lp_core::entities::Outreach);
        register!(schemas, "template", lp_core::entities::Template);
        register!(schemas, "sequence", lp_core::entities::Sequence);
        register!(schemas, "activity_log", lp_core::entities::ActivityLog);

        // --- Reports (2) ---
        register!(schemas, "dashboard_stats", lp_core::dashboard::DashboardStats);
        register!(schemas, "import_report", lp_core::import::ImportReport);

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Generation(format!("{e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| {
                let path = e.instance_path.to_string();
                if path.is_empty() {
                    format!("{e}")
                } else {
                    format!("{path}: {e}")
                }
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// List all registered schema names.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
