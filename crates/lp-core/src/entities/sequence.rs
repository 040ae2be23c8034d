use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::OutreachChannel;
use crate::errors::CoreError;

/// An ordered follow-up plan built from templates.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Sequence {
    pub id: String,
    pub user_id: String,
    pub campaign_id: Option<String>,
    pub name: String,
    pub steps: Vec<SequenceStep>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SequenceStep {
    pub template_id: String,
    /// Days to wait after the previous step.
    pub delay_days: u32,
    pub channel: OutreachChannel,
}

impl Sequence {
    /// An active sequence. Call [`Sequence::validate`] before storing it.
    #[must_use]
    pub const fn new(
        id: String,
        user_id: String,
        campaign_id: Option<String>,
        name: String,
        steps: Vec<SequenceStep>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            campaign_id,
            name,
            steps,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// A sequence needs a name and at least one step, each naming a template.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] describing the first problem found.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::validation("sequence name required"));
        }
        if self.steps.is_empty() {
            return Err(CoreError::validation("sequence needs at least one step"));
        }
        if let Some(pos) = self.steps.iter().position(|s| s.template_id.trim().is_empty()) {
            return Err(CoreError::validation(format!(
                "sequence step {} has no template",
                pos + 1
            )));
        }
        Ok(())
    }

    /// Days from enrollment until each step fires.
    #[must_use]
    pub fn cumulative_delays(&self) -> Vec<u32> {
        self.steps
            .iter()
            .scan(0u32, |total, step| {
                *total = total.saturating_add(step.delay_days);
                Some(*total)
            })
            .collect()
    }
}
