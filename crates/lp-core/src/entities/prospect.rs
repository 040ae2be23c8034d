use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ProspectStatus;
use crate::errors::CoreError;
use crate::generated::ScoreResult;

/// A person who may be contacted in a campaign.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Prospect {
    pub id: String,
    pub user_id: String,
    pub campaign_id: Option<String>,
    pub email: String,
    pub name: Option<String>,
    pub company: Option<String>,
    pub title: Option<String>,
    pub phone: Option<String>,
    pub linkedin_url: Option<String>,
    pub website: Option<String>,
    pub notes: Option<String>,
    pub status: ProspectStatus,
    pub score: Option<u8>,
    #[serde(default)]
    pub custom_fields: BTreeMap<String, serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied contact fields for a new prospect (form entry or CSV row).
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProspectInput {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Prospect {
    #[must_use]
    pub fn new(
        id: String,
        user_id: String,
        campaign_id: Option<String>,
        input: ProspectInput,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            campaign_id,
            email: input.email,
            name: input.name,
            company: input.company,
            title: input.title,
            phone: input.phone,
            linkedin_url: input.linkedin_url,
            website: input.website,
            notes: input.notes,
            status: ProspectStatus::New,
            score: None,
            custom_fields: BTreeMap::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Name if known, otherwise the email address.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.email)
    }

    /// Record a successful AI score. Fallback scores are never applied.
    pub fn apply_score(&mut self, result: &ScoreResult, now: DateTime<Utc>) {
        self.score = Some(result.score);
        self.updated_at = now;
    }

    /// Move the prospect along the pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTransition`] when `next` is not reachable
    /// from the current status.
    pub fn transition(&mut self, next: ProspectStatus, now: DateTime<Utc>) -> Result<(), CoreError> {
        if !self.status.can_transition_to(next) {
            return Err(CoreError::InvalidTransition {
                entity_type: "prospect".into(),
                id: self.id.clone(),
                from: self.status.to_string(),
                to: next.to_string(),
            });
        }
        self.status = next;
        self.updated_at = now;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prospect() -> Prospect {
        Prospect::new(
            "prs-00000001".into(),
            "usr-1".into(),
            None,
            ProspectInput {
                email: "dana@brightsmiles.example".into(),
                name: Some("Dana Ruiz".into()),
                ..ProspectInput::default()
            },
            Utc::now(),
        )
    }

    #[test]
    fn new_prospect_starts_unscored() {
        let p = prospect();
        assert_eq!(p.status, ProspectStatus::New);
        assert_eq!(p.score, None);
        assert_eq!(p.display_name(), "Dana Ruiz");
    }

    #[test]
    fn display_name_falls_back_to_email() {
        let mut p = prospect();
        p.name = Some("   ".into());
        assert_eq!(p.display_name(), "dana@brightsmiles.example");
    }

    #[test]
    fn apply_score_sets_score() {
        let mut p = prospect();
        p.apply_score(&ScoreResult::from_raw(81.4, None), Utc::now());
        assert_eq!(p.score, Some(81));
    }

    #[test]
    fn transition_follows_pipeline() {
        let mut p = prospect();
        p.transition(ProspectStatus::Contacted, Utc::now()).unwrap();
        let err = p.transition(ProspectStatus::Converted, Utc::now()).unwrap_err();
        assert!(matches!(err, CoreError::InvalidTransition { .. }));
        assert_eq!(p.status, ProspectStatus::Contacted);
    }
}
