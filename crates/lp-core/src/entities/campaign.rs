use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::CampaignStatus;
use crate::errors::CoreError;
use crate::generated::{BriefRequest, LaunchBrief};

const ENTITY: &str = "campaign";

/// An outbound campaign built around one product and target buyer.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Campaign {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub description: Option<String>,
    pub product_description: String,
    pub target_buyer: String,
    pub price_point: Option<String>,
    pub geography: Option<String>,
    pub launch_brief: Option<LaunchBrief>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Campaign {
    /// A new, inactive campaign with no brief yet.
    #[must_use]
    pub fn draft(
        id: String,
        user_id: String,
        name: String,
        request: BriefRequest,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            name,
            description: None,
            product_description: request.product_description,
            target_buyer: request.target_buyer,
            price_point: request.price_point,
            geography: request.geography,
            launch_brief: None,
            is_active: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[must_use]
    pub const fn status(&self) -> CampaignStatus {
        if self.is_active {
            CampaignStatus::Active
        } else {
            CampaignStatus::Draft
        }
    }

    /// Finalized campaigns keep their brief; a new campaign supersedes them.
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.is_active && self.launch_brief.is_some()
    }

    /// The inputs the brief was (or will be) generated from.
    #[must_use]
    pub fn brief_request(&self) -> BriefRequest {
        BriefRequest {
            product_description: self.product_description.clone(),
            target_buyer: self.target_buyer.clone(),
            price_point: self.price_point.clone(),
            geography: self.geography.clone(),
        }
    }

    /// Replace the brief on a draft campaign.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Locked`] if the campaign is already finalized.
    pub fn attach_brief(&mut self, brief: LaunchBrief, now: DateTime<Utc>) -> Result<(), CoreError> {
        if self.is_locked() {
            return Err(CoreError::Locked {
                entity_type: ENTITY.to_string(),
                id: self.id.clone(),
                reason: "active campaigns keep their brief; create a new campaign instead".into(),
            });
        }
        self.launch_brief = Some(brief);
        self.updated_at = now;
        Ok(())
    }

    /// Replace the brief inputs on a draft campaign.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Locked`] if the campaign is finalized, or
    /// [`CoreError::Validation`] if the new inputs are incomplete.
    pub fn revise(&mut self, request: BriefRequest, now: DateTime<Utc>) -> Result<(), CoreError> {
        if self.is_locked() {
            return Err(CoreError::Locked {
                entity_type: ENTITY.to_string(),
                id: self.id.clone(),
                reason: "active campaigns keep their inputs; create a new campaign instead".into(),
            });
        }
        request.validate()?;
        self.product_description = request.product_description;
        self.target_buyer = request.target_buyer;
        self.price_point = request.price_point;
        self.geography = request.geography;
        self.updated_at = now;
        Ok(())
    }

    /// Finalize the campaign.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTransition`] if already active, or
    /// [`CoreError::Validation`] if no brief is attached.
    pub fn activate(&mut self, now: DateTime<Utc>) -> Result<(), CoreError> {
        let from = self.status();
        if !from.can_transition_to(CampaignStatus::Active) {
            return Err(CoreError::InvalidTransition {
                entity_type: ENTITY.to_string(),
                id: self.id.clone(),
                from: from.to_string(),
                to: CampaignStatus::Active.to_string(),
            });
        }
        if self.launch_brief.is_none() {
            return Err(CoreError::validation(
                "a campaign needs a launch brief before it can be activated",
            ));
        }
        self.is_active = true;
        self.updated_at = now;
        Ok(())
    }
}
