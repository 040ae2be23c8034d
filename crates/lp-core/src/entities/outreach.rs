use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{OutreachChannel, OutreachStatus};
use crate::errors::CoreError;
use crate::generated::EmailDraft;

/// Metadata key holding the mail provider's message id.
pub const METADATA_MESSAGE_ID: &str = "resend_id";

/// One outbound message, drafted, scheduled, or sent.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Outreach {
    pub id: String,
    pub user_id: String,
    pub prospect_id: Option<String>,
    pub campaign_id: Option<String>,
    pub channel: OutreachChannel,
    pub status: OutreachStatus,
    pub subject: Option<String>,
    pub body: String,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub sent_at: Option<DateTime<Utc>>,
    pub opened_at: Option<DateTime<Utc>>,
    pub replied_at: Option<DateTime<Utc>>,
    #[serde(default = "default_sequence_step")]
    pub sequence_step: u32,
    pub parent_outreach_id: Option<String>,
    #[serde(default)]
    pub metadata: BTreeMap<String, serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

const fn default_sequence_step() -> u32 {
    1
}

impl Outreach {
    /// A draft email outreach carrying a generated subject and body.
    #[must_use]
    pub fn from_draft(
        id: String,
        user_id: String,
        prospect_id: Option<String>,
        campaign_id: Option<String>,
        draft: EmailDraft,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            prospect_id,
            campaign_id,
            channel: OutreachChannel::Email,
            status: OutreachStatus::Draft,
            subject: Some(draft.subject),
            body: draft.body,
            scheduled_at: None,
            sent_at: None,
            opened_at: None,
            replied_at: None,
            sequence_step: default_sequence_step(),
            parent_outreach_id: None,
            metadata: BTreeMap::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Queue a draft for later delivery.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTransition`] unless the outreach is a draft.
    pub fn schedule(&mut self, at: DateTime<Utc>, now: DateTime<Utc>) -> Result<(), CoreError> {
        self.transition(OutreachStatus::Scheduled, now)?;
        self.scheduled_at = Some(at);
        Ok(())
    }

    /// Record a successful hand-off to the mail provider.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTransition`] unless the outreach is a draft
    /// or scheduled.
    pub fn mark_sent(&mut self, message_id: &str, now: DateTime<Utc>) -> Result<(), CoreError> {
        self.transition(OutreachStatus::Sent, now)?;
        self.sent_at = Some(now);
        self.record_message_id(message_id);
        Ok(())
    }

    /// Remember the provider's id for a message it accepted, sent or queued.
    pub fn record_message_id(&mut self, message_id: &str) {
        self.metadata.insert(
            METADATA_MESSAGE_ID.to_string(),
            serde_json::Value::String(message_id.to_string()),
        );
    }

    /// Provider message id recorded by [`Outreach::record_message_id`].
    #[must_use]
    pub fn message_id(&self) -> Option<&str> {
        self.metadata.get(METADATA_MESSAGE_ID).and_then(|v| v.as_str())
    }

    /// Advance the delivery status, stamping open/reply times.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTransition`] when `next` is not reachable.
    pub fn transition(&mut self, next: OutreachStatus, now: DateTime<Utc>) -> Result<(), CoreError> {
        if !self.status.can_transition_to(next) {
            return Err(CoreError::InvalidTransition {
                entity_type: "outreach".into(),
                id: self.id.clone(),
                from: self.status.to_string(),
                to: next.to_string(),
            });
        }
        match next {
            OutreachStatus::Opened => self.opened_at = Some(now),
            OutreachStatus::Replied => self.replied_at = Some(now),
            _ => {}
        }
        self.status = next;
        self.updated_at = now;
        Ok(())
    }
}
