use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::OutreachChannel;

/// A reusable message body for one channel.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Template {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub channel: OutreachChannel,
    pub subject: Option<String>,
    pub body: String,
    pub is_active: bool,
    #[serde(default)]
    pub usage_count: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Template {
    #[must_use]
    pub fn new(
        id: String,
        user_id: String,
        name: String,
        channel: OutreachChannel,
        subject: Option<String>,
        body: String,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            name,
            channel,
            subject,
            body,
            is_active: true,
            usage_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn record_use(&mut self, now: DateTime<Utc>) {
        self.usage_count = self.usage_count.saturating_add(1);
        self.updated_at = now;
    }
}
