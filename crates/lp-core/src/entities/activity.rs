use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ActivityType;

/// Append-only feed entry describing something a user did.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ActivityLog {
    pub id: String,
    pub user_id: String,
    pub actor_id: String,
    pub activity_type: ActivityType,
    pub entity_type: String,
    pub entity_id: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl ActivityLog {
    /// Entry where the owner is also the actor.
    #[must_use]
    pub fn new(
        id: String,
        user_id: String,
        activity_type: ActivityType,
        entity_type: &str,
        entity_id: String,
        description: String,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            actor_id: user_id.clone(),
            user_id,
            activity_type,
            entity_type: entity_type.to_string(),
            entity_id,
            description,
            created_at: now,
        }
    }
}
