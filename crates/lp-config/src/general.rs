//! General application configuration.

use serde::{Deserialize, Serialize};

fn default_owner_id() -> String {
    "local".to_string()
}

fn default_store_path() -> String {
    ".launchpad/store.json".to_string()
}

/// Default result limit.
const fn default_limit() -> u32 {
    20
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Owner id stamped on every record this installation creates.
    #[serde(default = "default_owner_id")]
    pub owner_id: String,

    /// JSON snapshot file backing the record store. Empty keeps records in memory only.
    #[serde(default = "default_store_path")]
    pub store_path: String,

    /// Default result limit for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            owner_id: default_owner_id(),
            store_path: default_store_path(),
            default_limit: default_limit(),
        }
    }
}

impl GeneralConfig {
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        !self.store_path.trim().is_empty()
    }
}
