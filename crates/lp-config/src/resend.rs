//! Resend transactional email configuration.

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://api.resend.com".to_string()
}

fn default_from() -> String {
    "LaunchPad <onboarding@resend.dev>".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResendConfig {
    /// Bearer token. Also read from `RESEND_API_KEY`.
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// `From` header for outbound mail.
    #[serde(default = "default_from")]
    pub from: String,
}

impl Default for ResendConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            from: default_from(),
        }
    }
}

impl ResendConfig {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty() && !self.from.trim().is_empty()
    }
}
