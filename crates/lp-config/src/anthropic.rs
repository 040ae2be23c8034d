//! Anthropic Messages API configuration.

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://api.anthropic.com".to_string()
}

fn default_api_version() -> String {
    "2023-06-01".to_string()
}

/// HTTP timeout for one completion, in seconds.
const fn default_timeout_secs() -> u64 {
    60
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnthropicConfig {
    /// API key sent as `x-api-key`. Also read from `ANTHROPIC_API_KEY`.
    #[serde(default)]
    pub api_key: String,

    /// Scheme and host of the API, without the `/v1/messages` path.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Value of the `anthropic-version` header.
    #[serde(default = "default_api_version")]
    pub api_version: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            api_version: default_api_version(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl AnthropicConfig {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// First characters of the key, for diagnostics that must not leak it.
    #[must_use]
    pub fn key_preview(&self) -> Option<String> {
        if !self.is_configured() {
            return None;
        }
        let prefix: String = self.api_key.chars().take(10).collect();
        Some(format!("{prefix}..."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = AnthropicConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.base_url, "https://api.anthropic.com");
        assert_eq!(config.api_version, "2023-06-01");
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.key_preview(), None);
    }

    #[test]
    fn key_preview_truncates() {
        let config = AnthropicConfig {
            api_key: "sk-ant-REDACTED".into(),
            ..Default::default()
        };
        assert!(config.is_configured());
        assert_eq!(config.key_preview().as_deref(), Some("sk-ant-api..."));
    }

    #[test]
    fn whitespace_key_is_not_configured() {
        let config = AnthropicConfig {
            api_key: "   ".into(),
            ..Default::default()
        };
        assert!(!config.is_configured());
    }
}
