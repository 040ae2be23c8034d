//! # lp-config
//!
//! Layered configuration loading for LaunchPad using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`LAUNCHPAD_*` prefix, `__` as separator)
//! 2. Vendor key variables (`ANTHROPIC_API_KEY`, `RESEND_API_KEY`)
//! 3. Project-level `.launchpad/config.toml`
//! 4. User-level `~/.config/launchpad/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `LAUNCHPAD_ANTHROPIC__API_KEY` -> `anthropic.api_key`,
//! `LAUNCHPAD_GENERAL__OWNER_ID` -> `general.owner_id`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use lp_config::LaunchPadConfig;
//!
//! let config = LaunchPadConfig::load_with_dotenv().expect("config");
//! if config.anthropic.is_configured() {
//!     println!("Anthropic endpoint: {}", config.anthropic.base_url);
//! }
//! ```

mod anthropic;
mod error;
mod general;
mod resend;

pub use anthropic::AnthropicConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use resend::ResendConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Prefix for LaunchPad's own environment variables.
pub const ENV_PREFIX: &str = "LAUNCHPAD_";

/// Project-local config file, relative to the working directory.
pub const PROJECT_CONFIG_PATH: &str = ".launchpad/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LaunchPadConfig {
    #[serde(default)]
    pub anthropic: AnthropicConfig,
    #[serde(default)]
    pub resend: ResendConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl LaunchPadConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source cannot be parsed or a
    /// value has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(PROJECT_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Vendor-named key variables
        figment = figment.merge(Self::vendor_keys());

        // Layer 4: Prefixed environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// `ANTHROPIC_API_KEY` and `RESEND_API_KEY`, mapped onto their sections.
    #[must_use]
    pub fn vendor_keys() -> Env {
        Env::raw().filter_map(|key| {
            match key.as_str().to_ascii_uppercase().as_str() {
                "ANTHROPIC_API_KEY" => Some("anthropic.api_key".into()),
                "RESEND_API_KEY" => Some("resend.api_key".into()),
                _ => None,
            }
        })
    }

    /// Fail fast when a section a command needs is missing its credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] naming the section.
    pub fn require(&self, section: &str) -> Result<(), ConfigError> {
        let configured = match section {
            "anthropic" => self.anthropic.is_configured(),
            "resend" => self.resend.is_configured(),
            "general" => true,
            other => {
                return Err(ConfigError::InvalidValue {
                    field: "section".into(),
                    reason: format!("unknown section '{other}'"),
                });
            }
        };
        if configured {
            Ok(())
        } else {
            Err(ConfigError::NotConfigured {
                section: section.to_string(),
            })
        }
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("launchpad").join("config.toml"))
    }
}
