//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed files and env vars.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use lp_config::LaunchPadConfig;

#[test]
fn loads_anthropic_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[anthropic]
api_key = "sk-ant-toml"
base_url = "http://localhost:8080"
api_version = "2024-01-01"
timeout_secs = 15
"#,
        )?;

        let config: LaunchPadConfig = Figment::from(Serialized::defaults(LaunchPadConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.anthropic.api_key, "sk-ant-toml");
        assert_eq!(config.anthropic.base_url, "http://localhost:8080");
        assert_eq!(config.anthropic.api_version, "2024-01-01");
        assert_eq!(config.anthropic.timeout_secs, 15);
        assert!(config.anthropic.is_configured());
        Ok(())
    });
}

#[test]
fn partial_section_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[resend]
api_key = "re_toml"

[general]
owner_id = "usr-dana"
"#,
        )?;

        let config: LaunchPadConfig = Figment::from(Serialized::defaults(LaunchPadConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.resend.api_key, "re_toml");
        assert_eq!(config.resend.base_url, "https://api.resend.com");
        assert_eq!(config.resend.from, "LaunchPad <onboarding@resend.dev>");
        assert_eq!(config.general.owner_id, "usr-dana");
        assert_eq!(config.general.store_path, ".launchpad/store.json");
        assert_eq!(config.anthropic.base_url, "https://api.anthropic.com");
        Ok(())
    });
}

#[test]
fn project_config_is_picked_up_by_figment() {
    Jail::expect_with(|jail| {
        jail.create_dir(".launchpad")?;
        jail.create_file(
            ".launchpad/config.toml",
            r#"
[general]
default_limit = 5
"#,
        )?;

        let config: LaunchPadConfig = LaunchPadConfig::figment().extract()?;
        assert_eq!(config.general.default_limit, 5);
        Ok(())
    });
}

#[test]
fn env_var_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[anthropic]
api_key = "from-toml"
"#,
        )?;
        jail.set_env("LAUNCHPAD_ANTHROPIC__API_KEY", "from-env");

        let config: LaunchPadConfig = Figment::from(Serialized::defaults(LaunchPadConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("LAUNCHPAD_").split("__"))
            .extract()?;

        assert_eq!(config.anthropic.api_key, "from-env");
        Ok(())
    });
}

#[test]
fn wrong_type_is_an_error() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[anthropic]
timeout_secs = "soon"
"#,
        )?;

        let result: Result<LaunchPadConfig, _> =
            Figment::from(Serialized::defaults(LaunchPadConfig::default()))
                .merge(Toml::file("config.toml"))
                .extract();
        assert!(result.is_err());
        Ok(())
    });
}
