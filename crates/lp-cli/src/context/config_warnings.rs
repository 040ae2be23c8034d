use lp_config::LaunchPadConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &LaunchPadConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &LaunchPadConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.anthropic.is_configured() && has_single_underscore_key(&env_keys, "LAUNCHPAD_ANTHROPIC")
    {
        warnings.push(
            "Anthropic config appears default while LAUNCHPAD_ANTHROPIC* env vars exist. Use double underscores (example: LAUNCHPAD_ANTHROPIC__API_KEY)."
                .to_string(),
        );
    }

    if !config.resend.is_configured() && has_single_underscore_key(&env_keys, "LAUNCHPAD_RESEND") {
        warnings.push(
            "Resend config appears default while LAUNCHPAD_RESEND* env vars exist. Use double underscores (example: LAUNCHPAD_RESEND__API_KEY)."
                .to_string(),
        );
    }

    warnings
}

/// A key under `prefix` that is not using the `__` section separator.
fn has_single_underscore_key(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| {
        key.strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('_') && !rest.starts_with("__"))
    })
}
