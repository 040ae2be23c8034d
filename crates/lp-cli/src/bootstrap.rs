use lp_config::LaunchPadConfig;

/// Read `.env`, then layer config files and environment on top of defaults.
pub fn load_config() -> anyhow::Result<LaunchPadConfig> {
    LaunchPadConfig::load_with_dotenv().map_err(anyhow::Error::from)
}
