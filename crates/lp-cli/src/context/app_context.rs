use anyhow::Context;
use chrono::Utc;
use lp_ai::AnthropicClient;
use lp_config::LaunchPadConfig;
use lp_core::entities::ActivityLog;
use lp_core::enums::ActivityType;
use lp_core::ids::{PREFIX_ACTIVITY, gen_id};
use lp_mail::ResendMailer;
use lp_store::{MemoryStore, RecordStore};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: LaunchPadConfig,
    pub store: MemoryStore,
    /// Owner stamped on every record this invocation creates or reads.
    pub owner_id: String,
}

impl AppContext {
    /// Open the record store named by `--store`, or by `general.store_path`.
    pub fn init(config: LaunchPadConfig, store_override: Option<&str>) -> anyhow::Result<Self> {
        let store = match store_override {
            Some(path) => MemoryStore::open(path)
                .with_context(|| format!("failed to open record store at {path}"))?,
            None if config.general.is_persistent() => {
                let path = config.general.store_path.clone();
                MemoryStore::open(&path)
                    .with_context(|| format!("failed to open record store at {path}"))?
            }
            None => MemoryStore::in_memory(),
        };
        let owner_id = config.general.owner_id.clone();
        Ok(Self {
            config,
            store,
            owner_id,
        })
    }

    /// In-memory context for tests.
    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self {
            config: LaunchPadConfig::default(),
            store: MemoryStore::in_memory(),
            owner_id: "usr-test".to_string(),
        }
    }

    /// Completion provider built from the `[anthropic]` section.
    pub fn ai(&self) -> anyhow::Result<AnthropicClient> {
        self.config.require("anthropic")?;
        AnthropicClient::new(&self.config.anthropic).context("failed to build Anthropic client")
    }

    /// Mailer built from the `[resend]` section.
    pub fn mailer(&self) -> anyhow::Result<ResendMailer> {
        self.config.require("resend")?;
        ResendMailer::new(&self.config.resend).context("failed to build Resend mailer")
    }

    /// Limit precedence: command flag, then `--limit`, then `general.default_limit`.
    pub fn limit(&self, local: Option<u32>, global: Option<u32>) -> usize {
        let limit = local.or(global).unwrap_or(self.config.general.default_limit);
        usize::try_from(limit).unwrap_or(usize::MAX)
    }

    /// Append an activity log entry for the current owner.
    pub fn log_activity(
        &mut self,
        activity_type: ActivityType,
        entity_type: &str,
        entity_id: &str,
        description: impl Into<String>,
    ) -> anyhow::Result<()> {
        let entry = ActivityLog::new(
            gen_id(PREFIX_ACTIVITY)?,
            self.owner_id.clone(),
            activity_type,
            entity_type,
            entity_id.to_string(),
            description.into(),
            Utc::now(),
        );
        self.store.create(entry)?;
        Ok(())
    }

    /// Flush pending record changes to the snapshot file.
    pub fn save(&mut self) -> anyhow::Result<()> {
        self.store.save()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_precedence() {
        let ctx = AppContext::for_tests();
        assert_eq!(ctx.limit(Some(5), Some(10)), 5);
        assert_eq!(ctx.limit(None, Some(10)), 10);
        assert_eq!(ctx.limit(None, None), 20);
    }

    #[test]
    fn ai_requires_key() {
        let ctx = AppContext::for_tests();
        let err = ctx.ai().unwrap_err();
        assert!(err.to_string().contains("anthropic"));
    }

    #[test]
    fn store_override_persists_across_runs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.json");
        let path = path.to_str().unwrap();

        let mut ctx = AppContext::init(LaunchPadConfig::default(), Some(path)).unwrap();
        ctx.log_activity(ActivityType::CampaignCreated, "campaign", "cmp-1", "Created")
            .unwrap();
        ctx.save().unwrap();

        let reopened = AppContext::init(LaunchPadConfig::default(), Some(path)).unwrap();
        let entries: Vec<ActivityLog> = reopened.store.list(&reopened.owner_id);
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn activity_is_owner_scoped() {
        let mut ctx = AppContext::for_tests();
        ctx.log_activity(ActivityType::CampaignCreated, "campaign", "cmp-1", "Created")
            .unwrap();
        let entries: Vec<ActivityLog> = ctx.store.list("usr-test");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].entity_id, "cmp-1");
    }
}
