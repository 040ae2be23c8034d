//! Status enums, channels, model tiers, and task stages for LaunchPad.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! Status enums with state machines provide `allowed_next_states()` to enforce
//! valid transitions at the application layer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ProspectStatus
// ---------------------------------------------------------------------------

/// Position of a prospect in the outbound pipeline.
///
/// ```text
/// new → contacted → responded → converted
/// new | contacted | responded → not_interested
/// not_interested → contacted (re-engaged)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProspectStatus {
    New,
    Contacted,
    Responded,
    Converted,
    NotInterested,
}

impl ProspectStatus {
    pub const ALL: [Self; 5] = [
        Self::New,
        Self::Contacted,
        Self::Responded,
        Self::Converted,
        Self::NotInterested,
    ];

    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::New => &[Self::Contacted, Self::NotInterested],
            Self::Contacted => &[Self::Responded, Self::NotInterested],
            Self::Responded => &[Self::Converted, Self::NotInterested],
            Self::NotInterested => &[Self::Contacted],
            Self::Converted => &[],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Contacted => "contacted",
            Self::Responded => "responded",
            Self::Converted => "converted",
            Self::NotInterested => "not_interested",
        }
    }
}

impl fmt::Display for ProspectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// OutreachStatus
// ---------------------------------------------------------------------------

/// Delivery status of a single outreach message.
///
/// ```text
/// draft → scheduled → sent → delivered → opened → replied
/// draft → sent → bounced
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum OutreachStatus {
    Draft,
    Scheduled,
    Sent,
    Delivered,
    Opened,
    Replied,
    Bounced,
}

impl OutreachStatus {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Draft => &[Self::Scheduled, Self::Sent],
            Self::Scheduled => &[Self::Sent, Self::Draft],
            Self::Sent => &[Self::Delivered, Self::Opened, Self::Replied, Self::Bounced],
            Self::Delivered => &[Self::Opened, Self::Replied, Self::Bounced],
            Self::Opened => &[Self::Replied],
            Self::Replied | Self::Bounced => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// The message left the outbox (bounces included).
    #[must_use]
    pub const fn was_sent(self) -> bool {
        matches!(
            self,
            Self::Sent | Self::Delivered | Self::Opened | Self::Replied | Self::Bounced
        )
    }

    /// The recipient opened the message (a reply implies an open).
    #[must_use]
    pub const fn was_opened(self) -> bool {
        matches!(self, Self::Opened | Self::Replied)
    }

    #[must_use]
    pub const fn was_replied(self) -> bool {
        matches!(self, Self::Replied)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Scheduled => "scheduled",
            Self::Sent => "sent",
            Self::Delivered => "delivered",
            Self::Opened => "opened",
            Self::Replied => "replied",
            Self::Bounced => "bounced",
        }
    }
}

impl fmt::Display for OutreachStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// OutreachChannel
// ---------------------------------------------------------------------------

/// Channel an outreach message or template targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum OutreachChannel {
    Email,
    Linkedin,
    Reddit,
    Facebook,
}

impl OutreachChannel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Linkedin => "linkedin",
            Self::Reddit => "reddit",
            Self::Facebook => "facebook",
        }
    }
}

impl fmt::Display for OutreachChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CampaignStatus
// ---------------------------------------------------------------------------

/// Wizard lifecycle of a campaign, derived from `is_active`.
///
/// ```text
/// draft → active
/// ```
///
/// An active campaign is finalized: it keeps its brief and is superseded by a
/// new campaign rather than edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CampaignStatus {
    Draft,
    Active,
}

impl CampaignStatus {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Draft => &[Self::Active],
            Self::Active => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Active => "active",
        }
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// UserRole
// ---------------------------------------------------------------------------

/// Role of an authenticated user within an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Owner,
    /// Virtual assistant invited by an owner.
    Va,
}

impl UserRole {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Va => "va",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ActivityType
// ---------------------------------------------------------------------------

/// Kind of event recorded in the activity log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    ProspectAdded,
    ProspectUpdated,
    OutreachSent,
    ResponseReceived,
    CampaignCreated,
    TemplateCreated,
}

impl ActivityType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ProspectAdded => "prospect_added",
            Self::ProspectUpdated => "prospect_updated",
            Self::OutreachSent => "outreach_sent",
            Self::ResponseReceived => "response_received",
            Self::CampaignCreated => "campaign_created",
            Self::TemplateCreated => "template_created",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ModelTier
// ---------------------------------------------------------------------------

/// Capability/cost class of a hosted language model.
///
/// The legacy family names (`haiku`, `sonnet`, `opus`) are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ModelTier {
    /// Fast and cheap: scoring, drafting, quick assists.
    #[serde(alias = "haiku")]
    Fast,
    /// Balanced intelligence and speed: launch strategy.
    #[serde(alias = "sonnet")]
    Balanced,
    /// Deep reasoning for critical planning.
    #[serde(alias = "opus")]
    Deep,
}

impl ModelTier {
    pub const ALL: [Self; 3] = [Self::Fast, Self::Balanced, Self::Deep];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fast => "fast",
            Self::Balanced => "balanced",
            Self::Deep => "deep",
        }
    }
}

impl fmt::Display for ModelTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AiTask
// ---------------------------------------------------------------------------

/// A user-facing feature backed by a model call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AiTask {
    LaunchBrief,
    ProspectScoring,
    ProspectSimilarity,
    EmailDrafting,
    SocialDrafting,
}

impl AiTask {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LaunchBrief => "launch_brief",
            Self::ProspectScoring => "prospect_scoring",
            Self::ProspectSimilarity => "prospect_similarity",
            Self::EmailDrafting => "email_drafting",
            Self::SocialDrafting => "social_drafting",
        }
    }
}

impl fmt::Display for AiTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TaskStage
// ---------------------------------------------------------------------------

/// Stage of a single orchestrator call.
///
/// ```text
/// pending → prompting → awaiting_model → parsing → succeeded
/// any non-terminal stage → failed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TaskStage {
    Pending,
    Prompting,
    AwaitingModel,
    Parsing,
    Succeeded,
    Failed,
}

impl TaskStage {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::Prompting, Self::Failed],
            Self::Prompting => &[Self::AwaitingModel, Self::Failed],
            Self::AwaitingModel => &[Self::Parsing, Self::Failed],
            Self::Parsing => &[Self::Succeeded, Self::Failed],
            Self::Succeeded | Self::Failed => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Prompting => "prompting",
            Self::AwaitingModel => "awaiting_model",
            Self::Parsing => "parsing",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for TaskStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prospect_pipeline_moves_forward_only() {
        assert!(ProspectStatus::New.can_transition_to(ProspectStatus::Contacted));
        assert!(!ProspectStatus::New.can_transition_to(ProspectStatus::Converted));
        assert!(ProspectStatus::NotInterested.can_transition_to(ProspectStatus::Contacted));
        assert!(ProspectStatus::Converted.allowed_next_states().is_empty());
    }

    #[test]
    fn outreach_status_flags() {
        assert!(!OutreachStatus::Draft.was_sent());
        assert!(!OutreachStatus::Scheduled.was_sent());
        assert!(OutreachStatus::Bounced.was_sent());
        assert!(OutreachStatus::Replied.was_opened());
        assert!(!OutreachStatus::Delivered.was_opened());
        assert!(OutreachStatus::Replied.was_replied());
    }

    #[test]
    fn model_tier_accepts_legacy_names() {
        let tier: ModelTier = serde_json::from_str("\"haiku\"").unwrap();
        assert_eq!(tier, ModelTier::Fast);
        let tier: ModelTier = serde_json::from_str("\"opus\"").unwrap();
        assert_eq!(tier, ModelTier::Deep);
        assert_eq!(serde_json::to_string(&ModelTier::Balanced).unwrap(), "\"balanced\"");
    }

    #[test]
    fn task_stage_terminal_states_have_no_successors() {
        for stage in [TaskStage::Succeeded, TaskStage::Failed] {
            assert!(stage.is_terminal());
            assert!(stage.allowed_next_states().is_empty());
        }
        assert!(TaskStage::AwaitingModel.can_transition_to(TaskStage::Failed));
        assert!(!TaskStage::Pending.can_transition_to(TaskStage::Parsing));
    }

    #[test]
    fn display_matches_serde() {
        let json = serde_json::to_string(&ProspectStatus::NotInterested).unwrap();
        assert_eq!(json, format!("\"{}\"", ProspectStatus::NotInterested));
        let json = serde_json::to_string(&TaskStage::AwaitingModel).unwrap();
        assert_eq!(json, format!("\"{}\"", TaskStage::AwaitingModel));
    }
}
