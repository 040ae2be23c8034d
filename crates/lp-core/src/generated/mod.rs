//! Values produced by model calls.
//!
//! Every value here is created fresh per request and never mutated in place.
//! A value has no identity of its own until the caller copies it onto a
//! campaign, prospect, or outreach record. All structs derive `JsonSchema`;
//! the schemas double as the validation contract for raw model output.

mod brief;
mod draft;
mod score;
mod similarity;

pub use brief::{
    BriefRequest, Channel, DayPlan, LaunchBrief, MAX_CHANNELS, MAX_INSIGHTS, MIN_INSIGHTS,
    PLAN_DAYS, RankViolation,
};
pub use draft::{EmailDraft, MAX_EMAIL_WORDS};
pub use score::{
    FALLBACK_REASONING, FallbackScore, MISSING_REASONING, SCORE_MAX, ScoreResponse, ScoreResult,
    clamp_score,
};
pub use similarity::{RecommendedSource, SimilarityAnalysis};
