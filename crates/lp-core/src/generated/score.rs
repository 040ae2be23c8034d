use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const SCORE_MAX: u8 = 100;

/// Reasoning recorded for a prospect whose scoring call failed.
pub const FALLBACK_REASONING: &str = "Failed to score this prospect";

/// Reasoning substituted when the model returns a score without one.
pub const MISSING_REASONING: &str = "No reasoning provided";

/// Lead score in `0..=100` with the model's rationale.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ScoreResult {
    pub score: u8,
    pub reasoning: String,
}

impl ScoreResult {
    /// Build from an unchecked model value: clamp into range and round.
    #[must_use]
    pub fn from_raw(raw: f64, reasoning: Option<String>) -> Self {
        let reasoning = reasoning
            .filter(|text| !text.trim().is_empty())
            .unwrap_or_else(|| MISSING_REASONING.to_string());
        Self {
            score: clamp_score(raw),
            reasoning,
        }
    }
}

/// Scoring reply exactly as the model sends it, before clamping.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ScoreResponse {
    pub score: f64,
    #[serde(default)]
    pub reasoning: Option<String>,
}

impl From<ScoreResponse> for ScoreResult {
    fn from(raw: ScoreResponse) -> Self {
        Self::from_raw(raw.score, raw.reasoning)
    }
}

/// Clamp a raw model score into `0..=100`, rounding half away from zero.
/// `NaN` maps to 0.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn clamp_score(raw: f64) -> u8 {
    if raw.is_nan() {
        return 0;
    }
    raw.round().clamp(0.0, f64::from(SCORE_MAX)) as u8
}

/// Stand-in for a batch item whose model call or parse failed.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FallbackScore {
    /// Error that caused the fallback, kept for logs and re-run decisions.
    pub error: String,
}

impl FallbackScore {
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    /// The sentinel score shown to the user: zero with fixed reasoning.
    #[must_use]
    pub fn as_score(&self) -> ScoreResult {
        ScoreResult {
            score: 0,
            reasoning: FALLBACK_REASONING.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(-50.0, 0)]
    #[case(0.0, 0)]
    #[case(55.7, 56)]
    #[case(100.0, 100)]
    #[case(250.0, 100)]
    #[case(49.5, 50)]
    #[case(-0.4, 0)]
    #[case(f64::INFINITY, 100)]
    #[case(f64::NEG_INFINITY, 0)]
    #[case(f64::NAN, 0)]
    fn clamps_and_rounds(#[case] raw: f64, #[case] expected: u8) {
        assert_eq!(clamp_score(raw), expected);
    }

    #[test]
    fn missing_or_blank_reasoning_gets_placeholder() {
        assert_eq!(ScoreResult::from_raw(70.0, None).reasoning, MISSING_REASONING);
        assert_eq!(
            ScoreResult::from_raw(70.0, Some("  ".into())).reasoning,
            MISSING_REASONING
        );
        assert_eq!(
            ScoreResult::from_raw(70.0, Some("Complete profile".into())).reasoning,
            "Complete profile"
        );
    }

    #[test]
    fn response_converts_with_clamp() {
        let raw: ScoreResponse =
            serde_json::from_str(r#"{"score": 250, "reasoning": "Perfect fit"}"#).unwrap();
        let result = ScoreResult::from(raw);
        assert_eq!(result.score, 100);
        assert_eq!(result.reasoning, "Perfect fit");
    }

    #[test]
    fn fallback_is_zero_with_fixed_reasoning() {
        let fallback = FallbackScore::new("provider timed out");
        let score = fallback.as_score();
        assert_eq!(score.score, 0);
        assert_eq!(score.reasoning, FALLBACK_REASONING);
        assert_eq!(fallback.error, "provider timed out");
    }
}
