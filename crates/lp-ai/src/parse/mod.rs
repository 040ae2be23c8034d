//! Recover typed values from free-text model replies.
//!
//! Every parser runs the same pipeline: extract the outermost `{ ... }` span,
//! decode it as JSON, validate it against the registered schema, then
//! deserialize into the target type. Parsers never call the provider and
//! never retry.

mod extract;

pub use extract::extract_json_object;

use std::sync::LazyLock;

use lp_core::generated::{EmailDraft, LaunchBrief, ScoreResponse, ScoreResult, SimilarityAnalysis};
use lp_schema::{SchemaError, SchemaRegistry, names};
use serde::de::DeserializeOwned;

use crate::error::ParseError;

static SCHEMAS: LazyLock<SchemaRegistry> = LazyLock::new(SchemaRegistry::new);

fn decode<T: DeserializeOwned>(text: &str, schema: &'static str) -> Result<T, ParseError> {
    let span = extract_json_object(text)?;
    let value: serde_json::Value = serde_json::from_str(span)?;

    SCHEMAS.validate(schema, &value).map_err(|err| match err {
        SchemaError::ValidationFailed { errors } => ParseError::Shape { schema, errors },
        other => ParseError::Shape {
            schema,
            errors: vec![other.to_string()],
        },
    })?;

    serde_json::from_value(value).map_err(|err| ParseError::Shape {
        schema,
        errors: vec![err.to_string()],
    })
}

/// Parse a launch brief and order its channels by rank.
///
/// # Errors
///
/// Any [`ParseError`]; [`ParseError::InvalidRanks`] when channel ranks are
/// not `1..=N` with `N <= 5`.
pub fn launch_brief(text: &str) -> Result<LaunchBrief, ParseError> {
    let mut brief: LaunchBrief = decode(text, names::LAUNCH_BRIEF)?;
    brief.check_ranks()?;
    brief.sort_channels();
    for note in brief.advisories() {
        tracing::warn!(%note, "launch brief outside requested bounds");
    }
    Ok(brief)
}

/// Parse a prospect score, clamping it into `0..=100`.
///
/// # Errors
///
/// Any [`ParseError`]; a missing or non-numeric `score` is a
/// [`ParseError::Shape`].
pub fn score(text: &str) -> Result<ScoreResult, ParseError> {
    let raw: ScoreResponse = decode(text, names::SCORE_RESPONSE)?;
    Ok(raw.into())
}

/// # Errors
///
/// Any [`ParseError`].
pub fn similarity(text: &str) -> Result<SimilarityAnalysis, ParseError> {
    decode(text, names::SIMILARITY_ANALYSIS)
}

/// Parse an email draft. Bodies over the word limit are kept with a warning.
///
/// # Errors
///
/// Any [`ParseError`].
pub fn email_draft(text: &str) -> Result<EmailDraft, ParseError> {
    let draft: EmailDraft = decode(text, names::EMAIL_DRAFT)?;
    if draft.exceeds_word_limit() {
        tracing::warn!(words = draft.word_count(), "email draft over word limit");
    }
    Ok(draft)
}
