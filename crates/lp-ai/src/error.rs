//! Error types for model calls, response parsing, and orchestration.

use lp_core::errors::CoreError;
use lp_core::generated::RankViolation;
use thiserror::Error;

/// The model replied, but the reply is not a usable value.
#[derive(Debug, Error)]
pub enum ParseError {
    /// No `{ ... }` span in the completion text.
    #[error("no JSON object found in model response")]
    NoJsonObject,

    /// A `{ ... }` span was found but is not valid JSON.
    #[error("model response is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Valid JSON with missing required fields or wrong primitive types.
    #[error("model response does not match {schema}: {}", errors.join("; "))]
    Shape {
        schema: &'static str,
        errors: Vec<String>,
    },

    /// Launch brief channels are not ranked `1..=N`.
    #[error("launch brief rejected: {0}")]
    InvalidRanks(#[from] RankViolation),
}

/// The model call itself failed.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// HTTP transport or body decoding error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Provider returned 429 Too Many Requests.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    /// Provider rejected the API key.
    #[error("provider rejected the API key")]
    Unauthorized,

    /// Successful response with no text content.
    #[error("provider returned an empty completion")]
    EmptyCompletion,

    /// Credentials or endpoint are missing from configuration.
    #[error("provider not configured: {0}")]
    NotConfigured(String),
}

/// Failure of one orchestrated AI task.
#[derive(Debug, Error)]
pub enum AiError {
    /// Caller input rejected before any prompt was built.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Domain rule broken inside the orchestrator itself.
    #[error(transparent)]
    Core(CoreError),
}

impl From<CoreError> for AiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(message) => Self::InvalidInput(message),
            other => Self::Core(other),
        }
    }
}
