//! Cross-cutting error types for LaunchPad.
//!
//! Domain-specific errors (`AiError`, `StoreError`, `MailError`) are defined in
//! their respective crates. The binary converges them through `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any LaunchPad crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Record lookup returned no result.
    #[error("Record not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// A state machine transition was attempted that is not allowed.
    #[error("Invalid state transition: {entity_type} {id} from {from} to {to}")]
    InvalidTransition {
        entity_type: String,
        id: String,
        from: String,
        to: String,
    },

    /// Caller input failed validation (missing required field, bad format).
    #[error("Validation error: {0}")]
    Validation(String),

    /// The record is locked against the requested edit.
    #[error("{entity_type} {id} is locked: {reason}")]
    Locked {
        entity_type: String,
        id: String,
        reason: String,
    },

    /// Random ID generation failed.
    #[error("ID generation failed: {0}")]
    IdGeneration(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    /// Shorthand for a [`CoreError::Validation`] with a formatted message.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
