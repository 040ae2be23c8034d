//! Errors raised by the schema registry.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    /// No schema is registered under this name.
    #[error("unknown schema: {0}")]
    NotFound(String),

    /// The value does not conform; one message per violation.
    #[error("value does not match schema: {}", errors.join("; "))]
    ValidationFailed { errors: Vec<String> },

    /// A registered schema failed to compile into a validator.
    #[error("schema compilation failed: {0}")]
    Generation(String),
}
