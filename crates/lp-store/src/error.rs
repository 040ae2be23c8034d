//! Store error types for lp-store.

use lp_core::errors::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// No record with this id belongs to the requesting owner.
    #[error("{entity_type} {id} not found")]
    NotFound { entity_type: &'static str, id: String },

    #[error("{entity_type} {id} already exists")]
    Duplicate { entity_type: &'static str, id: String },

    /// Snapshot file could not be read or written.
    #[error("snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot file is not valid JSON for the record layout.
    #[error("snapshot is malformed: {0}")]
    Serde(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] CoreError),
}
