//! Error types for family tables.

use thiserror::Error;

/// Error type for loading or validating a family table.
#[derive(Error, Debug)]
pub enum FamilyError {
    /// The JSON document could not be parsed.
    #[error("invalid family table: {0}")]
    Json(#[from] serde_json::Error),

    /// A family entry is unusable.
    #[error("family #{index} ({prefix:?} -> {name:?}): {reason}")]
    InvalidFamily {
        index: usize,
        prefix: String,
        name: String,
        reason: &'static str,
    },
}

/// Result type for family table operations.
pub type FamilyResult<T> = Result<T, FamilyError>;
