//! Error types surfaced by the search engine.

use thiserror::Error;

use crate::storage::StorageError;

/// Main error type for engine operations.
///
/// The boundary layer is expected to map these onto its own wire format:
/// `NotFound` is a normal, expected outcome for a lookup of an absent
/// document, while `Storage` indicates the pluggable store failed and the
/// operation may be retried by the caller (ingestion and noise-word
/// registration are idempotent).
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("doc {0} not found")]
    NotFound(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("storage failure: {0}")]
    Storage(#[from] StorageError),
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, SearchError>;

impl SearchError {
    /// True for the absent-document case, which maps to a 404-style
    /// response rather than a server failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SearchError::NotFound(_))
    }
}
