//! Storage Layer
//!
//! Defines the pluggable state contract consumed by the engine: documents,
//! the noise-word set, the vocabulary, and posting lists all live behind the
//! [`Storage`] trait. The indexing and query logic is written once against
//! this trait and works unchanged over any implementation, in-memory or
//! persistent.
//!
//! ## Submodules
//! - **`types`**: Stored data structures (`Document`, `Posting`).
//! - **`memory`**: In-memory reference implementation.

pub mod memory;
pub mod types;


use std::collections::HashSet;

use async_trait::async_trait;
use thiserror::Error;

pub use types::{Document, Posting};

/// Error type for storage operations.
///
/// Concrete implementations fold their transport or I/O failures into these
/// variants; the engine logs them with context and surfaces them without
/// retrying (retry policy belongs to the implementation or its caller).
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),

    #[error("storage operation failed: {0}")]
    Backend(String),
}

/// Durable or in-memory holder of documents, noise words, vocabulary, and
/// posting lists.
///
/// Contract notes:
/// - `union_noise_words` and `union_vocabulary` are idempotent set unions;
///   concurrent calls must not lose entries.
/// - `upsert_document` fully replaces the document keyed by its id, together
///   with its postings, atomically with respect to readers: `document` and
///   `postings` never observe a half-written state.
/// - Posting lists hold one entry per token occurrence, so an occurrence
///   count is the length of the matching sublist.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn noise_words(&self) -> Result<HashSet<String>, StorageError>;

    async fn union_noise_words(&self, words: &[String]) -> Result<(), StorageError>;

    async fn document(&self, id: &str) -> Result<Option<Document>, StorageError>;

    async fn upsert_document(&self, doc: Document) -> Result<(), StorageError>;

    async fn documents(&self) -> Result<Vec<Document>, StorageError>;

    async fn union_vocabulary(&self, words: &[String]) -> Result<(), StorageError>;

    async fn vocabulary(&self) -> Result<HashSet<String>, StorageError>;

    async fn postings(&self, word: &str) -> Result<Vec<Posting>, StorageError>;
}
