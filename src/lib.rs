//! Document Search Engine Library
//!
//! This library crate implements a small full-text search engine: it ingests
//! text documents, maintains an inverted index over their normalized
//! vocabulary, answers ranked multi-term queries with representative excerpt
//! lines, and offers prefix-based word completion. The surrounding service
//! layer (HTTP routing, pagination, rendering) is expected to live outside
//! this crate and drive it through [`SearchEngine`].
//!
//! ## Architecture Modules
//! The crate is composed of five loosely coupled subsystems:
//!
//! - **`engine`**: The public facade. Owns the injected storage handle and
//!   exposes document ingestion, content retrieval, noise-word registration,
//!   ranked search, and prefix completion.
//! - **`text`**: Text processing utilities: token normalization with a
//!   pluggable stemming hook, and noise-word splitting.
//! - **`index`**: The ingestion pipeline. Converts raw document content into
//!   per-line normalized token sequences and extracts vocabulary.
//! - **`query`**: The retrieval logic. Posting-list driven scoring, excerpt
//!   extraction, result ordering, and vocabulary prefix completion.
//! - **`storage`**: The pluggable state layer. Defines the `Storage`
//!   contract consumed by the engine and ships an in-memory implementation.

pub mod config;
pub mod engine;
pub mod error;
pub mod index;
pub mod query;
pub mod storage;
pub mod text;

pub use config::SearchConfig;
pub use engine::SearchEngine;
pub use error::{Result, SearchError};
pub use query::types::SearchResult;
pub use storage::memory::MemoryStorage;
pub use storage::{Document, Posting, Storage, StorageError};
pub use text::normalize::{Normalizer, StemFn, default_stem};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
