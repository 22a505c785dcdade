//! Query Module
//!
//! The retrieval side of the engine: executes ranked multi-term searches
//! against the posting lists and answers prefix-completion requests from the
//! vocabulary. Both operations are pure reads over [`crate::storage::Storage`]
//! and run concurrently with each other and with unrelated ingestion.
//!
//! ## Submodules
//! - **`search`**: Scoring, excerpt extraction, and result ordering.
//! - **`complete`**: Vocabulary prefix completion.
//! - **`types`**: The search result shape returned to callers.

pub mod complete;
pub mod search;
pub mod types;
