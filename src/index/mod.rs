//! Indexing Pipeline
//!
//! Converts raw document content into the stored [`crate::storage::Document`]
//! shape: the
//! original text split into lines, and for each line the sequence of
//! normalized, non-noise tokens. Line counts always agree between the two
//! representations, so posting line indices address both.

pub mod builder;

#[cfg(test)]
mod tests;

pub use builder::{build_document, vocabulary_of};
