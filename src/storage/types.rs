//! Stored Data Types
//!
//! Structures held by the storage layer. They derive `Serialize` and
//! `Deserialize` so persistent implementations and the surrounding wire
//! layer can encode them directly.

use serde::{Deserialize, Serialize};

/// An indexed document as held by storage.
///
/// `raw_lines` is the original text split on newlines, one entry per source
/// line in source order. `normalized_lines` holds the non-noise normalized
/// tokens of each raw line and is always the same length as `raw_lines`, so
/// a posting's line index addresses both representations. Documents are
/// mutated only by full replacement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub raw_lines: Vec<String>,
    pub normalized_lines: Vec<Vec<String>>,
}

impl Document {
    /// Re-joins the raw lines into the original content string.
    pub fn content(&self) -> String {
        self.raw_lines.join("\n")
    }
}

/// A single occurrence of a vocabulary word: which document, which line.
///
/// Line indices are zero-based; they are rendered 1-based only when shown
/// to users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting {
    pub doc_id: String,
    pub line: usize,
}
