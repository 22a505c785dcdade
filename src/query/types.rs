use std::fmt;

use serde::{Deserialize, Serialize};

/// One matching document of a search.
///
/// `score` is the total number of occurrences of the query terms in the
/// document and is always at least 1. `lines` holds the representative
/// excerpt lines in document order, each suffixed with its 1-based line
/// number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub name: String,
    pub score: usize,
    pub lines: Vec<String>,
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.score)?;
        for line in &self.lines {
            write!(f, "\n{}", line)?;
        }
        Ok(())
    }
}
