//! Engine configuration.

use crate::text::normalize::{StemFn, default_stem};

/// Maximum number of entries submitted to storage in a single union call.
pub const DEFAULT_BATCH_SIZE: usize = 1000;

/// Tuning knobs for [`crate::SearchEngine`].
///
/// Plain value type: the embedding application owns file or environment
/// parsing and hands the finished settings to the engine constructor.
#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    /// Upper bound on the size of a single vocabulary or noise-word union
    /// submitted to storage. Oversized sets are split into batches.
    pub batch_size: usize,
    /// Stemming hook applied during token normalization.
    pub stem: StemFn,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            stem: default_stem,
        }
    }
}
