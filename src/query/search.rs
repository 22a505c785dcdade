use std::collections::HashMap;

use super::types::SearchResult;
use crate::storage::{Storage, StorageError};

/// Terms below this length are skipped: neither scored nor excerpted.
const MIN_TERM_LEN: usize = 2;

/// Per-document accumulator: total occurrence count and, for every query
/// term, the earliest line it occurs on.
struct DocMatch {
    score: usize,
    first_lines: Vec<Option<usize>>,
}

/// Executes a ranked multi-term search.
///
/// Terms are matched verbatim against the normalized index: callers are
/// expected to supply already-normalized, non-noise terms, so no further
/// normalization is applied here. Scores sum the exact token matches of all
/// terms across a document's lines, counted from the posting lists rather
/// than by re-scanning content. Only documents with a positive score are
/// returned, ordered by score descending and name ascending.
pub async fn find(
    storage: &dyn Storage,
    terms: &[String],
) -> Result<Vec<SearchResult>, StorageError> {
    let mut matches: HashMap<String, DocMatch> = HashMap::new();

    for (slot, term) in terms.iter().enumerate() {
        if term.chars().count() < MIN_TERM_LEN {
            continue;
        }
        for posting in storage.postings(term).await? {
            let entry = matches.entry(posting.doc_id).or_insert_with(|| DocMatch {
                score: 0,
                first_lines: vec![None; terms.len()],
            });
            entry.score += 1;
            let first = &mut entry.first_lines[slot];
            if first.is_none_or(|line| posting.line < line) {
                *first = Some(posting.line);
            }
        }
    }

    let mut results = Vec::with_capacity(matches.len());
    for (doc_id, found) in matches {
        let Some(doc) = storage.document(&doc_id).await? else {
            tracing::warn!("postings reference missing document {}, skipping", doc_id);
            continue;
        };
        let lines = excerpt_lines(&doc.raw_lines, &found.first_lines);
        results.push(SearchResult {
            name: doc_id,
            score: found.score,
            lines,
        });
    }

    results.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.name.cmp(&b.name)));
    Ok(results)
}

/// Renders the excerpt for one document: per term, in term order, the raw
/// text of the first line containing it, suffixed with the 1-based line
/// number. Only an immediately repeated line is suppressed; the same line
/// may reappear later in the excerpt.
fn excerpt_lines(raw_lines: &[String], first_lines: &[Option<usize>]) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    for line in first_lines.iter().flatten() {
        let Some(raw) = raw_lines.get(*line) else {
            continue;
        };
        let rendered = format!("{}: {}", raw, line + 1);
        if lines.last() != Some(&rendered) {
            lines.push(rendered);
        }
    }
    lines
}
