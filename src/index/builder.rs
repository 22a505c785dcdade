use std::collections::HashSet;

use crate::storage::Document;
use crate::text::normalize::Normalizer;

/// Builds the stored representation of a document.
///
/// Content is split into lines on newline boundaries, empty lines included:
/// line numbering is positional. Each line is tokenized on whitespace and
/// every token is normalized; tokens that normalize to the empty string or
/// sit in the noise-word set are filtered into a fresh per-line sequence.
pub fn build_document(
    name: &str,
    content: &str,
    normalizer: &Normalizer,
    noise: &HashSet<String>,
) -> Document {
    let raw_lines: Vec<String> = content.split('\n').map(str::to_string).collect();

    let normalized_lines: Vec<Vec<String>> = raw_lines
        .iter()
        .map(|line| {
            line.split_whitespace()
                .map(|token| normalizer.normalize(token))
                .filter(|token| !token.is_empty() && !noise.contains(token))
                .collect()
        })
        .collect();

    Document {
        id: name.to_string(),
        raw_lines,
        normalized_lines,
    }
}

/// Distinct normalized tokens of a document, for the vocabulary union.
pub fn vocabulary_of(doc: &Document) -> Vec<String> {
    let distinct: HashSet<&String> = doc.normalized_lines.iter().flatten().collect();
    distinct.into_iter().cloned().collect()
}
