//! Indexing Pipeline Tests
//!
//! Validates document construction: line alignment, noise filtering, empty
//! token handling, and vocabulary extraction.

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::index::{build_document, vocabulary_of};
    use crate::text::normalize::Normalizer;

    fn noise(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    // ============================================================
    // LINE STRUCTURE
    // ============================================================

    #[test]
    fn test_lines_align() {
        let doc = build_document(
            "d1",
            "The quick fox\n\nfox jumps over",
            &Normalizer::default(),
            &noise(&[]),
        );

        assert_eq!(doc.raw_lines.len(), 3);
        assert_eq!(doc.normalized_lines.len(), doc.raw_lines.len());
    }

    #[test]
    fn test_empty_lines_preserved() {
        let doc = build_document("d1", "a\n\nb", &Normalizer::default(), &noise(&[]));

        assert_eq!(doc.raw_lines[1], "");
        assert!(doc.normalized_lines[1].is_empty());
    }

    #[test]
    fn test_content_round_trip() {
        let content = "first line\n\nthird line\n";
        let doc = build_document("d1", content, &Normalizer::default(), &noise(&[]));

        assert_eq!(doc.content(), content);
    }

    #[test]
    fn test_empty_content_single_empty_line() {
        let doc = build_document("d1", "", &Normalizer::default(), &noise(&[]));

        assert_eq!(doc.raw_lines, vec![""]);
        assert_eq!(doc.normalized_lines, vec![Vec::<String>::new()]);
    }

    // ============================================================
    // TOKEN FILTERING
    // ============================================================

    #[test]
    fn test_tokens_normalized() {
        let doc = build_document(
            "d1",
            "The Quick, Fox's den!",
            &Normalizer::default(),
            &noise(&[]),
        );

        assert_eq!(doc.normalized_lines[0], vec!["the", "quick", "fox", "den"]);
    }

    #[test]
    fn test_noise_words_filtered() {
        let doc = build_document(
            "d1",
            "The quick fox",
            &Normalizer::default(),
            &noise(&["the"]),
        );

        assert_eq!(doc.normalized_lines[0], vec!["quick", "fox"]);
    }

    #[test]
    fn test_noise_matched_after_normalization() {
        // "The" lower-cases to "the" before the noise check
        let doc = build_document("d1", "THE fox", &Normalizer::default(), &noise(&["the"]));

        assert_eq!(doc.normalized_lines[0], vec!["fox"]);
    }

    #[test]
    fn test_empty_normalizations_dropped() {
        let doc = build_document(
            "d1",
            "fox !!! 123 ---",
            &Normalizer::default(),
            &noise(&[]),
        );

        assert_eq!(doc.normalized_lines[0], vec!["fox"]);
    }

    // ============================================================
    // VOCABULARY EXTRACTION
    // ============================================================

    #[test]
    fn test_vocabulary_distinct() {
        let doc = build_document(
            "d1",
            "fox fox fox\nfox jumps",
            &Normalizer::default(),
            &noise(&[]),
        );

        let mut vocab = vocabulary_of(&doc);
        vocab.sort();
        assert_eq!(vocab, vec!["fox", "jumps"]);
    }

    #[test]
    fn test_vocabulary_excludes_noise() {
        let doc = build_document(
            "d1",
            "the quick fox",
            &Normalizer::default(),
            &noise(&["the"]),
        );

        let mut vocab = vocabulary_of(&doc);
        vocab.sort();
        assert_eq!(vocab, vec!["fox", "quick"]);
    }
}
