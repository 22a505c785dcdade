use std::collections::HashSet;

/// Splits noise-word text into individual set entries.
///
/// Tokens are separated by any whitespace (newlines included) and
/// lower-cased so later membership checks agree with the case handling of
/// [`super::normalize::Normalizer`]. No further normalization is applied:
/// noise words are taken as literal tokens.
pub fn noise_tokens(text: &str) -> HashSet<String> {
    text.split_whitespace().map(|w| w.to_lowercase()).collect()
}
