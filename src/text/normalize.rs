use regex::Regex;

/// Stemming hook applied between lower-casing and character stripping.
pub type StemFn = fn(&str) -> String;

/// Default stemming hook: removes a trailing possessive `'s`.
pub fn default_stem(word: &str) -> String {
    word.strip_suffix("'s").unwrap_or(word).to_string()
}

/// Produces the canonical indexable form of a token: lower-case, stem, then
/// drop every character that is not a lowercase Latin letter.
///
/// The result may be empty (for example when the token was pure
/// punctuation); callers discard empty results instead of indexing them.
#[derive(Debug, Clone)]
pub struct Normalizer {
    non_alpha: Regex,
    stem: StemFn,
}

impl Normalizer {
    pub fn new(stem: StemFn) -> Self {
        Self {
            non_alpha: Regex::new(r"[^a-z]").unwrap(),
            stem,
        }
    }

    pub fn normalize(&self, token: &str) -> String {
        let lowered = token.to_lowercase();
        let stemmed = (self.stem)(&lowered);
        self.non_alpha.replace_all(&stemmed, "").into_owned()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(default_stem)
    }
}
