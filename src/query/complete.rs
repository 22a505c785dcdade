use crate::storage::{Storage, StorageError};

/// Returns every vocabulary entry that begins with `prefix`, sorted
/// ascending.
///
/// Completion only fires while the user is mid-word: an empty prefix, or
/// one whose last character is not alphabetic, yields no completions. An
/// entry equal to the prefix qualifies. The vocabulary is a set, so the
/// result carries no duplicates.
pub async fn complete(
    storage: &dyn Storage,
    prefix: &str,
) -> Result<Vec<String>, StorageError> {
    let mid_word = prefix
        .chars()
        .last()
        .is_some_and(|c| c.is_ascii_alphabetic());
    if !mid_word {
        return Ok(Vec::new());
    }

    let mut completions: Vec<String> = storage
        .vocabulary()
        .await?
        .into_iter()
        .filter(|word| word.starts_with(prefix))
        .collect();
    completions.sort();
    Ok(completions)
}
