//! Text normalization and tokenization
//!
//! Mirrors the preprocessing the model artifacts were fitted with: messages
//! are cleaned to lowercase letters before vectorization, and the tokenizer
//! keeps alphanumeric runs of two or more characters.

/// Normalize raw message text for classification.
///
/// Lowercases the input and deletes every character outside `a-z` and
/// whitespace. Digits, punctuation, emoji and accented letters are removed,
/// not substituted. Total over any string; idempotent.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_whitespace())
        .collect()
}

/// Split text into lowercase alphanumeric tokens of length >= 2.
///
/// Single-character tokens carry no weight in the fitted vocabulary and are
/// dropped, matching the tokenizer used at fit time.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.len() >= 2)
        .map(|t| t.to_string())
        .collect()
}
