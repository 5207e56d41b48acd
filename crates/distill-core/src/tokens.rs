//! Token Estimation
//!
//! Word-based approximation used when the compression service does not
//! report token counts. This is not a tokenizer: it assumes roughly 1.3
//! tokens per whitespace-separated word.

/// Tokens per word, in tenths
const TOKENS_PER_WORD_TENTHS: u64 = 13;

/// Number of whitespace-separated words in `text`
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().filter(|w| !w.is_empty()).count()
}

/// Approximate token count of `text`.
///
/// Blank text is 0 tokens. Otherwise `round(words * 1.3)`, rounding halves
/// up, and never less than 1.
pub fn estimate_tokens(text: &str) -> u32 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0;
    }

    let words = word_count(trimmed) as u64;
    if words == 0 {
        return 1;
    }

    let estimate = (words * TOKENS_PER_WORD_TENTHS + 5) / 10;
    u32::try_from(estimate).unwrap_or(u32::MAX).max(1)
}
