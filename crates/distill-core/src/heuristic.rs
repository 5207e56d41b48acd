//! Mock Compression Heuristic
//!
//! Deterministic stand-in for the compression service. Words are scored on
//! a few surface features and the highest scoring ones survive, in their
//! original order.

use async_trait::async_trait;

use crate::aggressiveness::Aggressiveness;
use crate::compressor::{CompressionOutcome, Compressor};
use crate::error::Result;
use crate::tokens::estimate_tokens;

/// Words to keep out of `word_count` at this aggressiveness.
///
/// `max(1, floor(words * (1 - aggressiveness * 0.7)))`, evaluated in
/// integer percent so it never drifts.
pub fn keep_count(word_count: usize, aggressiveness: Aggressiveness) -> usize {
    let retained_percent = 100 - 7 * usize::from(aggressiveness.tenths());
    (word_count * retained_percent / 100).max(1)
}

/// Surface score of the word at `index` out of `total`
pub fn score_word(word: &str, index: usize, total: usize) -> u8 {
    let mut score = 0;
    if word.chars().count() > 4 {
        score += 2;
    }
    if word.chars().any(char::is_uppercase) {
        score += 1;
    }
    if word.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if index == 0 || index + 1 == total {
        score += 1;
    }
    score
}

/// Shorten `text` according to `aggressiveness`.
///
/// Output words are a subsequence of the input words joined by single
/// spaces. Ties in score are broken by position, earlier words first.
pub fn compress(text: &str, aggressiveness: Aggressiveness) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return String::new();
    }

    let total = words.len();
    let keep = keep_count(total, aggressiveness);

    let mut ranked: Vec<(usize, u8)> = words
        .iter()
        .enumerate()
        .map(|(i, w)| (i, score_word(w, i, total)))
        .collect();
    // stable: equal scores stay in input order
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let mut kept = vec![false; total];
    for &(index, _) in ranked.iter().take(keep) {
        kept[index] = true;
    }

    let output = words
        .iter()
        .zip(&kept)
        .filter_map(|(word, &keep)| keep.then_some(*word))
        .collect::<Vec<_>>()
        .join(" ");

    if output.is_empty() {
        text.to_string()
    } else {
        output
    }
}

/// Run the heuristic and attach estimated token counts
pub fn outcome(text: &str, aggressiveness: Aggressiveness) -> CompressionOutcome {
    let compressed = compress(text, aggressiveness);
    CompressionOutcome {
        input_tokens: estimate_tokens(text),
        output_tokens: estimate_tokens(&compressed),
        text: compressed,
    }
}

/// Local compressor backed by the word-scoring heuristic
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicCompressor;

impl HeuristicCompressor {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Compressor for HeuristicCompressor {
    async fn compress(
        &self,
        text: &str,
        aggressiveness: Aggressiveness,
    ) -> Result<CompressionOutcome> {
        Ok(outcome(text, aggressiveness))
    }

    fn name(&self) -> &str {
        "HeuristicCompressor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::word_count;

    const SAMPLE: &str =
        "Could you list for me the planets in the solar system, in order from the Sun in 2024";

    #[test]
    fn test_blank_input() {
        assert_eq!(compress("", Aggressiveness::MAX), "");
        assert_eq!(compress("  \n ", Aggressiveness::MIN), "");
    }

    #[test]
    fn test_never_grows() {
        for step in Aggressiveness::steps() {
            let out = compress(SAMPLE, step);
            assert!(word_count(&out) <= word_count(SAMPLE), "grew at {step}");
        }
    }

    #[test]
    fn test_deterministic() {
        for step in Aggressiveness::steps() {
            assert_eq!(compress(SAMPLE, step), compress(SAMPLE, step));
        }
    }

    #[test]
    fn test_keep_count_non_increasing() {
        for words in [1, 2, 7, 16, 100, 1001] {
            let counts: Vec<usize> = Aggressiveness::steps().map(|a| keep_count(words, a)).collect();
            assert!(counts.windows(2).all(|w| w[1] <= w[0]), "{words}: {counts:?}");
            assert!(counts.iter().all(|&c| c >= 1));
        }
        assert_eq!(keep_count(100, Aggressiveness::MIN), 93);
        assert_eq!(keep_count(100, Aggressiveness::MAX), 37);
    }

    #[test]
    fn test_output_is_ordered_subsequence() {
        let input: Vec<&str> = SAMPLE.split_whitespace().collect();
        let out = compress(SAMPLE, Aggressiveness::from_value(0.6));
        let mut cursor = input.iter();
        for word in out.split_whitespace() {
            assert!(cursor.any(|w| *w == word), "{word} out of order");
        }
    }

    #[test]
    fn test_scoring() {
        assert_eq!(score_word("planets", 3, 10), 2);
        assert_eq!(score_word("Sun", 3, 10), 1);
        assert_eq!(score_word("2024", 3, 10), 1);
        assert_eq!(score_word("the", 0, 10), 1);
        assert_eq!(score_word("Mars2", 9, 10), 5);
    }

    #[test]
    fn test_ties_keep_earliest_words() {
        // all score 0 except endpoints; keep 3 of 4 at 0.1 -> endpoints + first middle word
        assert_eq!(compress("a b c d", Aggressiveness::MIN), "a b d");
    }

    #[test]
    fn test_high_aggressiveness_keeps_salient_words() {
        let out = compress("the cat saw Jupiter and 12 moons", Aggressiveness::MAX);
        // 7 words at 37% -> 2 kept; "Jupiter" and "moons" both score 3
        assert_eq!(out, "Jupiter moons");
    }

    #[tokio::test]
    async fn test_compressor_reports_estimates() {
        let compressor = HeuristicCompressor::new();
        let outcome = compressor
            .compress("hello world from distill", Aggressiveness::MAX)
            .await
            .unwrap();
        assert_eq!(outcome.input_tokens, 5);
        assert_eq!(outcome.output_tokens, estimate_tokens(&outcome.text));
        assert_eq!(compressor.name(), "HeuristicCompressor");
    }
}
