//! Word-frequency ranking over headlines.

use crate::error::{AnalysisError, Result};
use crate::lexicon::Lexicon;
use crate::models::{Headline, WordCount};
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Default number of words returned by [`top_words`].
pub const DEFAULT_TOP_K: usize = 5;

/// Tokens must be longer than this many characters to be counted.
const MIN_TOKEN_CHARS: usize = 3;

/// Rank the `k` most frequent qualifying words.
///
/// Tokens are whitespace-separated, kept only if longer than three
/// characters, lowercased, and dropped if they are stopwords. Ties keep
/// first-seen order. Punctuation is not stripped.
///
/// # Errors
///
/// [`AnalysisError::EmptyResult`] if no token qualifies across all headlines.
#[instrument(level = "debug", skip_all, fields(headlines = headlines.len(), k))]
pub fn top_words(headlines: &[Headline], stopwords: &Lexicon, k: usize) -> Result<Vec<WordCount>> {
    // word -> (count, first-seen index)
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    let mut seen = 0usize;

    for token in headlines.iter().flat_map(|h| h.as_str().split_whitespace()) {
        if token.chars().count() <= MIN_TOKEN_CHARS {
            continue;
        }
        let word = token.to_lowercase();
        if stopwords.contains(&word) {
            continue;
        }
        counts
            .entry(word)
            .and_modify(|(count, _)| *count += 1)
            .or_insert_with(|| {
                seen += 1;
                (1, seen)
            });
    }

    if counts.is_empty() {
        return Err(AnalysisError::EmptyResult {
            headlines: headlines.len(),
        });
    }

    let mut ranked: Vec<(String, usize, usize)> = counts
        .into_iter()
        .map(|(word, (count, first))| (word, count, first))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    debug!(distinct = ranked.len(), "Counted words");

    Ok(ranked
        .into_iter()
        .take(k)
        .map(|(word, count, _)| WordCount { word, count })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicons;

    fn headlines(texts: &[&str]) -> Vec<Headline> {
        texts.iter().filter_map(|t| Headline::parse(t)).collect()
    }

    fn stopwords() -> Lexicon {
        Lexicons::default().stopwords
    }

    #[test]
    fn test_growth_ranks_first() {
        let hs = headlines(&["Economy shows strong growth", "Growth continues amid reforms"]);
        let got = top_words(&hs, &stopwords(), 5).unwrap();
        let words: Vec<(&str, usize)> = got.iter().map(|w| (w.word.as_str(), w.count)).collect();
        assert_eq!(
            words,
            vec![
                ("growth", 2),
                ("economy", 1),
                ("shows", 1),
                ("strong", 1),
                ("continues", 1),
            ]
        );
    }

    #[test]
    fn test_results_sorted_and_filtered() {
        let hs = headlines(&[
            "Flood waters rise in Sindh after heavy rain",
            "Sindh flood relief says minister with hope",
            "Relief camps open in Sindh from Monday",
        ]);
        let sw = stopwords();
        let got = top_words(&hs, &sw, 10).unwrap();
        assert!(got.windows(2).all(|w| w[0].count >= w[1].count));
        for wc in &got {
            assert!(wc.word.chars().count() > 3);
            assert!(!sw.contains(&wc.word));
        }
        assert_eq!(got[0].word, "sindh");
        assert_eq!(got[0].count, 3);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let hs = headlines(&["zeta alpha mango zeta alpha mango"]);
        let got = top_words(&hs, &Lexicon::new(Vec::<String>::new()), 2).unwrap();
        let words: Vec<&str> = got.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(words, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_k_larger_than_distinct_words() {
        let hs = headlines(&["Karachi Karachi Karachi again"]);
        let got = top_words(&hs, &stopwords(), 5).unwrap();
        assert_eq!(got.len(), 2);
    }

    #[test]
    fn test_punctuation_stays_attached() {
        let hs = headlines(&["Karachi, Lahore and Karachi today"]);
        let got = top_words(&hs, &stopwords(), 5).unwrap();
        assert!(got.iter().any(|w| w.word == "karachi," && w.count == 1));
        assert!(got.iter().any(|w| w.word == "karachi" && w.count == 1));
    }

    #[test]
    fn test_empty_input_is_empty_result() {
        let err = top_words(&[], &stopwords(), 5).unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyResult { headlines: 0 }));
    }

    #[test]
    fn test_only_short_or_stopwords_is_empty_result() {
        let hs = headlines(&["this that with will the a of to"]);
        let err = top_words(&hs, &stopwords(), 5).unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyResult { headlines: 1 }));
    }
}
