//! Lexicon sentiment scoring.
//!
//! The score is the number of positive entries found in the lowercase
//! headline minus the number of negative entries found. An entry counts
//! once no matter how often it appears. A score of zero covers both
//! headlines with no lexicon hits and headlines where hits cancel out.

use crate::lexicon::Lexicon;
use crate::models::{Headline, SentimentBuckets};
use std::cmp::Ordering;
use tracing::{debug, instrument};

/// Signed sentiment score for a single piece of text.
pub fn score(text: &str, positive: &Lexicon, negative: &Lexicon) -> i32 {
    let lower = text.to_lowercase();
    let pos = positive.count_matches(&lower) as i32;
    let neg = negative.count_matches(&lower) as i32;
    pos - neg
}

/// Count headlines per sentiment bucket. Magnitude is ignored.
#[instrument(level = "debug", skip_all, fields(headlines = headlines.len()))]
pub fn bucketize(headlines: &[Headline], positive: &Lexicon, negative: &Lexicon) -> SentimentBuckets {
    let mut buckets = SentimentBuckets::default();
    for h in headlines {
        match score(h.as_str(), positive, negative).cmp(&0) {
            Ordering::Greater => buckets.positive += 1,
            Ordering::Less => buckets.negative += 1,
            Ordering::Equal => buckets.neutral += 1,
        }
    }
    debug!(?buckets, "Bucketized sentiment");
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicons;

    fn default_score(text: &str) -> i32 {
        let lex = Lexicons::default();
        score(text, &lex.positive, &lex.negative)
    }

    #[test]
    fn test_repeated_word_counts_once() {
        assert_eq!(default_score("peace peace peace"), 1);
    }

    #[test]
    fn test_positive_and_negative_cancel() {
        assert_eq!(default_score("bombing and peace"), 0);
    }

    #[test]
    fn test_no_hits_is_neutral() {
        assert_eq!(default_score("random unrelated words"), 0);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(default_score("PEACE returns"), 1);
    }

    #[test]
    fn test_flood_and_rescue_is_zero() {
        assert_eq!(
            default_score("Massive flood hits Karachi, rescue operations underway"),
            0
        );
    }

    #[test]
    fn test_substring_overlap_counts_each_entry() {
        // "airstrike" contains "strike": both negative entries match.
        let neg = Lexicon::new(["strike", "airstrike"]);
        let pos = Lexicon::new(Vec::<String>::new());
        assert_eq!(score("Airstrike on depot", &pos, &neg), -2);
    }

    #[test]
    fn test_bucketize() {
        let lex = Lexicons::default();
        let hs: Vec<Headline> = [
            "Peace talks bring hope to region",
            "Deadly blast kills dozens in city",
            "Parliament meets on Tuesday morning",
            "Massive flood hits Karachi, rescue operations underway",
        ]
        .iter()
        .filter_map(|t| Headline::parse(t))
        .collect();
        let b = bucketize(&hs, &lex.positive, &lex.negative);
        assert_eq!(
            b,
            SentimentBuckets {
                positive: 1,
                neutral: 2,
                negative: 1
            }
        );
    }

    #[test]
    fn test_bucketize_empty() {
        let lex = Lexicons::default();
        assert_eq!(
            bucketize(&[], &lex.positive, &lex.negative),
            SentimentBuckets::default()
        );
    }
}
