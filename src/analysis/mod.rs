//! Batch analyses over the session's headline collection.
//!
//! | Analysis | Module | Output |
//! |----------|--------|--------|
//! | Word frequency | [`frequency`] | Top-K [`WordCount`](crate::models::WordCount) |
//! | Crisis / place | [`crisis`] | Filtered headlines for the heatmap |
//! | Sentiment | [`sentiment`] | Per-headline score and bucket counts |
//!
//! The analyses are independent of each other and only read the headlines
//! and the lexicons.

pub mod crisis;
pub mod frequency;
pub mod sentiment;

use crate::lexicon::Lexicons;
use crate::models::{ClassifiedHeadline, Headline};

/// Derive every per-headline result in one pass.
pub fn classify_all(headlines: &[Headline], lexicons: &Lexicons) -> Vec<ClassifiedHeadline> {
    headlines
        .iter()
        .map(|h| {
            let lower = h.lowercase();
            ClassifiedHeadline {
                headline: h.clone(),
                is_crisis: lexicons.crisis.matches_any(&lower),
                place: lexicons.gazetteer.first_match(&lower).map(str::to_string),
                sentiment: sentiment::score(h.as_str(), &lexicons.positive, &lexicons.negative),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_all_end_to_end() {
        let lex = Lexicons::default();
        let hs: Vec<Headline> = [
            "Massive flood hits Karachi, rescue operations underway",
            "Peace talks bring hope to region",
        ]
        .iter()
        .filter_map(|t| Headline::parse(t))
        .collect();

        let got = classify_all(&hs, &lex);
        assert_eq!(got.len(), 2);

        assert!(got[0].is_crisis);
        assert_eq!(got[0].place.as_deref(), Some("karachi"));
        assert_eq!(got[0].sentiment, 0);

        assert!(!got[1].is_crisis);
        assert_eq!(got[1].sentiment, 2);
    }
}
