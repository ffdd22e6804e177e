//! Data models for headlines and the results derived from them.
//!
//! This module defines the core data structures used throughout the application:
//! - [`Headline`]: A normalized, length-checked news title
//! - [`FetchedPage`]: Raw page markup returned by the HTTP collaborator
//! - [`WordCount`]: One row of the word-frequency ranking
//! - [`ClassifiedHeadline`]: A headline enriched with crisis, place and sentiment data
//! - [`Coordinates`] and [`MapMarker`]: Geocoding results ready for map rendering
//! - [`SentimentBuckets`]: Positive/neutral/negative distribution

use serde::{Deserialize, Serialize};
use std::fmt;

/// Shortest accepted headline, in characters.
pub const MIN_HEADLINE_CHARS: usize = 15;
/// Longest accepted headline, in characters.
pub const MAX_HEADLINE_CHARS: usize = 150;

/// A single news title in normalized-whitespace form.
///
/// A `Headline` can only be built through [`Headline::parse`], which
/// collapses whitespace and enforces the length bounds. The lowercase form
/// is computed on demand for matching and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Headline(String);

impl Headline {
    /// Normalize `raw` and accept it if its length is within bounds.
    pub fn parse(raw: &str) -> Option<Self> {
        let cleaned = crate::utils::normalize_whitespace(raw);
        let len = cleaned.chars().count();
        (MIN_HEADLINE_CHARS..=MAX_HEADLINE_CHARS)
            .contains(&len)
            .then_some(Self(cleaned))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercase form used for lexicon matching.
    pub fn lowercase(&self) -> String {
        self.0.to_lowercase()
    }
}

impl fmt::Display for Headline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A page body as returned by the HTTP fetch collaborator.
#[derive(Debug)]
pub struct FetchedPage {
    /// The URL that was requested.
    pub url: String,
    /// The HTTP status code of the response.
    pub status: u16,
    /// The raw markup body.
    pub body: String,
}

/// A word and the number of times it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// A headline with every per-headline result co-derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedHeadline {
    /// The headline text.
    pub headline: Headline,
    /// Whether any crisis keyword occurs in the headline.
    pub is_crisis: bool,
    /// First gazetteer entry found in the headline, if any.
    pub place: Option<String>,
    /// Signed lexicon sentiment score.
    pub sentiment: i32,
}

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A resolved place ready to be drawn on a map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    /// The gazetteer entry that was resolved.
    pub place: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Popup text; the headline the place was found in.
    pub label: String,
}

/// Three-way sentiment distribution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentBuckets {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl SentimentBuckets {
    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }
}
