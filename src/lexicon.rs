//! Lexicon store: stopwords, sentiment words, crisis keywords, the gazetteer
//! and the excluded section labels.
//!
//! Every [`Lexicon`] is an ordered set of lowercase entries. Order matters for
//! the gazetteer, where the first matching entry wins. Matching is plain
//! substring search on the lowercase headline, so `strike` also matches
//! inside `airstrike`.
//!
//! [`Lexicons::default`] carries the built-in lists. A YAML config can
//! replace any of them (see [`crate::config`]).

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// An immutable, ordered, deduplicated set of lowercase words or phrases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Lexicon {
    entries: Vec<String>,
}

impl Lexicon {
    /// Build a lexicon, lowercasing entries and keeping the first occurrence
    /// of any duplicate.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let entries = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty() && seen.insert(w.clone()))
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Exact membership test. `word` must already be lowercase.
    pub fn contains(&self, word: &str) -> bool {
        self.entries.iter().any(|e| e == word)
    }

    /// True if any entry occurs as a substring of `lowercase_text`.
    pub fn matches_any(&self, lowercase_text: &str) -> bool {
        self.entries.iter().any(|e| lowercase_text.contains(e.as_str()))
    }

    /// First entry, in lexicon order, that occurs in `lowercase_text`.
    pub fn first_match(&self, lowercase_text: &str) -> Option<&str> {
        self.iter().find(|e| lowercase_text.contains(e))
    }

    /// Number of distinct entries that occur in `lowercase_text`.
    pub fn count_matches(&self, lowercase_text: &str) -> usize {
        self.entries
            .iter()
            .filter(|e| lowercase_text.contains(e.as_str()))
            .count()
    }
}

impl From<Vec<String>> for Lexicon {
    fn from(words: Vec<String>) -> Self {
        Self::new(words)
    }
}

impl From<Lexicon> for Vec<String> {
    fn from(lexicon: Lexicon) -> Self {
        lexicon.entries
    }
}

/// Every lexicon the pipeline needs, bundled for injection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicons {
    /// Tokens dropped by the word-frequency counter (exact match).
    pub stopwords: Lexicon,
    /// Words that raise a headline's sentiment score.
    pub positive: Lexicon,
    /// Words that lower a headline's sentiment score.
    pub negative: Lexicon,
    /// Disaster, conflict and unrest keywords.
    pub crisis: Lexicon,
    /// Place names, in priority order.
    pub gazetteer: Lexicon,
    /// Section and navigation labels that are never headlines (exact match).
    pub excluded_terms: Lexicon,
}

impl Default for Lexicons {
    fn default() -> Self {
        Self {
            stopwords: Lexicon::new(STOPWORDS),
            positive: Lexicon::new(POSITIVE_WORDS),
            negative: Lexicon::new(NEGATIVE_WORDS),
            crisis: Lexicon::new(CRISIS_KEYWORDS),
            gazetteer: Lexicon::new(GAZETTEER),
            excluded_terms: Lexicon::new(EXCLUDED_TERMS),
        }
    }
}

pub const EXCLUDED_TERMS: &[&str] = &[
    "sports",
    "business",
    "fashion",
    "national",
    "world",
    "entertainment",
    "technology",
    "health",
    "videos",
    "latest news",
    "today's paper",
    "e-paper",
    "magazines",
    "home",
    "latest",
    "instep",
    "makes",
    "housing",
    "follow us",
    "contact us",
    "subscription",
    "email us",
    "epaper nawaiwaqt",
    "newsletter subscription",
];

pub const STOPWORDS: &[&str] = &[
    "this", "that", "with", "will", "where", "what", "wait", "from", "have", "more", "when",
    "reveals", "very", "pakistan's", "after", "before", "first", "second", "says", "said",
    "tells", "ties", "amid",
];

pub const CRISIS_KEYWORDS: &[&str] = &[
    "raid", "raids", "bombing", "bombs", "blast", "blasts", "terror", "attack", "attacks",
    "strike", "airstrike", "shooting", "shootout", "earthquake", "flood", "floods", "cyclone",
    "typhoon", "hurricane", "landslide", "avalanche", "wildfire", "tsunami", "drought",
    "tragedy", "disaster", "disasters", "crisis", "famine", "plague", "protest", "protests",
    "riot", "riots", "demonstration", "uprising", "collision", "derailment", "sinking", "crash",
    "explosion",
];

pub const GAZETTEER: &[&str] = &[
    // cities
    "karachi",
    "lahore",
    "faisalabad",
    "rawalpindi",
    "gujranwala",
    "peshawar",
    "multan",
    "hyderabad",
    "islamabad",
    "muridke",
    "sialkot",
    "bahawalpur",
    // regions and districts
    "bajaur",
    "north waziristan",
    "south waziristan",
    "gilgit",
    "baltistan",
    "hunza",
    "skardu",
    "diamer",
    "chitral",
    "swat",
    "malakand",
    "mardan",
    "kohat",
    "dera ismail khan",
    "bannu",
    "tank",
    "lakki marwat",
    // provinces and territories
    "punjab",
    "sindh",
    "balochistan",
    "khyber pakhtunkhwa",
    "kpk",
    "gilgit baltistan",
    "ajk",
    "azad kashmir",
    "fata",
    "tribal areas",
    // abbreviations
    "isb",
    "khi",
    "lhr",
    "quetta city",
    "peshawar city",
    "gb",
    "ict",
    "kp",
    "nwfp",
    // neighbouring countries and regions
    "afghanistan",
    "kabul",
    "kandahar",
    "india",
    "new delhi",
    "kashmir",
    "srinagar",
    "china",
    "xinjiang",
    "iran",
    "us",
    // fused entries: "uk", "tajikistan", "pahalgam" and "k2" never match alone
    "uktajikistan",
    "pahalgamk2",
    // landmarks
    "nanga parbat",
    "indus river",
    "sutlej",
    "chenab",
    "jhelum",
    "swat valley",
    "khunjerab pass",
    "gwadar port",
];

pub const POSITIVE_WORDS: &[&str] = &[
    "peace", "recovery", "rebuild", "progress", "reform", "advance", "breakthrough",
    "cooperation", "unity", "accord", "deal", "agreement", "truce", "ceasefire", "dialogue",
    "win", "achievement", "success", "triumph", "milestone", "record", "aid", "relief",
    "donation", "support", "rescue", "volunteer", "charity", "hope", "optimism", "revival",
    "renewal", "stability", "evacuation", "shelter", "rehabilitation", "reconstruction", "cure",
    "vaccine", "treatment", "improve", "growth", "surplus", "boom", "investment", "stabilize",
    "justice", "arrest", "verdict", "compensation", "rights", "resilient", "strong", "brave",
    "heroic", "historic", "unprecedented", "landmark",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "raid", "raids", "bombing", "bombs", "blast", "blasts", "terror", "attack", "attacks",
    "strike", "airstrike", "shooting", "shootout", "war", "conflict", "clash", "violence",
    "murder", "assassination", "earthquake", "flood", "floods", "cyclone", "typhoon",
    "hurricane", "landslide", "avalanche", "wildfire", "tsunami", "drought", "tragedy",
    "disaster", "disasters", "crisis", "famine", "plague", "pandemic", "death", "fatal",
    "casualty", "injury", "missing", "protest", "protests", "riot", "riots", "demonstration",
    "uprising", "rebellion", "blockade", "curfew", "crackdown", "corruption", "scam", "fraud",
    "scandal", "inflation", "recession", "poverty", "unemployment", "failure", "collapse",
    "bankruptcy", "default", "deadly", "horrific", "brutal", "chaos", "havoc",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexicon_lowercases_and_dedupes() {
        let lex = Lexicon::new(["Strike", "strike", "  Fatal ", "fatal"]);
        assert_eq!(lex.iter().collect::<Vec<_>>(), vec!["strike", "fatal"]);
        assert_eq!(lex.len(), 2);
    }

    #[test]
    fn test_lexicon_drops_blank_entries() {
        let lex = Lexicon::new(["", "  ", "flood"]);
        assert_eq!(lex.len(), 1);
    }

    #[test]
    fn test_matches_any_is_substring_based() {
        let lex = Lexicon::new(["strike"]);
        assert!(lex.matches_any("israeli airstrike kills five"));
        assert!(!lex.matches_any("calm day in the capital"));
    }

    #[test]
    fn test_first_match_follows_lexicon_order() {
        let lex = Lexicon::new(["lahore", "karachi"]);
        assert_eq!(
            lex.first_match("karachi and lahore hit by rain"),
            Some("lahore")
        );
        assert_eq!(lex.first_match("quiet evening"), None);
    }

    #[test]
    fn test_count_matches_counts_each_entry_once() {
        let lex = Lexicon::new(["peace"]);
        assert_eq!(lex.count_matches("peace peace peace"), 1);
    }

    #[test]
    fn test_contains_is_exact() {
        let lex = Lexicon::new(["home"]);
        assert!(lex.contains("home"));
        assert!(!lex.contains("homes"));
    }

    #[test]
    fn test_default_lexicons_are_populated() {
        let lex = Lexicons::default();
        assert!(lex.stopwords.contains("amid"));
        assert!(!lex.stopwords.contains("strong"));
        assert!(lex.positive.contains("rescue"));
        assert!(lex.negative.contains("flood"));
        assert!(lex.crisis.contains("airstrike"));
        assert_eq!(lex.gazetteer.iter().next(), Some("karachi"));
        assert!(lex.excluded_terms.contains("newsletter subscription"));
    }

    #[test]
    fn test_default_negative_has_no_duplicates() {
        let lex = Lexicons::default();
        assert_eq!(lex.negative.len(), NEGATIVE_WORDS.len());
        assert!(lex.negative.contains("strike"));
    }

    #[test]
    fn test_default_gazetteer_keeps_fused_entries() {
        let lex = Lexicons::default();
        assert!(lex.gazetteer.contains("uktajikistan"));
        assert!(lex.gazetteer.contains("pahalgamk2"));
        for alone in ["uk", "tajikistan", "pahalgam", "k2"] {
            assert!(!lex.gazetteer.contains(alone), "{alone} should not be a standalone entry");
        }
    }

    #[test]
    fn test_lexicon_deserializes_from_yaml_list() {
        let lex: Lexicon = serde_yaml::from_str("- Karachi\n- lahore\n").unwrap();
        assert_eq!(lex.iter().collect::<Vec<_>>(), vec!["karachi", "lahore"]);
    }
}
