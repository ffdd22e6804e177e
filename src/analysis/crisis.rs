//! Crisis and place classification.
//!
//! Both filters are substring tests on the lowercase headline and keep the
//! input order. A headline is kept if it matches at least one entry.

use crate::lexicon::Lexicon;
use crate::models::Headline;
use tracing::{debug, instrument};

/// Headlines containing any crisis keyword.
#[instrument(level = "debug", skip_all, fields(headlines = headlines.len()))]
pub fn classify_crisis(headlines: &[Headline], crisis: &Lexicon) -> Vec<Headline> {
    let kept = filter_matching(headlines, crisis);
    debug!(kept = kept.len(), "Crisis headlines");
    kept
}

/// Crisis headlines that also contain any gazetteer place name.
#[instrument(level = "debug", skip_all, fields(headlines = crisis_headlines.len()))]
pub fn classify_place(crisis_headlines: &[Headline], gazetteer: &Lexicon) -> Vec<Headline> {
    let kept = filter_matching(crisis_headlines, gazetteer);
    debug!(kept = kept.len(), "Place headlines");
    kept
}

fn filter_matching(headlines: &[Headline], lexicon: &Lexicon) -> Vec<Headline> {
    headlines
        .iter()
        .filter(|h| lexicon.matches_any(&h.lowercase()))
        .cloned()
        .collect()
}
