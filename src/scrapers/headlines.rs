//! Headline extraction from a fetched page body.
//!
//! Headlines are the text of `h1`–`h4` elements whose `class` attribute
//! contains `title`. This matches the markup used by the Tribune, Dawn and
//! The Nation front pages.
//!
//! Candidates are kept if their normalized text is between 15 and 150
//! characters and is not a section or navigation label such as `sports` or
//! `newsletter subscription`.

use crate::lexicon::Lexicon;
use crate::models::Headline;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::{debug, instrument};

static HEADLINE_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(
        r#"h1[class*="title"], h2[class*="title"], h3[class*="title"], h4[class*="title"]"#,
    )
    .expect("valid headline selector")
});

/// Extract headlines from page markup, in document order.
///
/// Never fails: markup with no matching elements, or markup that is not
/// HTML at all, yields an empty vector. Duplicate headlines are kept.
#[instrument(level = "debug", skip_all, fields(bytes = markup.len()))]
pub fn extract(markup: &str, excluded_terms: &Lexicon) -> Vec<Headline> {
    let document = Html::parse_document(markup);

    let mut headlines = Vec::new();
    let mut candidates = 0usize;
    for element in document.select(&HEADLINE_SELECTOR) {
        candidates += 1;
        let text = element.text().collect::<String>();
        let Some(headline) = Headline::parse(&text) else {
            continue;
        };
        if excluded_terms.contains(&headline.lowercase()) {
            continue;
        }
        headlines.push(headline);
    }

    debug!(candidates, kept = headlines.len(), "Extracted headlines");
    headlines
}
