//! Front-page scraping for the configured news sources.
//!
//! Scraping is two steps per source:
//!
//! 1. **Fetching**: [`fetch_page`] downloads the page and reports its status
//! 2. **Extraction**: [`headlines::extract`] turns the markup into headlines
//!
//! # Default Sources
//!
//! | Source | URL |
//! |--------|-----|
//! | The Express Tribune | `https://tribune.com.pk/` |
//! | Dawn | `https://www.dawn.com/` |
//! | The Nation | `https://www.nation.com.pk/` |
//!
//! Sources are scraped one after another. A failed fetch is logged and the
//! source contributes no headlines; it never aborts the run.

pub mod headlines;

use crate::error::Result;
use crate::lexicon::Lexicon;
use crate::models::{FetchedPage, Headline};
use crate::utils::truncate_for_log;
use reqwest::Client;
use tracing::{debug, error, info, instrument, warn};

/// Headlines scraped from one source.
#[derive(Debug)]
pub struct SourceHeadlines {
    pub url: String,
    /// HTTP status, or `None` if the request never completed.
    pub status: Option<u16>,
    pub headlines: Vec<Headline>,
}

/// Fetch one page.
///
/// Non-success statuses are not errors here: the body is returned as-is so
/// the caller can still extract from it. Only transport failures error.
#[instrument(level = "info", skip(client))]
pub async fn fetch_page(client: &Client, url: &str) -> Result<FetchedPage> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        warn!(%url, status = status.as_u16(), "Non-success status; extracting body anyway");
    }
    let body = response.text().await?;
    debug!(bytes = body.len(), preview = %truncate_for_log(&body, 200), "Fetched page body");
    Ok(FetchedPage {
        url: url.to_string(),
        status: status.as_u16(),
        body,
    })
}

/// Fetch and extract headlines from a single source.
#[instrument(level = "info", skip(client, excluded_terms))]
pub async fn scrape_source(client: &Client, url: &str, excluded_terms: &Lexicon) -> SourceHeadlines {
    match fetch_page(client, url).await {
        Ok(page) => {
            let headlines = headlines::extract(&page.body, excluded_terms);
            info!(%url, status = page.status, count = headlines.len(), "Scraped headlines");
            SourceHeadlines {
                url: page.url,
                status: Some(page.status),
                headlines,
            }
        }
        Err(e) => {
            error!(error = %e, %url, "Fetch failed; source contributes no headlines");
            SourceHeadlines {
                url: url.to_string(),
                status: None,
                headlines: Vec::new(),
            }
        }
    }
}

/// Scrape every source in order.
#[instrument(level = "info", skip_all, fields(sources = urls.len()))]
pub async fn scrape_all(client: &Client, urls: &[String], excluded_terms: &Lexicon) -> Vec<SourceHeadlines> {
    let mut results = Vec::with_capacity(urls.len());
    for url in urls {
        results.push(scrape_source(client, url, excluded_terms).await);
    }
    let total: usize = results.iter().map(|r| r.headlines.len()).sum();
    info!(total, "Scraped all sources");
    results
}

/// Flatten per-source results into the session's headline collection,
/// keeping source order then document order.
pub fn collect_headlines(sources: &[SourceHeadlines]) -> Vec<Headline> {
    sources
        .iter()
        .flat_map(|s| s.headlines.iter().cloned())
        .collect()
}
