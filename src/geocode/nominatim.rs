//! OpenStreetMap Nominatim geocoder.
//!
//! Queries the `/search` endpoint with `format=json&limit=1` and takes the
//! first result. Nominatim's usage policy requires an identifying
//! `User-Agent` and at most one request per second; the user agent is set on
//! the [`Client`] and the rate is enforced by the caller's
//! [`Throttle`](super::Throttle).

use super::Geocoder;
use crate::error::{AnalysisError, Result};
use crate::models::Coordinates;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://nominatim.openstreetmap.org/search";
pub const DEFAULT_USER_AGENT: &str = "news_analyzer";

/// One entry of a Nominatim search response. Coordinates arrive as strings.
#[derive(Debug, Deserialize)]
struct SearchResult {
    lat: String,
    lon: String,
    #[serde(default)]
    display_name: Option<String>,
}

/// Geocoder backed by a Nominatim-compatible HTTP API.
#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    client: Client,
    endpoint: Url,
}

impl NominatimGeocoder {
    /// Build a geocoder with its own HTTP client.
    pub fn new(endpoint: &str, user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            endpoint: Url::parse(endpoint)?,
        })
    }

    fn search_url(&self, query: &str) -> Result<Url> {
        Ok(Url::parse_with_params(
            self.endpoint.as_str(),
            &[("q", query), ("format", "json"), ("limit", "1")],
        )?)
    }
}

impl Geocoder for NominatimGeocoder {
    #[instrument(level = "debug", skip(self))]
    async fn resolve(&self, query: &str) -> Result<Option<Coordinates>> {
        let url = self.search_url(query)?;
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AnalysisError::Geocode(format!("status {status} for {query:?}")));
        }
        let body = response.text().await?;
        parse_search_response(&body)
    }
}

/// Parse a Nominatim JSON array, returning the first result's coordinates.
fn parse_search_response(body: &str) -> Result<Option<Coordinates>> {
    let results: Vec<SearchResult> = serde_json::from_str(body)?;
    let Some(first) = results.into_iter().next() else {
        return Ok(None);
    };
    debug!(display_name = ?first.display_name, "Nominatim match");

    let latitude = first
        .lat
        .parse::<f64>()
        .map_err(|e| AnalysisError::Geocode(format!("bad latitude {:?}: {e}", first.lat)))?;
    let longitude = first
        .lon
        .parse::<f64>()
        .map_err(|e| AnalysisError::Geocode(format!("bad longitude {:?}: {e}", first.lon)))?;
    Ok(Some(Coordinates {
        latitude,
        longitude,
    }))
}
