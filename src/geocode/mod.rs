//! Geocode annotation of place-tagged crisis headlines.
//!
//! # Architecture
//!
//! - [`Geocoder`]: trait for anything that turns a free-text query into
//!   [`Coordinates`]. [`nominatim::NominatimGeocoder`] is the production
//!   implementation; tests use in-memory mocks.
//! - [`Throttle`]: minimum-interval scheduling policy owned by the caller.
//!   It is applied globally across all lookups, not per place.
//! - [`annotate`]: resolves each headline's first gazetteer match and
//!   produces [`MapMarker`]s. Failures are logged and skipped.
//!
//! # Known Limitation
//!
//! Only the first gazetteer entry (in gazetteer order) found in a headline is
//! resolved. A headline naming both Lahore and Karachi is mapped to whichever
//! comes first in the gazetteer; the other place is ignored.

pub mod nominatim;

use crate::error::Result;
use crate::lexicon::Lexicon;
use crate::models::{Coordinates, Headline, MapMarker};
use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::{debug, info, instrument, warn};

/// Default minimum delay between geocoder calls.
pub const DEFAULT_MIN_DELAY: Duration = Duration::from_secs(1);

/// Country qualifier appended to every query by default.
pub const DEFAULT_COUNTRY: &str = "Pakistan";

/// Trait for forward geocoding.
///
/// `Ok(None)` means the service answered but found nothing. `Err` means the
/// lookup itself failed.
pub trait Geocoder {
    async fn resolve(&self, query: &str) -> Result<Option<Coordinates>>;
}

/// Enforces a minimum interval between successive calls.
#[derive(Debug)]
pub struct Throttle {
    min_delay: Duration,
    last: Option<Instant>,
}

impl Throttle {
    pub fn new(min_delay: Duration) -> Self {
        Self {
            min_delay,
            last: None,
        }
    }

    /// Wait until at least `min_delay` has passed since the previous call,
    /// then record this call.
    pub async fn wait(&mut self) {
        if let Some(last) = self.last {
            let elapsed = last.elapsed();
            if elapsed < self.min_delay {
                let delay = self.min_delay - elapsed;
                debug!(?delay, "Throttling geocoder call");
                sleep(delay).await;
            }
        }
        self.last = Some(Instant::now());
    }
}

/// Resolve place-tagged headlines to map markers.
///
/// Output follows input order. Headlines whose place cannot be resolved,
/// whether through a lookup error or an empty answer, are omitted.
#[instrument(level = "info", skip_all, fields(headlines = place_headlines.len(), %country))]
pub async fn annotate<G: Geocoder>(
    place_headlines: &[Headline],
    gazetteer: &Lexicon,
    geocoder: &G,
    throttle: &mut Throttle,
    country: &str,
) -> Vec<MapMarker> {
    let mut markers = Vec::new();

    for headline in place_headlines {
        let Some(place) = gazetteer.first_match(&headline.lowercase()) else {
            debug!(%headline, "No gazetteer entry in headline; skipping");
            continue;
        };
        let query = format!("{place}, {country}");

        throttle.wait().await;
        match geocoder.resolve(&query).await {
            Ok(Some(coords)) => {
                debug!(%place, lat = coords.latitude, lon = coords.longitude, "Geocoded place");
                markers.push(MapMarker {
                    place: place.to_string(),
                    latitude: coords.latitude,
                    longitude: coords.longitude,
                    label: headline.to_string(),
                });
            }
            Ok(None) => warn!(%place, %query, "Geocoder found no match; skipping"),
            Err(e) => warn!(%place, error = %e, "Couldn't geocode place; skipping"),
        }
    }

    info!(
        markers = markers.len(),
        skipped = place_headlines.len() - markers.len(),
        "Geocode annotation complete"
    );
    markers
}
