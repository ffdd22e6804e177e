//! Crisis map rendering.
//!
//! Markers are written to a standalone HTML page that loads Leaflet from a
//! CDN and draws one red marker per resolved headline on OpenStreetMap tiles.
//! The map is centred on Pakistan at zoom level 6.

use crate::error::Result;
use crate::models::MapMarker;
use crate::utils::{ensure_writable_dir, title_case};
use std::fmt::Write;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

/// Default output file for the crisis map.
pub const DEFAULT_MAP_FILE: &str = "pakistan_crisis_map.html";

const CENTER: (f64, f64) = (30.3753, 69.3451);
const ZOOM: u8 = 6;

/// Popup HTML for one marker: bold title-cased place, then the headline.
fn popup_html(marker: &MapMarker) -> String {
    format!(
        "<b>{}</b><br>{}",
        html_escape::encode_text(&title_case(&marker.place)),
        html_escape::encode_text(&marker.label)
    )
}

/// Render the map page for `markers`.
pub fn render_map(markers: &[MapMarker]) -> String {
    let mut script = String::new();
    for m in markers {
        // Popup text is embedded as a JSON string literal inside the script.
        let popup = serde_json::Value::String(popup_html(m)).to_string();
        let _ = writeln!(
            script,
            "L.marker([{}, {}], {{icon: redIcon}}).addTo(map).bindPopup({});",
            m.latitude, m.longitude, popup
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Pakistan Crisis Map</title>
<link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css">
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
<style>html, body, #map {{ height: 100%; margin: 0; }}</style>
</head>
<body>
<div id="map"></div>
<script>
var map = L.map('map').setView([{lat}, {lon}], {zoom});
L.tileLayer('https://{{s}}.tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png', {{
  attribution: '&copy; OpenStreetMap contributors'
}}).addTo(map);
var redIcon = L.icon({{
  iconUrl: 'https://raw.githubusercontent.com/pointhi/leaflet-color-markers/master/img/marker-icon-red.png',
  iconSize: [25, 41], iconAnchor: [12, 41], popupAnchor: [1, -34]
}});
{script}</script>
</body>
</html>
"#,
        lat = CENTER.0,
        lon = CENTER.1,
        zoom = ZOOM,
        script = script,
    )
}

/// Render and write the map page to `path`.
#[instrument(level = "info", skip_all, fields(markers = markers.len(), path = %path.display()))]
pub async fn write_map(markers: &[MapMarker], path: &Path) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        ensure_writable_dir(dir).await?;
    }
    fs::write(path, render_map(markers)).await?;
    info!("Wrote crisis map");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker(place: &str, label: &str) -> MapMarker {
        MapMarker {
            place: place.to_string(),
            latitude: 24.86,
            longitude: 67.01,
            label: label.to_string(),
        }
    }

    #[test]
    fn test_popup_title_cases_place_and_escapes_label() {
        let m = marker("dera ismail khan", "Blast <kills> 3 & injures 5");
        assert_eq!(
            popup_html(&m),
            "<b>Dera Ismail Khan</b><br>Blast &lt;kills&gt; 3 &amp; injures 5"
        );
    }

    #[test]
    fn test_render_map_has_one_marker_per_entry() {
        let html = render_map(&[
            marker("karachi", "Massive flood hits Karachi"),
            marker("lahore", "Protest in Lahore turns violent"),
        ]);
        assert_eq!(html.matches("L.marker(").count(), 2);
        assert!(html.contains("setView([30.3753, 69.3451], 6)"));
        assert!(html.contains("<b>Karachi</b>"));
    }

    #[test]
    fn test_render_map_without_markers_is_still_a_page() {
        let html = render_map(&[]);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert_eq!(html.matches("L.marker(").count(), 0);
    }

    #[test]
    fn test_label_quotes_cannot_break_script() {
        let html = render_map(&[marker("karachi", r#"He said "run"); alert(1); //"#)]);
        assert!(!html.contains(r#""run"); alert"#));
    }

    #[tokio::test]
    async fn test_write_map() {
        let dir = std::env::temp_dir().join(format!("nda_map_{}", std::process::id()));
        let path = dir.join("map.html");
        write_map(&[marker("karachi", "Flood in Karachi")], &path).await.unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("Flood in Karachi"));
        let _ = std::fs::remove_dir_all(&dir);
    }
}
