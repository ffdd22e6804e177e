//! YAML configuration.
//!
//! Every field is optional. Anything left out falls back to the built-in
//! value, so an empty file is a valid config.
//!
//! ```yaml
//! sources:
//!   - https://www.dawn.com/
//! lexicons:
//!   gazetteer: [karachi, lahore]
//! geocoder:
//!   min_delay_ms: 1500
//! ```

use crate::error::Result;
use crate::geocode::nominatim::{DEFAULT_ENDPOINT, DEFAULT_USER_AGENT};
use crate::geocode::{DEFAULT_COUNTRY, DEFAULT_MIN_DELAY};
use crate::lexicon::{Lexicon, Lexicons};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::{info, instrument};

/// Front pages scraped when no `sources` are configured.
pub const DEFAULT_SOURCES: &[&str] = &[
    "https://tribune.com.pk/",
    "https://www.dawn.com/",
    "https://www.nation.com.pk/",
];

/// Resolved application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub sources: Vec<String>,
    pub lexicons: Lexicons,
    pub geocoder: GeocoderConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeocoderConfig {
    pub endpoint: String,
    pub user_agent: String,
    /// Appended to every place query, e.g. `"karachi, Pakistan"`.
    pub country: String,
    pub min_delay: Duration,
    pub timeout: Duration,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            country: DEFAULT_COUNTRY.to_string(),
            min_delay: DEFAULT_MIN_DELAY,
            timeout: Duration::from_secs(30),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sources: DEFAULT_SOURCES.iter().map(|s| s.to_string()).collect(),
            lexicons: Lexicons::default(),
            geocoder: GeocoderConfig::default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    sources: Option<Vec<String>>,
    #[serde(default)]
    lexicons: RawLexicons,
    #[serde(default)]
    geocoder: RawGeocoder,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawLexicons {
    stopwords: Option<Lexicon>,
    positive: Option<Lexicon>,
    negative: Option<Lexicon>,
    crisis: Option<Lexicon>,
    gazetteer: Option<Lexicon>,
    excluded_terms: Option<Lexicon>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawGeocoder {
    endpoint: Option<String>,
    user_agent: Option<String>,
    country: Option<String>,
    min_delay_ms: Option<u64>,
    timeout_secs: Option<u64>,
}

impl From<RawConfig> for AppConfig {
    fn from(raw: RawConfig) -> Self {
        let defaults = AppConfig::default();
        let l = raw.lexicons;
        let d = defaults.lexicons;
        let g = raw.geocoder;
        let dg = defaults.geocoder;

        Self {
            sources: raw.sources.unwrap_or(defaults.sources),
            lexicons: Lexicons {
                stopwords: l.stopwords.unwrap_or(d.stopwords),
                positive: l.positive.unwrap_or(d.positive),
                negative: l.negative.unwrap_or(d.negative),
                crisis: l.crisis.unwrap_or(d.crisis),
                gazetteer: l.gazetteer.unwrap_or(d.gazetteer),
                excluded_terms: l.excluded_terms.unwrap_or(d.excluded_terms),
            },
            geocoder: GeocoderConfig {
                endpoint: g.endpoint.unwrap_or(dg.endpoint),
                user_agent: g.user_agent.unwrap_or(dg.user_agent),
                country: g.country.unwrap_or(dg.country),
                min_delay: g.min_delay_ms.map(Duration::from_millis).unwrap_or(dg.min_delay),
                timeout: g.timeout_secs.map(Duration::from_secs).unwrap_or(dg.timeout),
            },
        }
    }
}

impl AppConfig {
    /// Parse a YAML document. Empty input yields the defaults.
    pub fn from_yaml(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Ok(Self::default());
        }
        let raw: RawConfig = serde_yaml::from_str(s)?;
        Ok(raw.into())
    }

    /// Load from `path`, or use the defaults when no path is given.
    #[instrument(level = "info")]
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            info!("No config file given; using built-in defaults");
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&content)?;
        info!(
            path = %path.display(),
            sources = config.sources.len(),
            gazetteer = config.lexicons.gazetteer.len(),
            "Loaded configuration"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;

    #[test]
    fn test_empty_yaml_is_default() {
        let c = AppConfig::from_yaml("").unwrap();
        assert_eq!(c.sources.len(), 3);
        assert_eq!(c.lexicons, Lexicons::default());
        assert_eq!(c.geocoder, GeocoderConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let yaml = r#"
sources:
  - https://www.dawn.com/
lexicons:
  gazetteer: [Lahore, karachi]
geocoder:
  min_delay_ms: 1500
  country: India
"#;
        let c = AppConfig::from_yaml(yaml).unwrap();
        assert_eq!(c.sources, vec!["https://www.dawn.com/".to_string()]);
        assert_eq!(
            c.lexicons.gazetteer.iter().collect::<Vec<_>>(),
            vec!["lahore", "karachi"]
        );
        assert_eq!(c.lexicons.crisis, Lexicons::default().crisis);
        assert_eq!(c.geocoder.min_delay, Duration::from_millis(1500));
        assert_eq!(c.geocoder.country, "India");
        assert_eq!(c.geocoder.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = AppConfig::from_yaml("sourcez: []").unwrap_err();
        assert!(matches!(err, AnalysisError::Config(_)));
    }

    #[test]
    fn test_load_without_path_is_default() {
        let c = AppConfig::load(None).unwrap();
        assert_eq!(c.sources[0], "https://tribune.com.pk/");
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("nda_config_{}.yaml", std::process::id()));
        std::fs::write(&path, "lexicons:\n  stopwords: [growth]\n").unwrap();
        let c = AppConfig::load(Some(&path)).unwrap();
        assert!(c.lexicons.stopwords.contains("growth"));
        assert!(!c.lexicons.stopwords.contains("amid"));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = AppConfig::load(Some(Path::new("/nonexistent/nda.yaml"))).unwrap_err();
        assert!(matches!(err, AnalysisError::Io(_)));
    }
}
