//! Error types shared by the analysis pipeline.
//!
//! Most stages are total functions and never fail. The variants here cover
//! the few places that can: an empty word-frequency result, configuration
//! loading, and the two external collaborators (page fetch and geocoding).

/// Errors raised by the analyzer.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// No token survived length and stopword filtering across all headlines.
    #[error("no qualifying words found in {headlines} headline(s)")]
    EmptyResult { headlines: usize },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("config error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("geocoder error: {0}")]
    Geocode(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result_message() {
        let e = AnalysisError::EmptyResult { headlines: 3 };
        assert_eq!(e.to_string(), "no qualifying words found in 3 headline(s)");
    }

    #[test]
    fn test_geocode_message() {
        let e = AnalysisError::Geocode("status 503".to_string());
        assert!(e.to_string().contains("503"));
    }
}
