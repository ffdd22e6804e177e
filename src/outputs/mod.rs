//! Presentation outputs for the analyses.
//!
//! # Submodules
//!
//! - [`chart`]: Terminal bar charts for word frequency and sentiment
//! - [`map`]: Leaflet HTML map of geocoded crisis headlines
//! - [`json`]: Optional JSON report of the whole session
//!
//! # Output Structure
//!
//! ```text
//! pakistan_crisis_map.html       # heatmap analysis
//! json_output_dir/
//! └── 2025-05-06/
//!     └── 081502.json            # --json-output-dir
//! ```

pub mod chart;
pub mod json;
pub mod map;
