//! Command-line interface definitions.
//!
//! This module defines the CLI arguments using the `clap` crate, plus the
//! choices of the interactive analysis menu shown when no `--analysis` is
//! given.

use crate::analysis::frequency::DEFAULT_TOP_K;
use crate::outputs::map::DEFAULT_MAP_FILE;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for the news data analyzer.
///
/// # Examples
///
/// ```sh
/// # Interactive menu over the default sources
/// news_data_analyzer
///
/// # One analysis, then exit
/// news_data_analyzer --analysis sentiment
///
/// # Custom lexicons and a JSON report
/// news_data_analyzer -c analyzer.yaml -j ./reports --analysis heatmap
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Optional path to a YAML config file
    #[arg(short, long, env = "NEWS_ANALYZER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Run a single analysis instead of the interactive menu
    #[arg(short, long, value_enum)]
    pub analysis: Option<Analysis>,

    /// Number of words shown by the word-frequency analysis
    #[arg(short = 'k', long, default_value_t = DEFAULT_TOP_K)]
    pub top_k: usize,

    /// Output path for the crisis heatmap
    #[arg(long, default_value = DEFAULT_MAP_FILE)]
    pub map_output: PathBuf,

    /// Optional output directory for a JSON report of the session
    #[arg(short, long)]
    pub json_output_dir: Option<PathBuf>,
}

/// The analyses offered by the menu and by `--analysis`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Analysis {
    WordFrequency,
    Heatmap,
    Sentiment,
}

/// One line of input to the interactive menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Run(Analysis),
    Exit,
    Invalid,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "1" => Self::Run(Analysis::WordFrequency),
            "2" => Self::Run(Analysis::Heatmap),
            "3" => Self::Run(Analysis::Sentiment),
            "4" => Self::Exit,
            _ => Self::Invalid,
        }
    }
}

pub const MENU: &str = "Analysis options:
1. Word Frequency Analysis
2. Geographical Heatmap Generator
3. Sentiment Analysis
4. Exit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["news_data_analyzer"]);
        assert_eq!(cli.analysis, None);
        assert_eq!(cli.top_k, 5);
        assert_eq!(cli.map_output, PathBuf::from("pakistan_crisis_map.html"));
        assert!(cli.json_output_dir.is_none());
    }

    #[test]
    fn test_cli_analysis_flag() {
        let cli = Cli::parse_from(["news_data_analyzer", "--analysis", "word-frequency", "-k", "10"]);
        assert_eq!(cli.analysis, Some(Analysis::WordFrequency));
        assert_eq!(cli.top_k, 10);
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from([
            "news_data_analyzer",
            "-c",
            "/tmp/analyzer.yaml",
            "-a",
            "heatmap",
            "-j",
            "/tmp/reports",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/analyzer.yaml")));
        assert_eq!(cli.analysis, Some(Analysis::Heatmap));
        assert_eq!(cli.json_output_dir, Some(PathBuf::from("/tmp/reports")));
    }

    #[test]
    fn test_cli_rejects_unknown_analysis() {
        assert!(Cli::try_parse_from(["news_data_analyzer", "--analysis", "topics"]).is_err());
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1\n"), MenuChoice::Run(Analysis::WordFrequency));
        assert_eq!(MenuChoice::parse(" 2 "), MenuChoice::Run(Analysis::Heatmap));
        assert_eq!(MenuChoice::parse("3"), MenuChoice::Run(Analysis::Sentiment));
        assert_eq!(MenuChoice::parse("4"), MenuChoice::Exit);
        assert_eq!(MenuChoice::parse("5"), MenuChoice::Invalid);
        assert_eq!(MenuChoice::parse(""), MenuChoice::Invalid);
    }
}
