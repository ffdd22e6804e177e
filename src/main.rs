//! # News Data Analyzer
//!
//! Scrapes headlines from Pakistani news front pages and runs simple batch
//! analyses over them.
//!
//! ## Features
//!
//! - Scrapes `h1`–`h4` title headings from The Express Tribune, Dawn and
//!   The Nation (or any configured sources)
//! - Word-frequency ranking with stopword filtering
//! - Crisis heatmap: crisis-keyword and place-name filtering, Nominatim
//!   geocoding and a Leaflet HTML map
//! - Lexicon sentiment scoring with a positive/neutral/negative distribution
//! - Optional JSON report of the session
//!
//! ## Usage
//!
//! ```sh
//! news_data_analyzer                       # interactive menu
//! news_data_analyzer --analysis heatmap    # one analysis, then exit
//! ```
//!
//! ## Architecture
//!
//! 1. **Scraping**: fetch every source once at startup and extract headlines
//! 2. **Analysis**: each menu choice runs one analysis over the same headlines
//! 3. **Output**: charts on stdout, the map as HTML, optionally a JSON report

use chrono::Local;
use clap::Parser;
use reqwest::Client;
use std::error::Error;
use std::io::Write as _;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod analysis;
mod cli;
mod config;
mod error;
mod geocode;
mod lexicon;
mod models;
mod outputs;
mod scrapers;
mod utils;

use analysis::{crisis, frequency, sentiment};
use cli::{Analysis, Cli, MenuChoice, MENU};
use config::AppConfig;
use error::AnalysisError;
use geocode::nominatim::NominatimGeocoder;
use geocode::Throttle;
use models::{Headline, MapMarker, SentimentBuckets, WordCount};
use outputs::json::{Report, SourceSummary};
use outputs::{chart, json, map};
use scrapers::SourceHeadlines;

/// Number of filtered headlines echoed by the heatmap analysis.
const PREVIEW_LIMIT: usize = 10;

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Everything one run works on, plus the results gathered for the report.
struct Session {
    config: AppConfig,
    args: Cli,
    sources: Vec<SourceHeadlines>,
    headlines: Vec<Headline>,
    /// Shared by every heatmap run so the geocoder interval holds across runs.
    throttle: Throttle,
    top_words: Option<Vec<WordCount>>,
    sentiment: Option<SentimentBuckets>,
    markers: Option<Vec<MapMarker>>,
}

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("news_data_analyzer starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let config = AppConfig::load(args.config.as_deref())?;

    // ---- Scrape sources ----
    println!("\n{}", "=".repeat(50));
    println!("{:^50}", "NEWS DATA ANALYZER - MAIN MENU");
    println!("{}", "=".repeat(50));

    let client = Client::builder().timeout(FETCH_TIMEOUT).build()?;
    let sources = scrapers::scrape_all(&client, &config.sources, &config.lexicons.excluded_terms).await;
    for source in &sources {
        print_source(source);
    }
    let headlines = scrapers::collect_headlines(&sources);
    info!(count = headlines.len(), "Headlines available for analysis");

    let throttle = Throttle::new(config.geocoder.min_delay);
    let mut session = Session {
        config,
        args,
        sources,
        headlines,
        throttle,
        top_words: None,
        sentiment: None,
        markers: None,
    };

    // ---- Analyses ----
    match session.args.analysis {
        Some(kind) => session.run(kind).await,
        None => session.menu_loop().await?,
    }

    // ---- JSON report ----
    if let Some(dir) = session.args.json_output_dir.clone() {
        let report = session.report();
        match json::write_report(&report, &dir).await {
            Ok(path) => println!("\nReport written to '{}'", path.display()),
            Err(e) => error!(error = %e, "Failed to write JSON report"),
        }
    }

    let elapsed = start_time.elapsed();
    info!(?elapsed, secs = elapsed.as_secs(), millis = elapsed.subsec_millis(), "Execution complete");
    Ok(())
}

fn print_source(source: &SourceHeadlines) {
    match source.status {
        Some(status) => println!("Status code for {}: {}", source.url, status),
        None => println!("Could not fetch {}", source.url),
    }
    println!("\nHeadlines from {}:", source.url);
    for (i, headline) in source.headlines.iter().enumerate() {
        println!("{}. {}", i + 1, headline);
    }
}

fn print_numbered(headlines: &[Headline], limit: usize) {
    for (i, headline) in headlines.iter().take(limit).enumerate() {
        println!("{}. {}", i + 1, headline);
    }
}

impl Session {
    /// Prompt until the user exits or stdin closes.
    async fn menu_loop(&mut self) -> Result<(), Box<dyn Error>> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            println!("\n{}", "-".repeat(50));
            println!("{MENU}");
            print!("Select analysis (1-4): ");
            std::io::stdout().flush()?;

            let Some(line) = lines.next_line().await? else {
                info!("stdin closed; leaving menu");
                break;
            };
            match MenuChoice::parse(&line) {
                MenuChoice::Run(kind) => self.run(kind).await,
                MenuChoice::Exit => {
                    println!("Exiting program...");
                    break;
                }
                MenuChoice::Invalid => println!("Invalid choice. Try again."),
            }
        }
        Ok(())
    }

    #[instrument(level = "info", skip(self))]
    async fn run(&mut self, kind: Analysis) {
        match kind {
            Analysis::WordFrequency => self.word_frequency(),
            Analysis::Heatmap => {
                if let Err(e) = self.heatmap().await {
                    error!(error = %e, "Heatmap analysis failed");
                    println!("Heatmap failed: {e}");
                }
            }
            Analysis::Sentiment => self.sentiment(),
        }
    }

    fn word_frequency(&mut self) {
        let stopwords = &self.config.lexicons.stopwords;
        match frequency::top_words(&self.headlines, stopwords, self.args.top_k) {
            Ok(words) => {
                println!("\n{}", chart::word_frequency_chart(&words));
                self.top_words = Some(words);
            }
            Err(e @ AnalysisError::EmptyResult { .. }) => {
                warn!(error = %e, "Word frequency produced no result");
                println!("\nNo qualifying words to rank ({e}).");
            }
            Err(e) => error!(error = %e, "Word frequency failed"),
        }
    }

    async fn heatmap(&mut self) -> Result<(), Box<dyn Error>> {
        let lexicons = &self.config.lexicons;
        let crisis_headlines = crisis::classify_crisis(&self.headlines, &lexicons.crisis);
        println!("\nFound {} crisis-related headlines:", crisis_headlines.len());
        print_numbered(&crisis_headlines, PREVIEW_LIMIT);

        let place_headlines = crisis::classify_place(&crisis_headlines, &lexicons.gazetteer);
        println!("\nFound {} place-related headlines:", place_headlines.len());
        print_numbered(&place_headlines, PREVIEW_LIMIT);

        let gc = &self.config.geocoder;
        let geocoder = NominatimGeocoder::new(&gc.endpoint, &gc.user_agent, gc.timeout)?;
        let markers = geocode::annotate(
            &place_headlines,
            &lexicons.gazetteer,
            &geocoder,
            &mut self.throttle,
            &gc.country,
        )
        .await;

        map::write_map(&markers, &self.args.map_output).await?;
        println!(
            "\nMap generated as '{}' ({} marker(s))",
            self.args.map_output.display(),
            markers.len()
        );
        self.markers = Some(markers);
        Ok(())
    }

    fn sentiment(&mut self) {
        let lexicons = &self.config.lexicons;
        let buckets = sentiment::bucketize(&self.headlines, &lexicons.positive, &lexicons.negative);
        println!("\n{}", chart::sentiment_chart(&buckets));
        self.sentiment = Some(buckets);
    }

    fn report(&self) -> Report {
        Report {
            generated_at: Local::now(),
            sources: self
                .sources
                .iter()
                .map(|s| SourceSummary {
                    url: s.url.clone(),
                    status: s.status,
                    headline_count: s.headlines.len(),
                })
                .collect(),
            headlines: analysis::classify_all(&self.headlines, &self.config.lexicons),
            top_words: self.top_words.clone(),
            sentiment: self.sentiment,
            markers: self.markers.clone(),
        }
    }
}
