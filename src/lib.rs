//! seo_analyzer library: meta tag scoring for web pages
//!
//! This library fetches a page, extracts its SEO-relevant meta tags (title,
//! description, canonical, Open Graph, Twitter Card, ...) and scores them:
//! four category scores with status labels and summaries, an overall 0-100
//! score, a latency label, and an ordered list of recommendations.
//!
//! The scoring engine (`scoring`) is a pure function of a `MetaTagSet` and a
//! load time. Everything around it (URL validation, fetch, parse, storage,
//! rendering, the JSON API) is plumbing that feeds it or consumes its output.
//!
//! # Example
//!
//! ```no_run
//! use seo_analyzer::{run_analysis, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     persist: false,
//!     ..Default::default()
//! };
//!
//! let result = run_analysis(&config, "example.com").await?;
//! println!("{}: {}/100 ({})", result.url, result.score.overall,
//!          result.score.performance_label);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Fetching, storage and the API server require a Tokio runtime. The scoring
//! engine does not.

mod app;
pub mod config;
pub mod error_handling;
mod fetch;
pub mod initialization;
pub mod models;
mod parse;
pub mod report;
pub mod scoring;
pub mod server;
pub mod storage;

// Re-export public API
pub use app::validate_and_normalize_url;
pub use config::{Config, LogFormat, LogLevel, OutputFormat};
pub use error_handling::{AnalysisError, DatabaseError};
pub use fetch::{fetch_page, FetchedPage};
pub use models::{AnalysisResult, MetaTagSet, Recommendation, ScoreReport};
pub use parse::{extract_meta_tags, parse_meta_tags};
pub use run::{analyze_url, run_analysis};
pub use storage::{
    run_migrations, AnalysisRepository, InMemoryAnalysisRepository, SqliteAnalysisRepository,
    StoredAnalysis,
};

// Internal run module (validate -> fetch -> parse -> score -> persist)
mod run {
    use anyhow::{Context, Result};
    use log::{debug, info};

    use crate::app::validate_and_normalize_url;
    use crate::config::Config;
    use crate::error_handling::AnalysisError;
    use crate::fetch::fetch_page;
    use crate::initialization::init_client;
    use crate::models::AnalysisResult;
    use crate::parse::parse_meta_tags;
    use crate::scoring::evaluate;
    use crate::storage::{AnalysisRepository, SqliteAnalysisRepository};

    /// Analyzes a single URL.
    ///
    /// Validates and normalizes `raw_url`, fetches the page, extracts its meta
    /// tags and scores them. Either the complete result is returned or one
    /// terminal error; no partial analysis is ever produced.
    ///
    /// # Errors
    ///
    /// Returns the `AnalysisError` of the first stage that fails. Validation
    /// errors satisfy `AnalysisError::is_validation`.
    pub async fn analyze_url(
        client: &reqwest::Client,
        raw_url: &str,
    ) -> Result<AnalysisResult, AnalysisError> {
        let url = validate_and_normalize_url(raw_url)?;
        info!("Analyzing {url}");

        let page = fetch_page(client, &url).await?;
        debug!(
            "Fetched {} ({} bytes, {} ms)",
            page.final_url,
            page.body.len(),
            page.load_time_ms
        );

        let meta_tags = parse_meta_tags(&page.body);
        let (score, recommendations) = evaluate(&meta_tags, page.load_time_ms);
        info!(
            "Analysis of {url} complete: overall {}/100, {} recommendation(s)",
            score.overall,
            recommendations.len()
        );

        Ok(AnalysisResult {
            url,
            meta_tags,
            score,
            recommendations,
            load_time_ms: page.load_time_ms,
        })
    }

    /// Runs one analysis with the provided configuration.
    ///
    /// Builds the HTTP client from `config`, analyzes `raw_url`, and stores the
    /// result in the SQLite database at `config.db_path` when `config.persist`
    /// is set.
    ///
    /// # Errors
    ///
    /// Fails if the client cannot be built, the analysis fails, or the result
    /// cannot be persisted.
    pub async fn run_analysis(config: &Config, raw_url: &str) -> Result<AnalysisResult> {
        let client = init_client(config).context("Failed to initialize HTTP client")?;
        let result = analyze_url(&client, raw_url).await?;

        if config.persist {
            let repository = SqliteAnalysisRepository::open(&config.db_path)
                .await
                .context("Failed to open analysis database")?;
            let stored = repository
                .create(&result)
                .await
                .context("Failed to store analysis")?;
            info!(
                "Stored analysis {} in {}",
                stored.id,
                config.db_path.display()
            );
        }

        Ok(result)
    }
}
