//! Rendering of analysis results.
//!
//! Everything here is a pure function of an `AnalysisResult` (or of stored
//! history). Presentation never feeds back into scoring.
//!
//! - `Text`: colored terminal dashboard
//! - `Plain`: the plain-text export report
//! - `Json`: pretty-printed `AnalysisResult`

mod dashboard;
mod history;
mod plain;
mod previews;
mod tags;

pub use dashboard::render_dashboard;
pub use history::render_history;
pub use plain::render_plain_report;
pub use previews::{
    display_url, facebook_preview, linkedin_preview, search_preview, truncate_text,
    twitter_preview, SearchPreview, SocialPreview,
};
pub use tags::{
    analyze_tags, count_recommendations, essential_tags, overall_status, EssentialTag,
    RecommendationCounts, TagAnalysis, TagStatus,
};

use crate::config::OutputFormat;
use crate::models::AnalysisResult;

/// Renders `result` in the requested format.
///
/// # Errors
///
/// Returns a `serde_json::Error` only for `OutputFormat::Json` if serialization fails.
pub fn render_report(result: &AnalysisResult, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_dashboard(result)),
        OutputFormat::Plain => Ok(render_plain_report(result)),
        OutputFormat::Json => serde_json::to_string_pretty(result),
    }
}
