//! Plain-text export report.

use std::fmt::Write;

use crate::models::AnalysisResult;
use crate::scoring::{MAX_META_TAGS_POINTS, MAX_SOCIAL_TAGS_POINTS};

const NOT_FOUND: &str = "Not found";

/// Renders the uncolored report suitable for saving to a `.txt` file.
pub fn render_plain_report(result: &AnalysisResult) -> String {
    let score = &result.score;
    let meta = &result.meta_tags;
    let mut out = String::new();

    let _ = writeln!(out, "SEO Analysis Report");
    let _ = writeln!(out, "==================");
    let _ = writeln!(out, "URL: {}", result.url);
    let _ = writeln!(out, "Overall Score: {}/100", score.overall);
    let _ = writeln!(
        out,
        "Meta Tags Score: {}/{MAX_META_TAGS_POINTS}",
        score.meta_tags_points
    );
    let _ = writeln!(
        out,
        "Social Tags Score: {}/{MAX_SOCIAL_TAGS_POINTS}",
        score.social_tags_points
    );
    let _ = writeln!(out, "Performance: {}", score.performance_label);
    let _ = writeln!(out);
    let _ = writeln!(out, "Title: {}", meta.title.as_deref().unwrap_or(NOT_FOUND));
    let _ = writeln!(
        out,
        "Description: {}",
        meta.description.as_deref().unwrap_or(NOT_FOUND)
    );
    let _ = writeln!(
        out,
        "Keywords: {}",
        meta.keywords.as_deref().unwrap_or(NOT_FOUND)
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Recommendations:");
    for rec in &result.recommendations {
        let _ = writeln!(out, "- {}: {}", rec.title, rec.description);
    }

    out
}
