//! Stored-analysis listing.

use std::fmt::Write;

use crate::storage::StoredAnalysis;

/// One line per stored analysis: id, timestamp, overall score, url.
pub fn render_history(analyses: &[StoredAnalysis]) -> String {
    if analyses.is_empty() {
        return "No analyses stored yet.\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "{:>5}  {:<23}  {:>7}  URL", "ID", "ANALYZED AT", "SCORE");
    for analysis in analyses {
        let analyzed_at = analysis
            .analyzed_at_utc()
            .map(|ts| ts.format("%Y-%m-%d %H:%M:%S UTC").to_string())
            .unwrap_or_else(|| analysis.analyzed_at.to_string());
        let _ = writeln!(
            out,
            "{:>5}  {:<23}  {:>3}/100  {}",
            analysis.id, analyzed_at, analysis.overall_score, analysis.url
        );
    }
    out
}
