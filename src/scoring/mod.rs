//! Metadata scoring and recommendation engine.
//!
//! Turns a `MetaTagSet` (plus an externally measured load time) into:
//! - four category scores with status labels and summaries
//! - the `meta_tags_points` / `social_tags_points` accumulators and the
//!   overall 0-100 score derived from them
//! - a latency-based performance label
//! - an ordered list of recommendations
//!
//! Everything here is a pure function of its inputs: no I/O, no clock, no
//! shared state. Calling `evaluate` twice with the same arguments yields
//! identical output.

mod aggregate;
mod categories;
mod recommendations;
mod status;

pub use aggregate::{
    meta_tags_points, overall_score, percentage, performance_label, social_tags_points,
    MAX_META_TAGS_POINTS, MAX_SOCIAL_TAGS_POINTS,
};
pub use categories::{category_score, score_categories};
pub use recommendations::generate_recommendations;
pub use status::{classify, summarize};

use crate::models::{MetaTagSet, Recommendation, ScoreReport};

/// Builds the full `ScoreReport` for a page.
pub fn score(meta: &MetaTagSet, load_time_ms: u64) -> ScoreReport {
    let meta_points = meta_tags_points(meta);
    let social_points = social_tags_points(meta);

    ScoreReport {
        overall: overall_score(meta_points, social_points),
        meta_tags_points: meta_points,
        social_tags_points: social_points,
        performance_label: performance_label(load_time_ms),
        categories: score_categories(meta),
    }
}

/// Runs the engine: score report plus recommendations.
pub fn evaluate(meta: &MetaTagSet, load_time_ms: u64) -> (ScoreReport, Vec<Recommendation>) {
    let report = score(meta, load_time_ms);
    let recommendations = generate_recommendations(meta);
    log::debug!(
        "Scored page: overall={} meta={}/{} social={}/{} performance={} recommendations={}",
        report.overall,
        report.meta_tags_points,
        MAX_META_TAGS_POINTS,
        report.social_tags_points,
        MAX_SOCIAL_TAGS_POINTS,
        report.performance_label,
        recommendations.len()
    );
    (report, recommendations)
}
