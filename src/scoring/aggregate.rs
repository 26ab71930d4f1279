//! Aggregate point accumulators and the overall score.
//!
//! This is a second scoring view over the same fields the category scorer
//! reads, with its own weights. It answers "how much" rather than "what kind".

use crate::config::{AVERAGE_LOAD_TIME_MS, FAST_LOAD_TIME_MS};
use crate::models::{MetaTagSet, PerformanceLabel};

/// Maximum value of `meta_tags_points`.
pub const MAX_META_TAGS_POINTS: u32 = 15;
/// Maximum value of `social_tags_points`.
pub const MAX_SOCIAL_TAGS_POINTS: u32 = 12;

/// `round(points / max * 100)` with halves rounded up.
pub fn percentage(points: u32, max: u32) -> u32 {
    if max == 0 {
        return 0;
    }
    let points = u64::from(points.min(max));
    let max = u64::from(max);
    ((points * 200 + max) / (2 * max)) as u32
}

/// Points for the core meta tags (max 15).
pub fn meta_tags_points(meta: &MetaTagSet) -> u32 {
    let mut points = 0;

    if meta.title.is_some() {
        points += 3;
    }
    if meta.description.is_some() {
        points += 3;
    }
    if meta.keywords.is_some() {
        points += 1;
    }
    if meta.canonical.is_some() {
        points += 2;
    }
    if meta.viewport.is_some() {
        points += 2;
    }
    if meta.robots.is_some() {
        points += 1;
    }

    if let Some(len) = meta.title_len() {
        if (50..=60).contains(&len) {
            points += 2;
        } else if (30..=70).contains(&len) {
            points += 1;
        }
    }
    if let Some(len) = meta.description_len() {
        if (150..=160).contains(&len) {
            points += 1;
        }
    }

    points
}

/// Points for Open Graph and Twitter Card tags (max 12).
pub fn social_tags_points(meta: &MetaTagSet) -> u32 {
    let weights: [(&Option<String>, u32); 8] = [
        (&meta.og_title, 2),
        (&meta.og_description, 2),
        (&meta.og_image, 3),
        (&meta.og_url, 1),
        (&meta.og_type, 1),
        (&meta.twitter_card, 1),
        (&meta.twitter_title, 1),
        (&meta.twitter_description, 1),
    ];

    weights
        .iter()
        .filter(|(field, _)| field.is_some())
        .map(|(_, weight)| weight)
        .sum()
}

/// Mean of the two accumulator percentages, rounded half up (0-100).
pub fn overall_score(meta_points: u32, social_points: u32) -> u32 {
    let meta_pct = percentage(meta_points, MAX_META_TAGS_POINTS);
    let social_pct = percentage(social_points, MAX_SOCIAL_TAGS_POINTS);
    (meta_pct + social_pct + 1) / 2
}

/// Maps load time to a label: < 2000 ms Fast, < 4000 ms Average, else Slow.
pub fn performance_label(load_time_ms: u64) -> PerformanceLabel {
    if load_time_ms < FAST_LOAD_TIME_MS {
        PerformanceLabel::Fast
    } else if load_time_ms < AVERAGE_LOAD_TIME_MS {
        PerformanceLabel::Average
    } else {
        PerformanceLabel::Slow
    }
}
