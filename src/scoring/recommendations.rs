//! Recommendation generator.
//!
//! Checks run in a fixed order (title, description, og:image, og:title,
//! twitter:card, canonical) and each looks only at its own field. Output
//! keeps that order; it is not sorted by priority.

use crate::models::{MetaTagSet, Priority, Recommendation, RecommendationKind};

/// Builds the ordered recommendation list for a page.
pub fn generate_recommendations(meta: &MetaTagSet) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    match meta.title_len() {
        None => recommendations.push(recommendation(
            RecommendationKind::Error,
            Priority::High,
            "Missing Title Tag",
            "Add a descriptive title tag to improve search engine visibility.",
            "title",
        )),
        Some(len) if !(30..=70).contains(&len) => recommendations.push(recommendation(
            RecommendationKind::Warning,
            Priority::Medium,
            "Optimize Title Length",
            "Title should be 50-60 characters for optimal display in search results.",
            "title",
        )),
        Some(_) => {}
    }

    match meta.description_len() {
        None => recommendations.push(recommendation(
            RecommendationKind::Error,
            Priority::High,
            "Missing Meta Description",
            "Add a meta description to improve click-through rates from search results.",
            "description",
        )),
        Some(len) if !(120..=160).contains(&len) => recommendations.push(recommendation(
            RecommendationKind::Warning,
            Priority::Medium,
            "Optimize Meta Description Length",
            "Meta description should be 150-160 characters for optimal display.",
            "description",
        )),
        Some(_) => {}
    }

    if meta.og_image.is_none() {
        recommendations.push(recommendation(
            RecommendationKind::Error,
            Priority::High,
            "Add Open Graph Image",
            "Include an og:image meta tag for better social media sharing. Recommended size: 1200x630px.",
            "ogImage",
        ));
    }

    if meta.og_title.is_none() {
        recommendations.push(recommendation(
            RecommendationKind::Warning,
            Priority::Medium,
            "Add Open Graph Title",
            "Include og:title for better social media preview appearance.",
            "ogTitle",
        ));
    }

    if meta.twitter_card.is_none() {
        recommendations.push(recommendation(
            RecommendationKind::Success,
            Priority::Low,
            "Add Twitter Card Tags",
            "Include Twitter-specific meta tags for enhanced Twitter sharing appearance.",
            "twitterCard",
        ));
    }

    if meta.canonical.is_none() {
        recommendations.push(recommendation(
            RecommendationKind::Warning,
            Priority::Medium,
            "Add Canonical URL",
            "Include a canonical URL to prevent duplicate content issues.",
            "canonical",
        ));
    }

    recommendations
}

fn recommendation(
    kind: RecommendationKind,
    priority: Priority,
    title: &str,
    description: &str,
    field: &str,
) -> Recommendation {
    Recommendation {
        kind,
        priority,
        title: title.to_string(),
        description: description.to_string(),
        related_field: Some(field.to_string()),
    }
}
