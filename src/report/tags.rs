//! Per-tag analysis shown alongside the scores.
//!
//! These checks use display thresholds (e.g. title 50-60 characters) that are
//! separate from the scoring rules; they only decide how a tag is presented.

use crate::models::{text_len, MetaTagSet, Recommendation, RecommendationKind};

const TITLE_OPTIMAL: (usize, usize) = (50, 60);
const DESCRIPTION_OPTIMAL: (usize, usize) = (150, 160);
const ESSENTIAL_TITLE_RANGE: (usize, usize) = (30, 70);
const ESSENTIAL_DESCRIPTION_RANGE: (usize, usize) = (120, 160);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagStatus {
    Good,
    Warning,
    Error,
}

impl TagStatus {
    pub fn symbol(self) -> &'static str {
        match self {
            TagStatus::Good => "✓",
            TagStatus::Warning => "⚠",
            TagStatus::Error => "✗",
        }
    }

    pub fn badge(self) -> &'static str {
        match self {
            TagStatus::Good => "Optimized",
            TagStatus::Warning => "Needs Work",
            TagStatus::Error => "Missing",
        }
    }
}

/// Verdict on a single tag (or the Open Graph group).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagAnalysis {
    pub name: &'static str,
    pub value: Option<String>,
    pub status: TagStatus,
    pub message: String,
    pub recommendation: Option<String>,
}

fn analyze_tag(name: &'static str, value: Option<&str>, optimal: Option<(usize, usize)>) -> TagAnalysis {
    let Some(value) = value else {
        return TagAnalysis {
            name,
            value: None,
            status: TagStatus::Error,
            message: format!("No {} found", name.to_lowercase()),
            recommendation: Some(format!("Add a {}", name.to_lowercase())),
        };
    };

    let Some((min, max)) = optimal else {
        return TagAnalysis {
            name,
            value: Some(value.to_string()),
            status: TagStatus::Good,
            message: "Present".to_string(),
            recommendation: None,
        };
    };

    let length = text_len(value);
    let in_range = (min..=max).contains(&length);
    TagAnalysis {
        name,
        value: Some(value.to_string()),
        status: if in_range { TagStatus::Good } else { TagStatus::Warning },
        message: format!("Length: {length} characters (Optimal: {min}-{max})"),
        recommendation: (!in_range).then(|| format!("Adjust length to {min}-{max} characters")),
    }
}

fn analyze_open_graph(meta: &MetaTagSet) -> TagAnalysis {
    let present = meta.open_graph_count();
    let status = match present {
        4.. => TagStatus::Good,
        2..=3 => TagStatus::Warning,
        _ => TagStatus::Error,
    };
    TagAnalysis {
        name: "Open Graph Tags",
        value: None,
        status,
        message: format!("{present}/5 Present"),
        recommendation: (present < 4)
            .then(|| "Add missing Open Graph tags for better social sharing".to_string()),
    }
}

/// Title, description, keywords, canonical and the Open Graph group, in display order.
pub fn analyze_tags(meta: &MetaTagSet) -> Vec<TagAnalysis> {
    vec![
        analyze_tag("Title Tag", meta.title.as_deref(), Some(TITLE_OPTIMAL)),
        analyze_tag(
            "Meta Description",
            meta.description.as_deref(),
            Some(DESCRIPTION_OPTIMAL),
        ),
        analyze_tag("Meta Keywords", meta.keywords.as_deref(), None),
        analyze_tag("Canonical URL", meta.canonical.as_deref(), None),
        analyze_open_graph(meta),
    ]
}

/// Presence and optimality of one of the four essential tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EssentialTag {
    pub name: &'static str,
    pub present: bool,
    pub optimal: bool,
}

fn within(len: Option<usize>, (min, max): (usize, usize)) -> bool {
    len.is_some_and(|len| (min..=max).contains(&len))
}

pub fn essential_tags(meta: &MetaTagSet) -> [EssentialTag; 4] {
    [
        EssentialTag {
            name: "Title",
            present: meta.title.is_some(),
            optimal: within(meta.title_len(), ESSENTIAL_TITLE_RANGE),
        },
        EssentialTag {
            name: "Description",
            present: meta.description.is_some(),
            optimal: within(meta.description_len(), ESSENTIAL_DESCRIPTION_RANGE),
        },
        EssentialTag {
            name: "OG Image",
            present: meta.og_image.is_some(),
            optimal: meta.og_image.is_some(),
        },
        EssentialTag {
            name: "Canonical",
            present: meta.canonical.is_some(),
            optimal: meta.canonical.is_some(),
        },
    ]
}

/// Recommendation totals by kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecommendationCounts {
    pub issues: usize,
    pub warnings: usize,
    pub opportunities: usize,
}

pub fn count_recommendations(recommendations: &[Recommendation]) -> RecommendationCounts {
    recommendations
        .iter()
        .fold(RecommendationCounts::default(), |mut counts, rec| {
            match rec.kind {
                RecommendationKind::Error => counts.issues += 1,
                RecommendationKind::Warning => counts.warnings += 1,
                RecommendationKind::Success => counts.opportunities += 1,
            }
            counts
        })
}

/// Display status of the overall score: good at 80+, warning at 60+.
pub fn overall_status(overall: u32) -> TagStatus {
    match overall {
        80.. => TagStatus::Good,
        60..=79 => TagStatus::Warning,
        _ => TagStatus::Error,
    }
}
