//! Status classification and summary text for category results.

use crate::models::{Category, CategoryStatus};

use super::aggregate::percentage;

/// Classifies a category score by its share of the maximum.
///
/// >= 90% excellent, >= 70% good, >= 40% needs-work, otherwise critical.
/// Compared in integer arithmetic so exact thresholds are never lost to
/// floating point.
pub fn classify(score: u32, max_score: u32) -> CategoryStatus {
    if max_score == 0 {
        return CategoryStatus::Critical;
    }
    let scaled = u64::from(score) * 100;
    let max = u64::from(max_score);
    if scaled >= 90 * max {
        CategoryStatus::Excellent
    } else if scaled >= 70 * max {
        CategoryStatus::Good
    } else if scaled >= 40 * max {
        CategoryStatus::NeedsWork
    } else {
        CategoryStatus::Critical
    }
}

/// Human-readable summary for a category at a given status.
pub fn summarize(category: Category, score: u32, max_score: u32) -> String {
    let pct = percentage(score, max_score);
    let status = classify(score, max_score);

    match (category, status) {
        (Category::Basic, CategoryStatus::Excellent) => {
            format!("Your page has excellent basic SEO foundation with {pct}% completion")
        }
        (Category::Basic, CategoryStatus::Good) => format!(
            "Good basic SEO setup, but {}% needs attention",
            100u32.saturating_sub(pct)
        ),
        (Category::Basic, CategoryStatus::NeedsWork) => {
            format!("Basic SEO needs significant improvement ({pct}% complete)")
        }
        (Category::Basic, CategoryStatus::Critical) => {
            format!("Critical: Basic SEO elements are mostly missing ({pct}% complete)")
        }

        (Category::Social, CategoryStatus::Excellent) => {
            format!("Excellent social media optimization ({pct}% complete)")
        }
        (Category::Social, CategoryStatus::Good) => {
            "Good social sharing setup, minor improvements possible".to_string()
        }
        (Category::Social, CategoryStatus::NeedsWork) => {
            "Social sharing could be significantly improved".to_string()
        }
        (Category::Social, CategoryStatus::Critical) => {
            "Critical: Missing essential social media tags".to_string()
        }

        (Category::Technical, CategoryStatus::Excellent) => {
            "Technical SEO is excellently configured".to_string()
        }
        (Category::Technical, CategoryStatus::Good) => {
            "Good technical foundation with room for improvement".to_string()
        }
        (Category::Technical, CategoryStatus::NeedsWork) => {
            "Technical SEO needs attention for better performance".to_string()
        }
        (Category::Technical, CategoryStatus::Critical) => {
            "Critical technical SEO issues need immediate attention".to_string()
        }

        (Category::Content, CategoryStatus::Excellent) => {
            "Content is well-optimized for search engines".to_string()
        }
        (Category::Content, CategoryStatus::Good) => {
            "Content optimization is on track with minor tweaks needed".to_string()
        }
        (Category::Content, CategoryStatus::NeedsWork) => {
            "Content needs optimization for better search visibility".to_string()
        }
        (Category::Content, CategoryStatus::Critical) => {
            "Content requires significant SEO improvements".to_string()
        }
    }
}
