//! Analysis data model.
//!
//! These types are the engine's input (`MetaTagSet`) and output (`ScoreReport`,
//! `Recommendation`, wrapped together in `AnalysisResult`). Field names on the
//! wire are camelCase; absent optional fields are omitted.

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

/// Page metadata produced by the extractor.
///
/// Every field is either absent or a trimmed, non-empty string. The extractor
/// drops empty values, so "present but empty" never reaches the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaTagSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub robots: Option<String>,

    // Open Graph
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_type: Option<String>,

    // Twitter Card
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_card: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_site: Option<String>,
}

impl MetaTagSet {
    /// Length of the title in UTF-16 units, if present.
    pub fn title_len(&self) -> Option<usize> {
        self.title.as_deref().map(text_len)
    }

    /// Length of the meta description in UTF-16 units, if present.
    pub fn description_len(&self) -> Option<usize> {
        self.description.as_deref().map(text_len)
    }

    /// Number of the five Open Graph fields that are present.
    pub fn open_graph_count(&self) -> usize {
        [
            &self.og_title,
            &self.og_description,
            &self.og_image,
            &self.og_url,
            &self.og_type,
        ]
        .iter()
        .filter(|field| field.is_some())
        .count()
    }
}

/// Length in UTF-16 code units, the unit browsers and search snippets use.
/// Characters outside the Basic Multilingual Plane count twice.
pub(crate) fn text_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// The four independently scored SEO dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Category {
    Basic,
    Technical,
    Social,
    Content,
}

impl Category {
    /// Fixed maximum score for the category.
    pub fn max_score(self) -> u32 {
        match self {
            Category::Basic => 10,
            Category::Technical => 6,
            Category::Social => 12,
            Category::Content => 8,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Basic => "Basic SEO",
            Category::Technical => "Technical SEO",
            Category::Social => "Social Media",
            Category::Content => "Content Optimization",
        }
    }
}

/// Status label derived from a category's `score / max_score` ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryStatus {
    Excellent,
    Good,
    NeedsWork,
    Critical,
}

impl CategoryStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            CategoryStatus::Excellent => "excellent",
            CategoryStatus::Good => "good",
            CategoryStatus::NeedsWork => "needs-work",
            CategoryStatus::Critical => "critical",
        }
    }
}

impl std::fmt::Display for CategoryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score, status and summary for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResult {
    pub score: u32,
    pub max_score: u32,
    pub status: CategoryStatus,
    pub summary: String,
}

/// The four category results, keyed by name on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScores {
    #[serde(rename = "basicSEO")]
    pub basic_seo: CategoryResult,
    #[serde(rename = "technicalSEO")]
    pub technical_seo: CategoryResult,
    #[serde(rename = "socialSEO")]
    pub social_seo: CategoryResult,
    #[serde(rename = "contentOptimization")]
    pub content_optimization: CategoryResult,
}

impl CategoryScores {
    pub fn get(&self, category: Category) -> &CategoryResult {
        match category {
            Category::Basic => &self.basic_seo,
            Category::Technical => &self.technical_seo,
            Category::Social => &self.social_seo,
            Category::Content => &self.content_optimization,
        }
    }
}

/// Latency label, derived only from page load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum PerformanceLabel {
    Fast,
    Average,
    Slow,
}

impl PerformanceLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            PerformanceLabel::Fast => "Fast",
            PerformanceLabel::Average => "Average",
            PerformanceLabel::Slow => "Slow",
        }
    }
}

impl std::fmt::Display for PerformanceLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate scores for one analysis.
///
/// `meta_tags_points` and `social_tags_points` are accumulated independently of
/// the category scores; `overall` is derived only from those two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    pub overall: u32,
    pub meta_tags_points: u32,
    pub social_tags_points: u32,
    pub performance_label: PerformanceLabel,
    pub categories: CategoryScores,
}

/// Recommendation severity. `Success` marks a low-priority optional improvement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    Error,
    Warning,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

/// A single actionable suggestion about one meta tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_field: Option<String>,
}

/// Complete analysis of one URL: the unit persisted and returned over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub url: String,
    pub meta_tags: MetaTagSet,
    pub score: ScoreReport,
    pub recommendations: Vec<Recommendation>,
    #[serde(rename = "loadTime")]
    pub load_time_ms: u64,
}
