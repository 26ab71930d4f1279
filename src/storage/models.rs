// storage/models.rs
// Stored analysis record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{AnalysisResult, MetaTagSet, Recommendation};

/// Open Graph fields as stored in the `og_tags` JSON column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenGraphTags {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "type")]
    pub og_type: Option<String>,
}

impl From<&MetaTagSet> for OpenGraphTags {
    fn from(meta: &MetaTagSet) -> Self {
        Self {
            title: meta.og_title.clone(),
            description: meta.og_description.clone(),
            image: meta.og_image.clone(),
            url: meta.og_url.clone(),
            og_type: meta.og_type.clone(),
        }
    }
}

/// Twitter Card fields as stored in the `twitter_tags` JSON column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwitterTags {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
}

impl From<&MetaTagSet> for TwitterTags {
    fn from(meta: &MetaTagSet) -> Self {
        Self {
            card: meta.twitter_card.clone(),
            title: meta.twitter_title.clone(),
            description: meta.twitter_description.clone(),
            image: meta.twitter_image.clone(),
            site: meta.twitter_site.clone(),
        }
    }
}

/// A persisted analysis.
///
/// The flat columns mirror the `seo_analyses` table so history can be queried
/// with plain SQL; `result` carries the complete `AnalysisResult`.
/// `analyzed_at` is milliseconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredAnalysis {
    pub id: i64,
    pub url: String,
    pub title: Option<String>,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
    pub canonical_url: Option<String>,
    pub og_tags: OpenGraphTags,
    pub twitter_tags: TwitterTags,
    pub overall_score: u32,
    pub recommendations: Vec<Recommendation>,
    pub analyzed_at: i64,
    pub result: AnalysisResult,
}

impl StoredAnalysis {
    /// Builds the stored form of `result` under the given id and timestamp.
    pub fn from_result(id: i64, analyzed_at: i64, result: &AnalysisResult) -> Self {
        let meta = &result.meta_tags;
        Self {
            id,
            url: result.url.clone(),
            title: meta.title.clone(),
            meta_description: meta.description.clone(),
            meta_keywords: meta.keywords.clone(),
            canonical_url: meta.canonical.clone(),
            og_tags: OpenGraphTags::from(meta),
            twitter_tags: TwitterTags::from(meta),
            overall_score: result.score.overall,
            recommendations: result.recommendations.clone(),
            analyzed_at,
            result: result.clone(),
        }
    }

    /// `analyzed_at` as a UTC timestamp, if it is in range.
    pub fn analyzed_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.analyzed_at)
    }
}
