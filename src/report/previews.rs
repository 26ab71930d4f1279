//! Search-result and social card previews.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::{
    FACEBOOK_PREVIEW_DESCRIPTION_CHARS, SEARCH_PREVIEW_DESCRIPTION_CHARS,
    SOCIAL_PREVIEW_IMAGE_CHARS, SOCIAL_PREVIEW_TITLE_CHARS, TWITTER_PREVIEW_DESCRIPTION_CHARS,
};
use crate::models::{text_len, AnalysisResult, MetaTagSet};

const NO_TITLE: &str = "No title found";
const NO_DESCRIPTION: &str = "No description found";
const NO_META_DESCRIPTION: &str = "No meta description found";
const FALLBACK_DOMAIN: &str = "example.com";

static SCHEME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://").unwrap_or_else(|e| {
        panic!("Failed to compile scheme pattern: {e}. This is a programming error.")
    })
});

/// Shortens `text` to at most `max_len` UTF-16 units, ending in `...` when cut.
///
/// A surrogate pair that would straddle the cut is dropped whole.
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text_len(text) <= max_len {
        return text.to_string();
    }
    let budget = max_len.saturating_sub(3);
    let mut used = 0;
    let kept: String = text
        .chars()
        .take_while(|c| {
            used += c.len_utf16();
            used <= budget
        })
        .collect();
    format!("{kept}...")
}

/// URL as shown under a search result: no scheme, no trailing slash.
pub fn display_url(url: &str) -> String {
    let without_scheme = SCHEME_RE.replace(url, "");
    without_scheme
        .strip_suffix('/')
        .unwrap_or(&without_scheme)
        .to_string()
}

/// How the page would appear as a search engine result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPreview {
    pub display_url: String,
    pub title: String,
    pub description: String,
}

pub fn search_preview(result: &AnalysisResult) -> SearchPreview {
    let meta = &result.meta_tags;
    let description = meta.description.as_deref().unwrap_or(NO_META_DESCRIPTION);
    SearchPreview {
        display_url: display_url(&result.url),
        title: meta.title.clone().unwrap_or_else(|| NO_TITLE.to_string()),
        description: truncate_text(description, SEARCH_PREVIEW_DESCRIPTION_CHARS),
    }
}

/// How a shared link would appear on one social platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialPreview {
    pub platform: &'static str,
    pub title: String,
    /// LinkedIn cards show no description.
    pub description: Option<String>,
    pub image: Option<String>,
    pub domain: String,
}

fn first_of<'a>(candidates: &[&'a Option<String>]) -> Option<&'a str> {
    candidates.iter().find_map(|value| value.as_deref())
}

fn preview_domain(meta: &MetaTagSet) -> String {
    let domain = first_of(&[&meta.canonical, &meta.og_url]).unwrap_or(FALLBACK_DOMAIN);
    display_url(domain).to_lowercase()
}

fn preview_image(image: Option<&str>) -> Option<String> {
    image.map(|url| truncate_text(url, SOCIAL_PREVIEW_IMAGE_CHARS))
}

/// Facebook card: Open Graph first, then the base tags.
pub fn facebook_preview(meta: &MetaTagSet) -> SocialPreview {
    let title = first_of(&[&meta.og_title, &meta.title]).unwrap_or(NO_TITLE);
    let description =
        first_of(&[&meta.og_description, &meta.description]).unwrap_or(NO_DESCRIPTION);
    SocialPreview {
        platform: "Facebook",
        title: truncate_text(title, SOCIAL_PREVIEW_TITLE_CHARS),
        description: Some(truncate_text(description, FACEBOOK_PREVIEW_DESCRIPTION_CHARS)),
        image: preview_image(meta.og_image.as_deref()),
        domain: preview_domain(meta),
    }
}

/// Twitter card: Twitter tags first, then Open Graph, then the base tags.
pub fn twitter_preview(meta: &MetaTagSet) -> SocialPreview {
    let title = first_of(&[&meta.twitter_title, &meta.og_title, &meta.title]).unwrap_or(NO_TITLE);
    let description = first_of(&[
        &meta.twitter_description,
        &meta.og_description,
        &meta.description,
    ])
    .unwrap_or(NO_DESCRIPTION);
    SocialPreview {
        platform: "Twitter",
        title: truncate_text(title, SOCIAL_PREVIEW_TITLE_CHARS),
        description: Some(truncate_text(description, TWITTER_PREVIEW_DESCRIPTION_CHARS)),
        image: preview_image(first_of(&[&meta.twitter_image, &meta.og_image])),
        domain: preview_domain(meta),
    }
}

/// LinkedIn card: Open Graph title first, then the base title.
pub fn linkedin_preview(meta: &MetaTagSet) -> SocialPreview {
    let title = first_of(&[&meta.og_title, &meta.title]).unwrap_or(NO_TITLE);
    SocialPreview {
        platform: "LinkedIn",
        title: truncate_text(title, SOCIAL_PREVIEW_TITLE_CHARS),
        description: None,
        image: preview_image(meta.og_image.as_deref()),
        domain: preview_domain(meta),
    }
}
