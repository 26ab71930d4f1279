//! Selector-driven extraction of title, meta, link, Open Graph and Twitter tags.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::models::MetaTagSet;

/// Parses a static selector. Panics only on a malformed literal, which is a programming error.
fn static_selector(selector_str: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        panic!("Failed to parse CSS selector '{selector_str}': {e}. This is a programming error.")
    })
}

macro_rules! selector {
    ($name:ident, $css:expr) => {
        static $name: LazyLock<Selector> = LazyLock::new(|| static_selector($css));
    };
}

selector!(TITLE, "title");
selector!(DESCRIPTION, r#"meta[name="description"]"#);
selector!(KEYWORDS, r#"meta[name="keywords"]"#);
selector!(CANONICAL, r#"link[rel="canonical"]"#);
selector!(VIEWPORT, r#"meta[name="viewport"]"#);
selector!(ROBOTS, r#"meta[name="robots"]"#);

selector!(OG_TITLE, r#"meta[property="og:title"]"#);
selector!(OG_DESCRIPTION, r#"meta[property="og:description"]"#);
selector!(OG_IMAGE, r#"meta[property="og:image"]"#);
selector!(OG_URL, r#"meta[property="og:url"]"#);
selector!(OG_TYPE, r#"meta[property="og:type"]"#);

selector!(TWITTER_CARD, r#"meta[name="twitter:card"]"#);
selector!(TWITTER_TITLE, r#"meta[name="twitter:title"]"#);
selector!(TWITTER_DESCRIPTION, r#"meta[name="twitter:description"]"#);
selector!(TWITTER_IMAGE, r#"meta[name="twitter:image"]"#);
selector!(TWITTER_SITE, r#"meta[name="twitter:site"]"#);

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Attribute of the first element matching `selector`.
///
/// Only the first match counts: a later duplicate tag never fills in for an
/// empty first one.
fn first_attr(document: &Html, selector: &Selector, attr: &str) -> Option<String> {
    document
        .select(selector)
        .next()
        .and_then(|element| element.value().attr(attr))
        .and_then(non_empty)
}

fn content(document: &Html, selector: &Selector) -> Option<String> {
    first_attr(document, selector, "content")
}

fn extract_title(document: &Html) -> Option<String> {
    document
        .select(&TITLE)
        .next()
        .and_then(|element| non_empty(&element.text().collect::<String>()))
}

/// Extracts the fixed set of SEO tags from a parsed document.
pub fn extract_meta_tags(document: &Html) -> MetaTagSet {
    MetaTagSet {
        title: extract_title(document),
        description: content(document, &DESCRIPTION),
        keywords: content(document, &KEYWORDS),
        canonical: first_attr(document, &CANONICAL, "href"),
        viewport: content(document, &VIEWPORT),
        robots: content(document, &ROBOTS),

        og_title: content(document, &OG_TITLE),
        og_description: content(document, &OG_DESCRIPTION),
        og_image: content(document, &OG_IMAGE),
        og_url: content(document, &OG_URL),
        og_type: content(document, &OG_TYPE),

        twitter_card: content(document, &TWITTER_CARD),
        twitter_title: content(document, &TWITTER_TITLE),
        twitter_description: content(document, &TWITTER_DESCRIPTION),
        twitter_image: content(document, &TWITTER_IMAGE),
        twitter_site: content(document, &TWITTER_SITE),
    }
}

/// Parses raw HTML and extracts its tags.
pub fn parse_meta_tags(html: &str) -> MetaTagSet {
    let document = Html::parse_document(html);
    extract_meta_tags(&document)
}
