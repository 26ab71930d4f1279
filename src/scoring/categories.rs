//! Category scorer: basic, technical, social and content optimization.

use crate::models::{Category, CategoryResult, CategoryScores, MetaTagSet};

use super::status::{classify, summarize};

/// Raw point total for one category.
pub fn category_score(category: Category, meta: &MetaTagSet) -> u32 {
    let score = match category {
        Category::Basic => basic_seo(meta),
        Category::Technical => technical_seo(meta),
        Category::Social => social_seo(meta),
        Category::Content => content_optimization(meta),
    };
    score.min(category.max_score())
}

/// Scores all four categories and attaches status and summary.
pub fn score_categories(meta: &MetaTagSet) -> CategoryScores {
    CategoryScores {
        basic_seo: result_for(Category::Basic, meta),
        technical_seo: result_for(Category::Technical, meta),
        social_seo: result_for(Category::Social, meta),
        content_optimization: result_for(Category::Content, meta),
    }
}

fn result_for(category: Category, meta: &MetaTagSet) -> CategoryResult {
    let score = category_score(category, meta);
    let max_score = category.max_score();
    CategoryResult {
        score,
        max_score,
        status: classify(score, max_score),
        summary: summarize(category, score, max_score),
    }
}

// Titles in [30,70] but outside [50,60] earn no bonus here, only in
// `meta_tags_points`.
fn basic_seo(meta: &MetaTagSet) -> u32 {
    let mut score = 0;
    if let Some(len) = meta.title_len() {
        score += 3;
        if (50..=60).contains(&len) {
            score += 1;
        }
    }
    if let Some(len) = meta.description_len() {
        score += 3;
        if (150..=160).contains(&len) {
            score += 1;
        }
    }
    if meta.keywords.is_some() {
        score += 1;
    }
    score
}

fn technical_seo(meta: &MetaTagSet) -> u32 {
    [&meta.canonical, &meta.viewport, &meta.robots]
        .iter()
        .filter(|field| field.is_some())
        .count() as u32
        * 2
}

fn social_seo(meta: &MetaTagSet) -> u32 {
    let mut score = 0;
    if meta.og_title.is_some() {
        score += 2;
    }
    if meta.og_description.is_some() {
        score += 2;
    }
    if meta.og_image.is_some() {
        score += 3;
    }
    for field in [
        &meta.og_url,
        &meta.og_type,
        &meta.twitter_card,
        &meta.twitter_title,
        &meta.twitter_description,
    ] {
        if field.is_some() {
            score += 1;
        }
    }
    score
}

fn content_optimization(meta: &MetaTagSet) -> u32 {
    let mut score = 0;
    if meta.title_len().is_some_and(|len| (30..=70).contains(&len)) {
        score += 3;
    }
    if meta
        .description_len()
        .is_some_and(|len| (120..=160).contains(&len))
    {
        score += 3;
    }
    if differs(&meta.og_title, &meta.title) {
        score += 1;
    }
    if differs(&meta.og_description, &meta.description) {
        score += 1;
    }
    score
}

/// Both present and not equal.
fn differs(social: &Option<String>, base: &Option<String>) -> bool {
    matches!((social, base), (Some(a), Some(b)) if a != b)
}
