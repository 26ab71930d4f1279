//! Colored terminal dashboard.

use std::fmt::Write;

use colored::{ColoredString, Colorize};
use strum::IntoEnumIterator;

use super::previews::{facebook_preview, linkedin_preview, search_preview, twitter_preview, SocialPreview};
use super::tags::{analyze_tags, count_recommendations, essential_tags, overall_status, TagStatus};
use crate::models::{
    AnalysisResult, Category, CategoryStatus, PerformanceLabel, Priority, RecommendationKind,
};
use crate::scoring::{MAX_META_TAGS_POINTS, MAX_SOCIAL_TAGS_POINTS};

fn paint_tag(status: TagStatus, text: &str) -> ColoredString {
    match status {
        TagStatus::Good => text.green(),
        TagStatus::Warning => text.yellow(),
        TagStatus::Error => text.red(),
    }
}

fn paint_category(status: CategoryStatus, text: &str) -> ColoredString {
    match status {
        CategoryStatus::Excellent => text.green().bold(),
        CategoryStatus::Good => text.blue(),
        CategoryStatus::NeedsWork => text.yellow(),
        CategoryStatus::Critical => text.red().bold(),
    }
}

fn paint_performance(label: PerformanceLabel) -> ColoredString {
    match label {
        PerformanceLabel::Fast => label.as_str().green(),
        PerformanceLabel::Average => label.as_str().yellow(),
        PerformanceLabel::Slow => label.as_str().red(),
    }
}

fn paint_kind(kind: RecommendationKind, priority: Priority) -> ColoredString {
    let label = format!("[{}]", priority.as_str().to_uppercase());
    match kind {
        RecommendationKind::Error => label.red().bold(),
        RecommendationKind::Warning => label.yellow(),
        RecommendationKind::Success => label.green(),
    }
}

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n{}", title.bold().underline());
}

fn write_social_preview(out: &mut String, preview: &SocialPreview) {
    let _ = writeln!(out, "  {}", preview.platform.bold());
    match &preview.image {
        Some(image) => {
            let _ = writeln!(out, "    Image: {image}");
        }
        None => {
            let _ = writeln!(out, "    {}", "No preview image found".dimmed());
        }
    }
    let _ = writeln!(out, "    {}", preview.title);
    if let Some(description) = &preview.description {
        let _ = writeln!(out, "    {description}");
    }
    let _ = writeln!(out, "    {}", preview.domain.dimmed());
}

/// Renders the full dashboard for one analysis.
pub fn render_dashboard(result: &AnalysisResult) -> String {
    let mut out = String::new();
    let score = &result.score;
    let meta = &result.meta_tags;

    let _ = writeln!(out, "{} {}", "SEO Analysis:".bold(), result.url);
    let overall = format!("{}/100", score.overall);
    let _ = writeln!(
        out,
        "Overall Score: {}",
        paint_tag(overall_status(score.overall), &overall).bold()
    );
    let _ = writeln!(
        out,
        "Meta Tags: {}/{}  Social Tags: {}/{}  Performance: {} ({} ms)",
        score.meta_tags_points,
        MAX_META_TAGS_POINTS,
        score.social_tags_points,
        MAX_SOCIAL_TAGS_POINTS,
        paint_performance(score.performance_label),
        result.load_time_ms
    );

    heading(&mut out, "Category Scores");
    for category in Category::iter() {
        let card = score.categories.get(category);
        let _ = writeln!(
            out,
            "  {:<22} {:>2}/{:<2}  {:<11} {}",
            category.as_str(),
            card.score,
            card.max_score,
            paint_category(card.status, card.status.as_str()),
            card.summary
        );
    }

    let counts = count_recommendations(&result.recommendations);
    heading(&mut out, "Summary");
    let _ = writeln!(
        out,
        "  {} issue(s), {} warning(s), {} opportunit{}",
        counts.issues.to_string().red(),
        counts.warnings.to_string().yellow(),
        counts.opportunities.to_string().green(),
        if counts.opportunities == 1 { "y" } else { "ies" }
    );

    let essentials = essential_tags(meta);
    let present = essentials.iter().filter(|tag| tag.present).count();
    let optimal = essentials.iter().filter(|tag| tag.optimal).count();
    heading(
        &mut out,
        &format!("Essential Tags ({present}/4 present, {optimal}/4 optimal)"),
    );
    for tag in &essentials {
        let status = match (tag.present, tag.optimal) {
            (true, true) => TagStatus::Good,
            (true, false) => TagStatus::Warning,
            (false, _) => TagStatus::Error,
        };
        let _ = writeln!(out, "  {} {}", paint_tag(status, status.symbol()), tag.name);
    }

    let analyses = analyze_tags(meta);
    let optimized = analyses
        .iter()
        .filter(|tag| tag.status == TagStatus::Good)
        .count();
    heading(
        &mut out,
        &format!("Detailed Tag Analysis ({optimized}/{} optimized)", analyses.len()),
    );
    for tag in &analyses {
        let _ = writeln!(
            out,
            "  {} {:<18} {:<11} {}",
            paint_tag(tag.status, tag.status.symbol()),
            tag.name,
            paint_tag(tag.status, tag.status.badge()),
            tag.message
        );
        if let Some(value) = &tag.value {
            let _ = writeln!(out, "      {}", value.dimmed());
        }
        if let Some(recommendation) = &tag.recommendation {
            let _ = writeln!(out, "      -> {recommendation}");
        }
    }

    let search = search_preview(result);
    heading(&mut out, "Search Result Preview");
    let _ = writeln!(out, "  {}", search.display_url.green());
    let _ = writeln!(out, "  {}", search.title.blue().bold());
    let _ = writeln!(out, "  {}", search.description);

    heading(&mut out, "Social Previews");
    for preview in [
        facebook_preview(meta),
        twitter_preview(meta),
        linkedin_preview(meta),
    ] {
        write_social_preview(&mut out, &preview);
    }

    heading(&mut out, "Recommendations");
    if result.recommendations.is_empty() {
        let _ = writeln!(out, "  {}", "No recommendations. Nice work!".green());
    }
    for rec in &result.recommendations {
        let _ = writeln!(
            out,
            "  {} {}: {}",
            paint_kind(rec.kind, rec.priority),
            rec.title.bold(),
            rec.description
        );
    }

    out
}
