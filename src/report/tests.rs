// Report module tests.

use super::*;
use crate::config::OutputFormat;
use crate::models::{AnalysisResult, MetaTagSet, RecommendationKind};
use crate::scoring::evaluate;
use crate::storage::StoredAnalysis;

fn analysis(meta: MetaTagSet, load_time_ms: u64) -> AnalysisResult {
    let (score, recommendations) = evaluate(&meta, load_time_ms);
    AnalysisResult {
        url: "https://example.com/".to_string(),
        meta_tags: meta,
        score,
        recommendations,
        load_time_ms,
    }
}

fn full_meta() -> MetaTagSet {
    MetaTagSet {
        title: Some("An Example Page Title That Is Fifty Five Characters Lo".to_string()),
        description: Some("d".repeat(155)),
        keywords: Some("example, seo".to_string()),
        canonical: Some("https://Example.com/page/".to_string()),
        viewport: Some("width=device-width".to_string()),
        robots: Some("index".to_string()),
        og_title: Some("OG Title".to_string()),
        og_description: Some("OG Description".to_string()),
        og_image: Some("https://example.com/og.png".to_string()),
        og_url: Some("https://example.com/page".to_string()),
        og_type: Some("website".to_string()),
        twitter_card: Some("summary".to_string()),
        twitter_title: Some("Tw Title".to_string()),
        twitter_description: Some("Tw Description".to_string()),
        twitter_image: Some("https://example.com/tw.png".to_string()),
        twitter_site: Some("@example".to_string()),
    }
}

#[test]
fn test_truncate_text() {
    assert_eq!(truncate_text("short", 10), "short");
    assert_eq!(truncate_text("exactly10!", 10), "exactly10!");
    assert_eq!(truncate_text("eleven chars", 10), "eleven ...");
    // Counts UTF-16 units, not bytes.
    assert_eq!(truncate_text("ééééééééééé", 10), "ééééééé...");
}

#[test]
fn test_truncate_text_counts_astral_characters_twice() {
    // 5 rockets are 10 UTF-16 units: fits exactly.
    assert_eq!(truncate_text(&"🚀".repeat(5), 10), "🚀".repeat(5));
    // 6 rockets (12 units) leave a budget of 7: three whole rockets fit.
    assert_eq!(truncate_text(&"🚀".repeat(6), 10), format!("{}...", "🚀".repeat(3)));
    // A pair straddling the cut is dropped whole.
    assert_eq!(truncate_text(&format!("abcdef{}", "🚀".repeat(3)), 10), "abcdef...");
}

#[test]
fn test_analyze_tags_reports_utf16_length() {
    let meta = MetaTagSet {
        title: Some(format!("🚀{}", "a".repeat(48))),
        ..Default::default()
    };
    let title = &analyze_tags(&meta)[0];
    assert_eq!(title.status, TagStatus::Good);
    assert_eq!(title.message, "Length: 50 characters (Optimal: 50-60)");
}

#[test]
fn test_display_url() {
    assert_eq!(display_url("https://example.com/"), "example.com");
    assert_eq!(display_url("http://example.com/a/b/"), "example.com/a/b");
    assert_eq!(display_url("example.com"), "example.com");
    assert_eq!(display_url("ftp://example.com/"), "ftp://example.com");
}

#[test]
fn test_search_preview_fallbacks() {
    let preview = search_preview(&analysis(MetaTagSet::default(), 100));
    assert_eq!(preview.display_url, "example.com");
    assert_eq!(preview.title, "No title found");
    assert_eq!(preview.description, "No meta description found");
}

#[test]
fn test_search_preview_truncates_long_description() {
    let meta = MetaTagSet {
        description: Some("x".repeat(161)),
        ..Default::default()
    };
    let preview = search_preview(&analysis(meta, 100));
    assert_eq!(preview.description.chars().count(), 160);
    assert!(preview.description.ends_with("..."));
    assert_eq!(&preview.description[..157], "x".repeat(157));

    let meta = MetaTagSet {
        description: Some("x".repeat(160)),
        ..Default::default()
    };
    assert_eq!(search_preview(&analysis(meta, 100)).description, "x".repeat(160));
}

#[test]
fn test_social_preview_fallback_chains() {
    let meta = MetaTagSet {
        title: Some("Base Title".to_string()),
        description: Some("Base Description".to_string()),
        og_title: Some("OG Title".to_string()),
        ..Default::default()
    };

    let facebook = facebook_preview(&meta);
    assert_eq!(facebook.title, "OG Title");
    assert_eq!(facebook.description.as_deref(), Some("Base Description"));
    assert_eq!(facebook.image, None);
    assert_eq!(facebook.domain, "example.com");

    let twitter = twitter_preview(&meta);
    assert_eq!(twitter.title, "OG Title");
    assert_eq!(twitter.description.as_deref(), Some("Base Description"));

    let linkedin = linkedin_preview(&meta);
    assert_eq!(linkedin.title, "OG Title");
    assert_eq!(linkedin.description, None);
}

#[test]
fn test_twitter_preview_prefers_twitter_tags() {
    let meta = full_meta();
    let twitter = twitter_preview(&meta);
    assert_eq!(twitter.title, "Tw Title");
    assert_eq!(twitter.description.as_deref(), Some("Tw Description"));
    assert_eq!(twitter.image.as_deref(), Some("https://example.com/tw.png"));
    // Canonical wins over og:url and is lowercased without scheme or trailing slash.
    assert_eq!(twitter.domain, "example.com/page");
}

#[test]
fn test_social_preview_limits() {
    let meta = MetaTagSet {
        og_title: Some("t".repeat(61)),
        og_description: Some("d".repeat(81)),
        og_image: Some(format!("https://example.com/{}", "i".repeat(40))),
        ..Default::default()
    };
    let facebook = facebook_preview(&meta);
    assert_eq!(facebook.title.chars().count(), 60);
    assert_eq!(facebook.description.as_deref().map(|d| d.chars().count()), Some(80));
    assert_eq!(facebook.image.as_deref().map(|i| i.chars().count()), Some(50));

    // Twitter allows a longer description than Facebook.
    let twitter = twitter_preview(&meta);
    assert_eq!(twitter.description.as_deref(), Some("d".repeat(81).as_str()));
}

#[test]
fn test_analyze_tags_statuses() {
    let tags = analyze_tags(&MetaTagSet::default());
    assert_eq!(tags.len(), 5);
    assert!(tags.iter().all(|tag| tag.status == TagStatus::Error));
    assert_eq!(tags[0].message, "No title tag found");
    assert_eq!(tags[4].message, "0/5 Present");

    let meta = MetaTagSet {
        title: Some("t".repeat(40)),
        description: Some("d".repeat(155)),
        keywords: Some("k".to_string()),
        og_title: Some("o".to_string()),
        og_image: Some("i".to_string()),
        ..Default::default()
    };
    let tags = analyze_tags(&meta);
    assert_eq!(tags[0].status, TagStatus::Warning);
    assert_eq!(
        tags[0].message,
        "Length: 40 characters (Optimal: 50-60)"
    );
    assert_eq!(
        tags[0].recommendation.as_deref(),
        Some("Adjust length to 50-60 characters")
    );
    assert_eq!(tags[1].status, TagStatus::Good);
    assert_eq!(tags[2].message, "Present");
    assert_eq!(tags[3].status, TagStatus::Error);
    assert_eq!(tags[4].status, TagStatus::Warning);
}

#[test]
fn test_open_graph_thresholds() {
    let mut meta = MetaTagSet::default();
    meta.og_title = Some("a".to_string());
    assert_eq!(analyze_tags(&meta)[4].status, TagStatus::Error);
    meta.og_description = Some("b".to_string());
    assert_eq!(analyze_tags(&meta)[4].status, TagStatus::Warning);
    meta.og_image = Some("c".to_string());
    assert_eq!(analyze_tags(&meta)[4].status, TagStatus::Warning);
    meta.og_url = Some("d".to_string());
    let og = &analyze_tags(&meta)[4];
    assert_eq!(og.status, TagStatus::Good);
    assert_eq!(og.recommendation, None);
}

#[test]
fn test_essential_tags() {
    let meta = MetaTagSet {
        title: Some("t".repeat(25)),
        description: Some("d".repeat(130)),
        og_image: Some("img".to_string()),
        ..Default::default()
    };
    let tags = essential_tags(&meta);
    assert!(tags[0].present && !tags[0].optimal);
    assert!(tags[1].present && tags[1].optimal);
    assert!(tags[2].present && tags[2].optimal);
    assert!(!tags[3].present && !tags[3].optimal);
}

#[test]
fn test_count_recommendations_matches_kinds() {
    let result = analysis(MetaTagSet::default(), 100);
    let counts = count_recommendations(&result.recommendations);
    let errors = result
        .recommendations
        .iter()
        .filter(|r| r.kind == RecommendationKind::Error)
        .count();
    assert_eq!(counts.issues, errors);
    assert_eq!(
        counts.issues + counts.warnings + counts.opportunities,
        result.recommendations.len()
    );
}

#[test]
fn test_overall_status_bands() {
    assert_eq!(overall_status(100), TagStatus::Good);
    assert_eq!(overall_status(80), TagStatus::Good);
    assert_eq!(overall_status(79), TagStatus::Warning);
    assert_eq!(overall_status(60), TagStatus::Warning);
    assert_eq!(overall_status(59), TagStatus::Error);
    assert_eq!(overall_status(0), TagStatus::Error);
}

#[test]
fn test_plain_report_layout() {
    let result = analysis(MetaTagSet::default(), 2500);
    let report = render_plain_report(&result);
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines[0], "SEO Analysis Report");
    assert_eq!(lines[1], "==================");
    assert_eq!(lines[2], "URL: https://example.com/");
    assert_eq!(lines[3], "Overall Score: 0/100");
    assert_eq!(lines[4], "Meta Tags Score: 0/15");
    assert_eq!(lines[5], "Social Tags Score: 0/12");
    assert_eq!(lines[6], "Performance: Average");
    assert_eq!(lines[7], "");
    assert_eq!(lines[8], "Title: Not found");
    assert_eq!(lines[9], "Description: Not found");
    assert_eq!(lines[10], "Keywords: Not found");
    assert_eq!(lines[11], "");
    assert_eq!(lines[12], "Recommendations:");
    assert_eq!(lines.len(), 13 + result.recommendations.len());
    assert!(lines[13].starts_with("- "));
}

#[test]
fn test_render_report_json_round_trips() {
    let result = analysis(full_meta(), 900);
    let json = render_report(&result, OutputFormat::Json).unwrap();
    let parsed: AnalysisResult = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, result);
}

#[test]
fn test_render_report_text_contains_sections() {
    colored::control::set_override(false);
    let result = analysis(full_meta(), 900);
    let text = render_report(&result, OutputFormat::Text).unwrap();
    for section in [
        "SEO Analysis: https://example.com/",
        "Category Scores",
        "Basic SEO",
        "Social Media",
        "Content Optimization",
        "Essential Tags (4/4 present, 4/4 optimal)",
        "Detailed Tag Analysis",
        "Search Result Preview",
        "Social Previews",
        "Facebook",
        "LinkedIn",
        "Recommendations",
    ] {
        assert!(text.contains(section), "missing {section:?} in:\n{text}");
    }
}

#[test]
fn test_render_report_plain_matches_plain_renderer() {
    let result = analysis(full_meta(), 900);
    assert_eq!(
        render_report(&result, OutputFormat::Plain).unwrap(),
        render_plain_report(&result)
    );
}

#[test]
fn test_render_history() {
    assert_eq!(render_history(&[]), "No analyses stored yet.\n");

    let result = analysis(full_meta(), 900);
    let stored = StoredAnalysis::from_result(7, 0, &result);
    let rendered = render_history(&[stored]);
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[1].contains("1970-01-01 00:00:00 UTC"));
    assert!(lines[1].contains(&format!("{}/100", result.score.overall)));
    assert!(lines[1].ends_with("https://example.com/"));
    assert!(lines[1].trim_start().starts_with('7'));
}
