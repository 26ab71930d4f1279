//! End-to-end analysis tests against a mock HTTP server.

#[path = "helpers.rs"]
mod helpers;

use httptest::{matchers::*, responders::*, Expectation, Server};
use tempfile::TempDir;

use helpers::{open_repository, serve_html, BARE_PAGE, FULL_PAGE};
use seo_analyzer::initialization::init_client;
use seo_analyzer::models::{CategoryStatus, RecommendationKind};
use seo_analyzer::{analyze_url, run_analysis, AnalysisError, AnalysisRepository, Config};

#[tokio::test]
async fn test_analyze_fully_tagged_page() {
    let server = serve_html("/", FULL_PAGE);
    let client = init_client(&Config::default()).unwrap();

    let result = analyze_url(&client, &server.url_str("/")).await.unwrap();

    assert_eq!(result.url, server.url_str("/"));
    assert_eq!(
        result.meta_tags.title.as_deref(),
        Some("Complete Guide to Search Engine Optimization Basics")
    );
    assert_eq!(result.score.meta_tags_points, 15);
    assert_eq!(result.score.social_tags_points, 12);
    assert_eq!(result.score.overall, 100);
    assert_eq!(
        result.score.categories.social_seo.status,
        CategoryStatus::Excellent
    );
    assert!(result.recommendations.is_empty());
}

#[tokio::test]
async fn test_analyze_bare_page() {
    let server = serve_html("/bare", BARE_PAGE);
    let client = init_client(&Config::default()).unwrap();

    let result = analyze_url(&client, &server.url_str("/bare")).await.unwrap();

    assert_eq!(result.score.overall, 0);
    assert_eq!(
        result.score.categories.basic_seo.status,
        CategoryStatus::Critical
    );
    let kinds: Vec<_> = result.recommendations.iter().map(|r| r.kind).collect();
    assert_eq!(
        kinds,
        vec![
            RecommendationKind::Error,
            RecommendationKind::Error,
            RecommendationKind::Error,
            RecommendationKind::Warning,
            RecommendationKind::Success,
            RecommendationKind::Warning,
        ]
    );
}

#[tokio::test]
async fn test_analyze_rejects_invalid_url_without_fetching() {
    let client = init_client(&Config::default()).unwrap();
    let err = analyze_url(&client, "ftp://example.com/file")
        .await
        .expect_err("ftp is not analyzed");
    assert!(err.is_validation());

    let err = analyze_url(&client, "   ").await.expect_err("empty input");
    assert!(err.is_validation());
}

#[tokio::test]
async fn test_analyze_reports_http_failure() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/gone"))
            .respond_with(status_code(500).insert_header("Content-Type", "text/html")),
    );
    let client = init_client(&Config::default()).unwrap();

    let err = analyze_url(&client, &server.url_str("/gone"))
        .await
        .expect_err("500 aborts the analysis");
    assert!(matches!(err, AnalysisError::HttpStatus { status: 500, .. }));
    assert!(!err.is_validation());
}

#[tokio::test]
async fn test_run_analysis_persists_result() {
    let server = serve_html("/", FULL_PAGE);
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("analyses.db");
    let config = Config {
        db_path: db_path.clone(),
        ..Default::default()
    };

    let result = run_analysis(&config, &server.url_str("/")).await.unwrap();

    let repository = open_repository(&db_path).await;
    let stored = repository.list(10).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].result, result);
}

#[tokio::test]
async fn test_run_analysis_without_persistence_creates_no_database() {
    let server = serve_html("/", FULL_PAGE);
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("analyses.db");
    let config = Config {
        db_path: db_path.clone(),
        persist: false,
        ..Default::default()
    };

    run_analysis(&config, &server.url_str("/")).await.unwrap();
    assert!(!db_path.exists());
}

#[tokio::test]
async fn test_failed_analysis_stores_nothing() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/feed")).respond_with(
            status_code(200)
                .insert_header("Content-Type", "application/rss+xml")
                .body("<rss/>"),
        ),
    );
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("analyses.db");
    let config = Config {
        db_path: db_path.clone(),
        ..Default::default()
    };

    let err = run_analysis(&config, &server.url_str("/feed"))
        .await
        .expect_err("non-HTML content is rejected");
    assert!(err.to_string().contains("does not return HTML content"));
    assert!(!db_path.exists());
}
