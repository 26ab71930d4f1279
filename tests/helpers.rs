// Shared test helpers for database setup and mock pages.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::path::Path;
use std::sync::Arc;

use httptest::{matchers::*, responders::*, Expectation, Server};
use sqlx::SqlitePool;

use seo_analyzer::{run_migrations, SqliteAnalysisRepository};

/// A page with every tag the analyzer looks at.
#[allow(dead_code)] // Used by other test files
pub const FULL_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>Complete Guide to Search Engine Optimization Basics</title>
  <meta name="description" content="Learn how title tags, meta descriptions, canonical links and social cards work together so search engines and social networks present your pages well.">
  <meta name="keywords" content="seo, meta tags, open graph">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <meta name="robots" content="index, follow">
  <link rel="canonical" href="https://example.com/seo-guide">
  <meta property="og:title" content="The SEO Basics Guide">
  <meta property="og:description" content="Everything about meta tags">
  <meta property="og:image" content="https://example.com/og.png">
  <meta property="og:url" content="https://example.com/seo-guide">
  <meta property="og:type" content="article">
  <meta name="twitter:card" content="summary_large_image">
  <meta name="twitter:title" content="SEO Basics on Twitter">
  <meta name="twitter:description" content="Short guide to meta tags">
  <meta name="twitter:image" content="https://example.com/tw.png">
  <meta name="twitter:site" content="@example">
</head>
<body><h1>SEO Basics</h1></body>
</html>"#;

/// A page with no SEO tags at all.
#[allow(dead_code)] // Used by other test files
pub const BARE_PAGE: &str = "<html><body><p>Nothing to see</p></body></html>";

/// Starts a mock server that serves `html` at `path` (any number of times).
#[allow(dead_code)] // Used by other test files
pub fn serve_html(path: &'static str, html: &'static str) -> Server {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", path))
            .times(..)
            .respond_with(
                status_code(200)
                    .insert_header("Content-Type", "text/html; charset=utf-8")
                    .body(html),
            ),
    );
    server
}

/// Creates a test database pool with migrations applied.
/// Uses an in-memory database for fast test execution.
#[allow(dead_code)] // Used by other test files
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePool::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database pool");
    run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    pool
}

/// SQLite repository over a fresh in-memory database.
#[allow(dead_code)] // Used by other test files
pub async fn create_test_repository() -> SqliteAnalysisRepository {
    SqliteAnalysisRepository::new(Arc::new(create_test_pool().await))
}

/// SQLite repository over a database file, created if missing.
#[allow(dead_code)] // Used by other test files
pub async fn open_repository(db_path: &Path) -> SqliteAnalysisRepository {
    SqliteAnalysisRepository::open(db_path)
        .await
        .expect("Failed to open test database")
}
