//! JSON API tests: the router is bound to an ephemeral port and driven with reqwest.

#[path = "helpers.rs"]
mod helpers;

use std::net::SocketAddr;
use std::sync::Arc;

use serde_json::{json, Value};
use tokio::net::TcpListener;

use helpers::{create_test_repository, serve_html, BARE_PAGE, FULL_PAGE};
use seo_analyzer::server::{serve, AppState};
use seo_analyzer::{AnalysisResult, InMemoryAnalysisRepository, StoredAnalysis};

async fn spawn_api(state: AppState) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = serve(listener, state).await;
    });
    addr
}

fn in_memory_state() -> AppState {
    AppState::new(
        Arc::new(reqwest::Client::new()),
        Arc::new(InMemoryAnalysisRepository::new()),
    )
}

#[tokio::test]
async fn test_analyze_returns_and_stores_result() {
    let page = serve_html("/", FULL_PAGE);
    let addr = spawn_api(in_memory_state()).await;
    let http = reqwest::Client::new();

    let response = http
        .post(format!("http://{addr}/api/analyze"))
        .json(&json!({ "url": page.url_str("/") }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let result: AnalysisResult = response.json().await.unwrap();
    assert_eq!(result.score.overall, 100);

    let listed: Vec<StoredAnalysis> = http
        .get(format!("http://{addr}/api/analyses"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].result, result);
}

#[tokio::test]
async fn test_analyze_response_uses_camel_case_wire_names() {
    let page = serve_html("/", BARE_PAGE);
    let addr = spawn_api(in_memory_state()).await;

    let body: Value = reqwest::Client::new()
        .post(format!("http://{addr}/api/analyze"))
        .json(&json!({ "url": page.url_str("/") }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert!(body["loadTime"].is_u64());
    assert_eq!(body["metaTags"], json!({}));
    assert_eq!(body["score"]["metaTagsPoints"], 0);
    assert_eq!(body["score"]["categories"]["basicSEO"]["status"], "critical");
    assert_eq!(body["score"]["categories"]["basicSEO"]["maxScore"], 10);
    assert_eq!(body["recommendations"][0]["relatedField"], "title");
    assert_eq!(body["recommendations"][0]["kind"], "error");
    assert_eq!(body["recommendations"][0]["priority"], "high");
}

#[tokio::test]
async fn test_analyze_invalid_url_is_a_validation_error() {
    let addr = spawn_api(in_memory_state()).await;

    let response = reqwest::Client::new()
        .post(format!("http://{addr}/api/analyze"))
        .json(&json!({ "url": "ftp://example.com/" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Validation error");
    assert_eq!(body["errors"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_analyze_missing_url_field_is_a_validation_error() {
    let addr = spawn_api(in_memory_state()).await;

    let response = reqwest::Client::new()
        .post(format!("http://{addr}/api/analyze"))
        .json(&json!({ "address": "https://example.com/" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Validation error");
}

#[tokio::test]
async fn test_analyze_fetch_failure_is_a_server_error() {
    let page = httptest::Server::run();
    page.expect(
        httptest::Expectation::matching(httptest::matchers::request::method_path("GET", "/"))
            .respond_with(httptest::responders::status_code(404)),
    );
    let addr = spawn_api(in_memory_state()).await;

    let response = reqwest::Client::new()
        .post(format!("http://{addr}/api/analyze"))
        .json(&json!({ "url": page.url_str("/") }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body["message"],
        "Failed to analyze URL: Failed to fetch URL: HTTP 404: Not Found"
    );
    assert!(body.get("errors").is_none());

    let listed: Vec<Value> = reqwest::get(format!("http://{addr}/api/analyses"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn test_list_limit_and_lookup_with_sqlite_repository() {
    let first = serve_html("/one", BARE_PAGE);
    let second = serve_html("/two", FULL_PAGE);
    let state = AppState::new(
        Arc::new(reqwest::Client::new()),
        Arc::new(create_test_repository().await),
    );
    let addr = spawn_api(state).await;
    let http = reqwest::Client::new();

    for url in [first.url_str("/one"), second.url_str("/two")] {
        let status = http
            .post(format!("http://{addr}/api/analyze"))
            .json(&json!({ "url": url }))
            .send()
            .await
            .unwrap()
            .status();
        assert_eq!(status, 200);
    }

    let listed: Vec<StoredAnalysis> = http
        .get(format!("http://{addr}/api/analyses?limit=1"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].url, second.url_str("/two"));

    let found: StoredAnalysis = http
        .get(format!("http://{addr}/api/analyses/lookup"))
        .query(&[("url", first.url_str("/one"))])
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(found.url, first.url_str("/one"));
    assert_eq!(found.overall_score, 0);

    let missing = http
        .get(format!("http://{addr}/api/analyses/lookup"))
        .query(&[("url", "https://never-analyzed.test/")])
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), 404);
}
