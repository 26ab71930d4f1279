//! Repository tests against on-disk SQLite databases.

#[path = "helpers.rs"]
mod helpers;

use sqlx::Row;
use tempfile::TempDir;

use helpers::{create_test_repository, open_repository};
use seo_analyzer::models::{AnalysisResult, MetaTagSet};
use seo_analyzer::scoring::evaluate;
use seo_analyzer::AnalysisRepository;

fn result_for(url: &str, meta: MetaTagSet) -> AnalysisResult {
    let (score, recommendations) = evaluate(&meta, 800);
    AnalysisResult {
        url: url.to_string(),
        meta_tags: meta,
        score,
        recommendations,
        load_time_ms: 800,
    }
}

#[tokio::test]
async fn test_analyses_survive_reopening_the_database() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("history.db");

    let first = {
        let repository = open_repository(&db_path).await;
        repository
            .create(&result_for("https://a.test/", MetaTagSet::default()))
            .await
            .unwrap()
    };

    let repository = open_repository(&db_path).await;
    let listed = repository.list(50).await.unwrap();
    assert_eq!(listed, vec![first]);
}

#[tokio::test]
async fn test_database_uses_wal_mode() {
    let temp_dir = TempDir::new().unwrap();
    let repository = open_repository(&temp_dir.path().join("wal.db")).await;

    let row = sqlx::query("PRAGMA journal_mode")
        .fetch_one(repository.pool())
        .await
        .unwrap();
    let mode: String = row.get(0);
    assert_eq!(mode.to_lowercase(), "wal");
}

#[tokio::test]
async fn test_stored_columns_mirror_the_result() {
    let repository = create_test_repository().await;
    let meta = MetaTagSet {
        title: Some("Title".to_string()),
        description: Some("Description".to_string()),
        keywords: Some("a, b".to_string()),
        canonical: Some("https://a.test/".to_string()),
        twitter_card: Some("summary".to_string()),
        ..Default::default()
    };
    let result = result_for("https://a.test/", meta);
    repository.create(&result).await.unwrap();

    let row = sqlx::query(
        "SELECT url, title, meta_description, meta_keywords, canonical_url,
                og_tags, twitter_tags, overall_score, recommendations
         FROM seo_analyses",
    )
    .fetch_one(repository.pool())
    .await
    .unwrap();

    assert_eq!(row.get::<String, _>("url"), "https://a.test/");
    assert_eq!(row.get::<Option<String>, _>("title").as_deref(), Some("Title"));
    assert_eq!(
        row.get::<Option<String>, _>("meta_description").as_deref(),
        Some("Description")
    );
    assert_eq!(row.get::<Option<String>, _>("meta_keywords").as_deref(), Some("a, b"));
    assert_eq!(
        row.get::<Option<String>, _>("canonical_url").as_deref(),
        Some("https://a.test/")
    );
    assert_eq!(row.get::<String, _>("og_tags"), "{}");
    assert_eq!(row.get::<String, _>("twitter_tags"), r#"{"card":"summary"}"#);
    assert_eq!(
        row.get::<i64, _>("overall_score"),
        i64::from(result.score.overall)
    );
    let recommendations: serde_json::Value =
        serde_json::from_str(&row.get::<String, _>("recommendations")).unwrap();
    assert_eq!(recommendations, serde_json::to_value(&result.recommendations).unwrap());
}

#[tokio::test]
async fn test_list_limit_zero_returns_nothing() {
    let repository = create_test_repository().await;
    repository
        .create(&result_for("https://a.test/", MetaTagSet::default()))
        .await
        .unwrap();
    assert!(repository.list(0).await.unwrap().is_empty());
}
