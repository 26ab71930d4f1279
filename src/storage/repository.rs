//! Analysis repositories.
//!
//! Persistence is reached through the `AnalysisRepository` trait so the
//! pipeline and the API server can be handed either backend: SQLite for the
//! CLI and server, in-memory for tests and ephemeral runs.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use log::{debug, error};
use sqlx::{Row, SqlitePool};

use crate::error_handling::DatabaseError;
use crate::models::AnalysisResult;
use crate::storage::models::{OpenGraphTags, StoredAnalysis, TwitterTags};
use crate::storage::{init_db_pool_with_path, run_migrations};

#[async_trait]
pub trait AnalysisRepository: Send + Sync {
    /// Stores `result`, assigning an id and an `analyzed_at` timestamp.
    async fn create(&self, result: &AnalysisResult) -> Result<StoredAnalysis, DatabaseError>;

    /// Up to `limit` analyses, newest first.
    async fn list(&self, limit: usize) -> Result<Vec<StoredAnalysis>, DatabaseError>;

    /// The most recent analysis of exactly `url`.
    async fn find_by_url(&self, url: &str) -> Result<Option<StoredAnalysis>, DatabaseError>;
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// SQLite-backed repository over the `seo_analyses` table.
#[derive(Clone)]
pub struct SqliteAnalysisRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteAnalysisRepository {
    /// Wraps an existing pool. Migrations must already have been applied.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    /// Opens (creating if needed) the database at `db_path` and applies migrations.
    pub async fn open(db_path: &std::path::Path) -> Result<Self, DatabaseError> {
        let pool = init_db_pool_with_path(db_path).await?;
        run_migrations(&pool).await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn row_to_stored(row: &sqlx::sqlite::SqliteRow) -> Result<StoredAnalysis, DatabaseError> {
    let id: i64 = row.try_get("id")?;
    let analyzed_at: i64 = row.try_get("analyzed_at")?;
    let result_json: String = row.try_get("result_json")?;
    let result: AnalysisResult = serde_json::from_str(&result_json)?;
    Ok(StoredAnalysis::from_result(id, analyzed_at, &result))
}

#[async_trait]
impl AnalysisRepository for SqliteAnalysisRepository {
    async fn create(&self, result: &AnalysisResult) -> Result<StoredAnalysis, DatabaseError> {
        let meta = &result.meta_tags;
        let analyzed_at = now_millis();
        let og_tags = serde_json::to_string(&OpenGraphTags::from(meta))?;
        let twitter_tags = serde_json::to_string(&TwitterTags::from(meta))?;
        let recommendations = serde_json::to_string(&result.recommendations)?;
        let result_json = serde_json::to_string(result)?;

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO seo_analyses (
                url, title, meta_description, meta_keywords, canonical_url,
                og_tags, twitter_tags, overall_score, recommendations,
                result_json, analyzed_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id",
        )
        .bind(&result.url)
        .bind(&meta.title)
        .bind(&meta.description)
        .bind(&meta.keywords)
        .bind(&meta.canonical)
        .bind(og_tags)
        .bind(twitter_tags)
        .bind(i64::from(result.score.overall))
        .bind(recommendations)
        .bind(result_json)
        .bind(analyzed_at)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            error!("Failed to insert analysis for {}: {e}", result.url);
            DatabaseError::SqlError(e)
        })?;

        debug!("Stored analysis {id} for {}", result.url);
        Ok(StoredAnalysis::from_result(id, analyzed_at, result))
    }

    async fn list(&self, limit: usize) -> Result<Vec<StoredAnalysis>, DatabaseError> {
        let rows = sqlx::query(
            "SELECT id, analyzed_at, result_json FROM seo_analyses
             ORDER BY analyzed_at DESC, id DESC
             LIMIT ?",
        )
        .bind(i64::try_from(limit).unwrap_or(i64::MAX))
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.iter().map(row_to_stored).collect()
    }

    async fn find_by_url(&self, url: &str) -> Result<Option<StoredAnalysis>, DatabaseError> {
        let row = sqlx::query(
            "SELECT id, analyzed_at, result_json FROM seo_analyses
             WHERE url = ?
             ORDER BY analyzed_at DESC, id DESC
             LIMIT 1",
        )
        .bind(url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.as_ref().map(row_to_stored).transpose()
    }
}

#[derive(Default)]
struct InMemoryState {
    next_id: i64,
    records: Vec<StoredAnalysis>,
}

/// Process-local repository. Each instance owns its own records and id counter.
#[derive(Default, Clone)]
pub struct InMemoryAnalysisRepository {
    state: Arc<Mutex<InMemoryState>>,
}

impl InMemoryAnalysisRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> std::sync::MutexGuard<'_, InMemoryState> {
        // A panic while holding the lock cannot leave the vec half-written.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Newest first; ids break ties between analyses stored in the same millisecond.
fn newest_first(a: &StoredAnalysis, b: &StoredAnalysis) -> std::cmp::Ordering {
    (b.analyzed_at, b.id).cmp(&(a.analyzed_at, a.id))
}

#[async_trait]
impl AnalysisRepository for InMemoryAnalysisRepository {
    async fn create(&self, result: &AnalysisResult) -> Result<StoredAnalysis, DatabaseError> {
        let mut state = self.state();
        state.next_id += 1;
        let stored = StoredAnalysis::from_result(state.next_id, now_millis(), result);
        state.records.push(stored.clone());
        Ok(stored)
    }

    async fn list(&self, limit: usize) -> Result<Vec<StoredAnalysis>, DatabaseError> {
        let mut records = self.state().records.clone();
        records.sort_by(newest_first);
        records.truncate(limit);
        Ok(records)
    }

    async fn find_by_url(&self, url: &str) -> Result<Option<StoredAnalysis>, DatabaseError> {
        Ok(self
            .state()
            .records
            .iter()
            .filter(|record| record.url == url)
            .min_by(|a, b| newest_first(a, b))
            .cloned())
    }
}
