//! API server data structures.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::storage::{AnalysisRepository, InMemoryAnalysisRepository};

/// Shared state for the API server.
///
/// The repository is injected, so the same router serves SQLite-backed
/// history in production and in-memory history in tests.
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<reqwest::Client>,
    pub repository: Arc<dyn AnalysisRepository>,
}

impl AppState {
    pub fn new(client: Arc<reqwest::Client>, repository: Arc<dyn AnalysisRepository>) -> Self {
        Self { client, repository }
    }

    /// State backed by a fresh in-memory repository.
    pub fn in_memory(client: reqwest::Client) -> Self {
        Self::new(Arc::new(client), Arc::new(InMemoryAnalysisRepository::new()))
    }
}

/// Body of `POST /api/analyze`.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub url: String,
}

/// Query of `GET /api/analyses`.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub limit: Option<usize>,
}

/// Query of `GET /api/analyses/lookup`.
#[derive(Debug, Deserialize)]
pub struct LookupQuery {
    pub url: String,
}

/// JSON error body. `errors` is only present on validation failures.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl ErrorResponse {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            errors: None,
        }
    }

    pub fn validation(errors: Vec<String>) -> Self {
        Self {
            message: "Validation error".to_string(),
            errors: Some(errors),
        }
    }
}
