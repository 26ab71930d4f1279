//! JSON API server.
//!
//! Provides three endpoints:
//! - `POST /api/analyze` - analyze a URL, store and return the result
//! - `GET /api/analyses` - stored analyses, newest first (`?limit=N`)
//! - `GET /api/analyses/lookup` - most recent analysis of a URL (`?url=...`)

mod handlers;
mod types;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;

use handlers::{analyze_handler, list_handler, lookup_handler};
pub use types::{AnalyzeRequest, AppState, ErrorResponse, ListQuery, LookupQuery};

/// Builds the API router over `state`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/analyze", post(analyze_handler))
        .route("/api/analyses", get(list_handler))
        .route("/api/analyses/lookup", get(lookup_handler))
        .with_state(state)
}

/// Serves the API on an already-bound listener until the server fails.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<(), anyhow::Error> {
    axum::serve(listener, router(state))
        .await
        .map_err(|e| anyhow::anyhow!("API server error: {}", e))
}

/// Binds `host:port` and serves the API.
pub async fn start_server(host: &str, port: u16, state: AppState) -> Result<(), anyhow::Error> {
    let listener = TcpListener::bind(format!("{host}:{port}"))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind API server to {}:{}: {}", host, port, e))?;

    log::info!("API server listening on http://{host}:{port}/");
    log::info!("  - Analyze: POST http://{host}:{port}/api/analyze");
    log::info!("  - History: GET http://{host}:{port}/api/analyses");

    serve(listener, state).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_start_server_reports_bind_failure() {
        let occupied = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = occupied.local_addr().unwrap().port();

        let err = start_server("127.0.0.1", port, AppState::in_memory(Default::default()))
            .await
            .expect_err("port is already bound");
        assert!(err.to_string().contains("Failed to bind API server"));
    }
}
