//! API request handlers.

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::{error, info, warn};

use super::types::{AnalyzeRequest, AppState, ErrorResponse, ListQuery, LookupQuery};
use crate::app::validate_and_normalize_url;
use crate::config::DEFAULT_HISTORY_LIMIT;
use crate::run::analyze_url;

fn error_response(status: StatusCode, body: ErrorResponse) -> Response {
    (status, Json(body)).into_response()
}

/// Analyzes the posted URL, stores the result and returns it.
pub async fn analyze_handler(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            return error_response(
                StatusCode::BAD_REQUEST,
                ErrorResponse::validation(vec![rejection.body_text()]),
            )
        }
    };

    let result = match analyze_url(&state.client, &request.url).await {
        Ok(result) => result,
        Err(e) if e.is_validation() => {
            info!("Rejected analysis request for {:?}: {e}", request.url);
            return error_response(
                StatusCode::BAD_REQUEST,
                ErrorResponse::validation(vec![e.to_string()]),
            );
        }
        Err(e) => {
            warn!("Analysis of {} failed: {e}", request.url);
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::message(format!("Failed to analyze URL: {e}")),
            );
        }
    };

    if let Err(e) = state.repository.create(&result).await {
        error!("Failed to store analysis for {}: {e}", result.url);
        return error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorResponse::message(format!("Failed to store analysis: {e}")),
        );
    }

    Json(result).into_response()
}

/// Lists stored analyses, newest first.
pub async fn list_handler(State(state): State<AppState>, Query(query): Query<ListQuery>) -> Response {
    let limit = query.limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
    match state.repository.list(limit).await {
        Ok(analyses) => Json(analyses).into_response(),
        Err(e) => {
            error!("Failed to list analyses: {e}");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::message("Failed to fetch analyses"),
            )
        }
    }
}

/// Returns the most recent analysis of a URL.
///
/// The URL is normalized the same way `POST /api/analyze` normalizes it, so
/// `example.com` finds the analysis stored as `https://example.com/`.
pub async fn lookup_handler(
    State(state): State<AppState>,
    Query(query): Query<LookupQuery>,
) -> Response {
    let url = validate_and_normalize_url(&query.url).unwrap_or(query.url);
    match state.repository.find_by_url(&url).await {
        Ok(Some(analysis)) => Json(analysis).into_response(),
        Ok(None) => error_response(
            StatusCode::NOT_FOUND,
            ErrorResponse::message(format!("No analysis found for {url}")),
        ),
        Err(e) => {
            error!("Failed to look up analysis for {url}: {e}");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::message("Failed to fetch analyses"),
            )
        }
    }
}
