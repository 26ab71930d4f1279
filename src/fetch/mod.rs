//! Page retrieval.
//!
//! Fetches a single page, enforcing the preconditions the engine relies on:
//! a 2xx status, an HTML content type and a bounded body size. The client's
//! timeout is the bounded wait; nothing here retries. Any failure is returned
//! as one terminal `AnalysisError` and no partial page is ever produced.

use std::time::Instant;

use log::{debug, warn};
use reqwest::header::CONTENT_TYPE;

use crate::config::MAX_RESPONSE_BODY_SIZE;
use crate::error_handling::AnalysisError;

/// A successfully fetched HTML page.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// URL after redirects
    pub final_url: String,
    /// HTTP status code (always 2xx)
    pub status: u16,
    /// Raw `Content-Type` header value
    pub content_type: String,
    /// Decoded response body
    pub body: String,
    /// Milliseconds from sending the request to reading the full body
    pub load_time_ms: u64,
}

/// Fetches `url` and returns its HTML body and load time.
///
/// # Errors
///
/// - `AnalysisError::Timeout` / `AnalysisError::Fetch` for transport failures
/// - `AnalysisError::HttpStatus` for non-2xx responses
/// - `AnalysisError::NotHtml` when the content type is missing or not `text/html`
/// - `AnalysisError::BodyTooLarge` when the body exceeds `MAX_RESPONSE_BODY_SIZE`
pub async fn fetch_page(client: &reqwest::Client, url: &str) -> Result<FetchedPage, AnalysisError> {
    let start = Instant::now();
    debug!("Sending request to {url}");

    let mut response = client.get(url).send().await.map_err(|e| {
        warn!("Request to {url} failed: {e}");
        AnalysisError::from(e)
    })?;

    let status = response.status();
    let final_url = response.url().to_string();
    if final_url != url {
        debug!("Followed redirects from {url} to {final_url}");
    }

    if !status.is_success() {
        warn!("{url} returned HTTP {status}");
        return Err(AnalysisError::HttpStatus {
            status: status.as_u16(),
            reason: status
                .canonical_reason()
                .unwrap_or("Unknown Status Code")
                .to_string(),
        });
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|ct| ct.to_str().ok())
        .unwrap_or("")
        .to_string();
    if !content_type.to_lowercase().contains("text/html") {
        warn!("{url} returned non-HTML content type {content_type:?}");
        return Err(AnalysisError::NotHtml { content_type });
    }

    if let Some(length) = response.content_length() {
        if length as usize > MAX_RESPONSE_BODY_SIZE {
            return Err(AnalysisError::BodyTooLarge(MAX_RESPONSE_BODY_SIZE));
        }
    }

    // Read incrementally so a missing or lying Content-Length cannot blow the limit.
    let mut bytes: Vec<u8> = Vec::new();
    while let Some(chunk) = response.chunk().await.map_err(AnalysisError::from)? {
        if bytes.len() + chunk.len() > MAX_RESPONSE_BODY_SIZE {
            return Err(AnalysisError::BodyTooLarge(MAX_RESPONSE_BODY_SIZE));
        }
        bytes.extend_from_slice(&chunk);
    }
    let body = String::from_utf8_lossy(&bytes).into_owned();
    let load_time_ms = start.elapsed().as_millis() as u64;

    debug!(
        "Fetched {final_url}: status {status}, {} bytes in {load_time_ms} ms",
        bytes.len()
    );

    Ok(FetchedPage {
        final_url,
        status: status.as_u16(),
        content_type,
        body,
        load_time_ms,
    })
}
