//! URL validation and normalization utilities.

use log::warn;

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::AnalysisError;

/// Validates and normalizes a URL.
///
/// Trims surrounding whitespace and adds an https:// prefix if no scheme is
/// given, then validates that the URL is syntactically valid, has a host, and
/// uses the http/https scheme. Rejects URLs longer than `MAX_URL_LENGTH`.
///
/// # Arguments
///
/// * `url` - The URL string to validate and normalize
///
/// # Returns
///
/// The parser's serialization of the URL (a bare origin gains a trailing `/`),
/// or the validation error to report to the caller.
pub fn validate_and_normalize_url(url: &str) -> Result<String, AnalysisError> {
    let url = url.trim();

    if url.is_empty() {
        return Err(AnalysisError::InvalidUrl("URL is empty".to_string()));
    }

    if url.len() > MAX_URL_LENGTH {
        warn!(
            "Rejecting URL exceeding maximum length ({} > {}): {}...",
            url.len(),
            MAX_URL_LENGTH,
            url.chars().take(50).collect::<String>()
        );
        return Err(AnalysisError::UrlTooLong(url.len()));
    }

    // Default to https only when no scheme is present; "ftp://host" stays ftp.
    let normalized = if url.contains("://") {
        url.to_string()
    } else {
        format!("https://{url}")
    };

    let parsed = url::Url::parse(&normalized).map_err(|e| {
        warn!("Rejecting invalid URL {url}: {e}");
        AnalysisError::InvalidUrl(url.to_string())
    })?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            warn!("Rejecting unsupported scheme for URL: {url}");
            return Err(AnalysisError::UnsupportedScheme(other.to_string()));
        }
    }

    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(AnalysisError::InvalidUrl(url.to_string()));
    }

    let serialized = parsed.to_string();
    if serialized.len() > MAX_URL_LENGTH {
        return Err(AnalysisError::UrlTooLong(serialized.len()));
    }
    Ok(serialized)
}
