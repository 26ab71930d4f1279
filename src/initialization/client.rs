//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::Config;
use crate::error_handling::InitializationError;

/// Maximum redirect hops followed before the fetch fails.
const MAX_REDIRECT_HOPS: usize = 10;

/// Initializes the HTTP client used to fetch pages.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the config
/// - A total request timeout from the config (the bounded wait for a page)
/// - Redirect following enabled (up to 10 hops)
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECT_HOPS))
        .build()?;
    Ok(Arc::new(client))
}
