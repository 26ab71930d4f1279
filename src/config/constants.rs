//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including timeouts, size limits, scoring thresholds and defaults.

/// Default SQLite database path.
pub const DB_PATH: &str = "./seo_analyzer.db";

// Network operation limits
/// Per-request timeout in seconds (covers connect, response and body read)
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent string for HTTP requests.
///
/// Identifies the analyzer honestly rather than impersonating a browser.
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (compatible; SEOAnalyzer/1.0; +https://seoanalyzer.com)";

/// Maximum URL length (2048 characters), matching common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;

// Response and body size limits
/// Maximum response body size in bytes (2MB)
/// Larger pages are rejected rather than partially analyzed
pub const MAX_RESPONSE_BODY_SIZE: usize = 2 * 1024 * 1024;

// Performance label thresholds
/// Pages loading in under this many milliseconds are labelled `Fast`
pub const FAST_LOAD_TIME_MS: u64 = 2000;
/// Pages loading in under this many milliseconds (and not `Fast`) are labelled `Average`
pub const AVERAGE_LOAD_TIME_MS: u64 = 4000;

// History and server defaults
/// Number of stored analyses returned when no limit is given
pub const DEFAULT_HISTORY_LIMIT: usize = 50;
/// Default port for the JSON API server
pub const DEFAULT_SERVER_PORT: u16 = 5000;

// Preview truncation (search result and social cards)
/// Search result descriptions longer than this are truncated
pub const SEARCH_PREVIEW_DESCRIPTION_CHARS: usize = 160;
/// Social card titles longer than this are truncated
pub const SOCIAL_PREVIEW_TITLE_CHARS: usize = 60;
/// Facebook card descriptions longer than this are truncated
pub const FACEBOOK_PREVIEW_DESCRIPTION_CHARS: usize = 80;
/// Twitter card descriptions longer than this are truncated
pub const TWITTER_PREVIEW_DESCRIPTION_CHARS: usize = 120;
/// Image URLs shown in social cards are truncated past this length
pub const SOCIAL_PREVIEW_IMAGE_CHARS: usize = 50;
