//! Error type definitions.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error types for database operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Error creating the database file.
    #[error("Database file creation error: {0}")]
    FileCreationError(String),

    /// SQL execution error.
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),

    /// Schema migration error.
    #[error("Migration error: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),

    /// A stored JSON column could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Categories of transport-level fetch failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum FetchErrorKind {
    Builder,
    Redirect,
    Timeout,
    Connect,
    Request,
    Body,
    Decode,
    Other,
}

impl FetchErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchErrorKind::Builder => "request builder error",
            FetchErrorKind::Redirect => "redirect error",
            FetchErrorKind::Timeout => "timeout",
            FetchErrorKind::Connect => "connection error",
            FetchErrorKind::Request => "request error",
            FetchErrorKind::Body => "body error",
            FetchErrorKind::Decode => "decode error",
            FetchErrorKind::Other => "network error",
        }
    }
}

impl std::fmt::Display for FetchErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failure that aborts an analysis before a score is produced.
///
/// The display string is the single terminal message reported to the caller.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The URL could not be parsed or has no host.
    #[error("Invalid URL format: {0}")]
    InvalidUrl(String),

    /// Only http and https are analyzed.
    #[error("Only HTTP and HTTPS protocols are supported (got {0})")]
    UnsupportedScheme(String),

    /// The URL exceeds `MAX_URL_LENGTH`.
    #[error("URL exceeds maximum length ({0} characters)")]
    UrlTooLong(usize),

    /// Transport failure (DNS, connect, TLS, redirect loop, ...).
    #[error("Failed to fetch URL: {kind}: {message}")]
    Fetch {
        kind: FetchErrorKind,
        message: String,
    },

    /// The server answered with a non-2xx status.
    #[error("Failed to fetch URL: HTTP {status}: {reason}")]
    HttpStatus { status: u16, reason: String },

    /// The response is not an HTML document.
    #[error("Failed to fetch URL: URL does not return HTML content")]
    NotHtml { content_type: String },

    /// The response body exceeds `MAX_RESPONSE_BODY_SIZE`.
    #[error("Failed to fetch URL: response body exceeds {0} bytes")]
    BodyTooLarge(usize),

    /// The bounded wait elapsed.
    #[error("Failed to fetch URL: request timed out")]
    Timeout,
}

impl AnalysisError {
    /// True for failures caused by the input URL itself rather than the fetch.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AnalysisError::InvalidUrl(_)
                | AnalysisError::UnsupportedScheme(_)
                | AnalysisError::UrlTooLong(_)
        )
    }
}

impl From<ReqwestError> for AnalysisError {
    fn from(error: ReqwestError) -> Self {
        match super::categorize_reqwest_error(&error) {
            FetchErrorKind::Timeout => AnalysisError::Timeout,
            kind => AnalysisError::Fetch {
                kind,
                message: error.to_string(),
            },
        }
    }
}
