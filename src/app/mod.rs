//! Request-facing application helpers.
//!
//! This module provides URL validation and normalization used by both the CLI
//! and the JSON API before any network activity happens.

pub mod url;

// Re-export public API
pub use url::validate_and_normalize_url;
