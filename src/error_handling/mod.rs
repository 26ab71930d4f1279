//! Error handling.
//!
//! This module provides:
//! - Error type definitions for analysis, database and initialization failures
//! - Categorization of transport errors from `reqwest`
//!
//! The scoring engine is infallible; every error here belongs to a stage that
//! runs before it (URL validation, fetch) or after it (persistence).

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use types::{AnalysisError, DatabaseError, FetchErrorKind, InitializationError};
