//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, limits, thresholds)
//! - Library configuration and CLI option types
//! - The `clap` command-line definition used by the binary

mod cli;
mod constants;
mod types;

// Re-export all constants
pub use cli::{AnalyzeArgs, Cli, Command, HistoryArgs, ServeArgs};
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, OutputFormat};
