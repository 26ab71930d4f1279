//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::constants::{
    DB_PATH, DEFAULT_HISTORY_LIMIT, DEFAULT_SERVER_PORT, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};
use crate::config::types::{Config, LogFormat, LogLevel, OutputFormat};

/// Analyze a web page's SEO meta tags and score them.
#[derive(Debug, Parser)]
#[command(name = "seo_analyzer", version, about)]
pub struct Cli {
    /// Log level: error/warn/info/debug/trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, global = true)]
    pub log_format: LogFormat,

    /// SQLite database path
    #[arg(long, default_value = DB_PATH, global = true)]
    pub db_path: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch and score a single URL
    Analyze(AnalyzeArgs),
    /// List stored analyses, newest first
    History(HistoryArgs),
    /// Run the JSON API server
    Serve(ServeArgs),
}

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// URL to analyze (`https://` is assumed when no scheme is given)
    pub url: String,

    /// Output format: text|plain|json
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the report to this file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Do not store the analysis in the database
    #[arg(long)]
    pub no_save: bool,
}

#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// Maximum number of analyses to list
    #[arg(long, default_value_t = DEFAULT_HISTORY_LIMIT)]
    pub limit: usize,

    /// Print the stored analyses as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(long, default_value_t = DEFAULT_SERVER_PORT)]
    pub port: u16,

    /// HTTP request timeout in seconds for analyzed pages
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Keep analyses in memory instead of the database
    #[arg(long)]
    pub in_memory: bool,
}

impl Cli {
    /// Library configuration for an `analyze` run.
    pub fn analyze_config(&self, args: &AnalyzeArgs) -> Config {
        Config {
            log_level: self.log_level.clone(),
            log_format: self.log_format.clone(),
            db_path: self.db_path.clone(),
            timeout_seconds: args.timeout_seconds,
            user_agent: args.user_agent.clone(),
            persist: !args.no_save,
        }
    }

    /// Library configuration for the API server.
    pub fn serve_config(&self, args: &ServeArgs) -> Config {
        Config {
            log_level: self.log_level.clone(),
            log_format: self.log_format.clone(),
            db_path: self.db_path.clone(),
            timeout_seconds: args.timeout_seconds,
            user_agent: args.user_agent.clone(),
            persist: !args.in_memory,
        }
    }
}
