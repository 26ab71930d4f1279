//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `seo_analyzer` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output
//!
//! All core functionality is implemented in the library crate.

use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use seo_analyzer::config::{AnalyzeArgs, Cli, Command, HistoryArgs, ServeArgs};
use seo_analyzer::initialization::{init_client, init_logger_with};
use seo_analyzer::report::{render_history, render_report};
use seo_analyzer::server::{start_server, AppState};
use seo_analyzer::storage::AnalysisRepository;
use seo_analyzer::{run_analysis, InMemoryAnalysisRepository, SqliteAnalysisRepository};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists), so RUST_LOG can live there
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let cli = Cli::parse();

    init_logger_with(cli.log_level.clone().into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    let outcome = match &cli.command {
        Command::Analyze(args) => analyze(&cli, args).await,
        Command::History(args) => history(&cli, args).await,
        Command::Serve(args) => serve(&cli, args).await,
    };

    if let Err(e) = outcome {
        eprintln!("seo_analyzer error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}

async fn analyze(cli: &Cli, args: &AnalyzeArgs) -> Result<()> {
    let config = cli.analyze_config(args);
    let result = run_analysis(&config, &args.url).await?;
    let rendered = render_report(&result, args.format).context("Failed to render report")?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            println!("Report saved to {}", path.display());
        }
        None => print!("{rendered}"),
    }
    if config.persist {
        println!("Results saved in {}", config.db_path.display());
    }
    Ok(())
}

async fn history(cli: &Cli, args: &HistoryArgs) -> Result<()> {
    let repository = SqliteAnalysisRepository::open(&cli.db_path)
        .await
        .context("Failed to open analysis database")?;
    let analyses = repository
        .list(args.limit)
        .await
        .context("Failed to query analysis history")?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&analyses).context("Failed to serialize history")?
        );
    } else {
        print!("{}", render_history(&analyses));
    }
    Ok(())
}

async fn serve(cli: &Cli, args: &ServeArgs) -> Result<()> {
    let config = cli.serve_config(args);
    let client = init_client(&config).context("Failed to initialize HTTP client")?;

    let repository: Arc<dyn AnalysisRepository> = if config.persist {
        Arc::new(
            SqliteAnalysisRepository::open(&config.db_path)
                .await
                .context("Failed to open analysis database")?,
        )
    } else {
        log::info!("Keeping analyses in memory; they are lost when the server stops");
        Arc::new(InMemoryAnalysisRepository::new())
    };

    start_server(&args.host, args.port, AppState::new(client, repository)).await
}
