//! Command line entry point for marker-scan.
//!
//! # Usage
//!
//! ```bash
//! # Scan the last 30 days (today included)
//! cargo run -- search
//!
//! # Scan an explicit window (both bounds inclusive)
//! cargo run -- search --date-after=2025-01-01 --date-before=2025-02-01
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or `DB_*` components): PostgreSQL connection string
//!
//! See [`marker_scan::config`] for the optional ones.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::postgres::PgPoolOptions;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::{Duration, Instant};

use marker_scan::application::services::{BatchScanner, Report, ReportBuilder, ScanBatch, ScanOutcome};
use marker_scan::config::{self, Config};
use marker_scan::domain::entities::ScanRequest;
use marker_scan::domain::matcher::MarkerMatcher;
use marker_scan::domain::repositories::ContentRepository;
use marker_scan::domain::validation::validate_date_range;
use marker_scan::error::RepositoryError;
use marker_scan::infrastructure::persistence::PgContentRepository;
use marker_scan::infrastructure::retry::RetryingContentRepository;
use marker_scan::telemetry;

/// Finds published content carrying the read-more block markers.
#[derive(Parser)]
#[command(name = "marker-scan")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search published items containing a marker within a date range
    Search {
        /// Upper date limit, inclusive (YYYY-MM-DD). Defaults to today.
        #[arg(long, value_name = "YYYY-MM-DD")]
        date_before: Option<String>,

        /// Lower date limit, inclusive (YYYY-MM-DD). Defaults to 29 days before today.
        #[arg(long, value_name = "YYYY-MM-DD")]
        date_after: Option<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Search {
            date_before,
            date_after,
        } => handle_search(date_before, date_after).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// Validates the window, scans, and prints progress and the report.
///
/// Date validation runs before configuration is read or a connection is
/// opened, so invalid input never reaches the database.
async fn handle_search(date_before: Option<String>, date_after: Option<String>) -> Result<()> {
    let started = Instant::now();
    let explicit_window = date_before.is_some() || date_after.is_some();

    let today = Utc::now().date_naive();
    let request = validate_date_range(date_before.as_deref(), date_after.as_deref(), today)?;

    let config = config::load_from_env()?;
    telemetry::init(&config.log_level, &config.log_format);
    config.print_summary();

    println!("{}", describe_window(&request, explicit_window));

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    let repository = PgContentRepository::new(Arc::new(pool), config.site_url.clone());

    let outcome = match config.retry_policy() {
        Some(policy) => {
            scan(RetryingContentRepository::new(repository, policy), &config, &request).await
        }
        None => scan(repository, &config, &request).await,
    }
    .context("Scan aborted")?;

    let report = ReportBuilder::build(outcome.matches, &outcome.progress, started.elapsed());
    print_report(&report);

    Ok(())
}

async fn scan<R: ContentRepository>(
    repository: R,
    config: &Config,
    request: &ScanRequest,
) -> Result<ScanOutcome, RepositoryError> {
    let scanner = BatchScanner::new(Arc::new(repository), MarkerMatcher::default())
        .with_content_type(config.content_type.clone())
        .with_date_format(config.date_display_format.clone());

    scanner.run(request, print_batch).await
}

/// Line announcing the window about to be scanned.
fn describe_window(request: &ScanRequest, explicit: bool) -> String {
    if explicit {
        format!(
            "Searching items from {} to {} in batches of {}...",
            request.date_after(),
            request.date_before(),
            request.page_size()
        )
    } else {
        format!(
            "Searching items from the last 30 days ({} to {}) in batches of {}...",
            request.date_after(),
            request.date_before(),
            request.page_size()
        )
    }
}

fn batch_line(batch: &ScanBatch) -> String {
    format!(
        "Batch complete: {} items processed, {} matches found (running totals: {} processed, {} matches)",
        batch.progress.current_batch_size,
        batch.batch_matched,
        batch.progress.total_processed,
        batch.progress.total_matched
    )
}

fn print_batch(batch: &ScanBatch) {
    println!("{}", batch_line(batch));
}

fn print_report(report: &Report) {
    match report {
        Report::NoMatches { .. } => print!("{report}"),
        Report::Matches { .. } => print!("{} {report}", "Success:".green().bold()),
    }
}
