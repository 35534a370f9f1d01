//! Report pipeline binary.
//!
//! Loads the run configuration, scans the input folder for export
//! documents, parses each in its own blocking task, then runs the two
//! report consumers in parallel over the shared immutable ledger set and
//! writes both markdown reports.

use std::path::PathBuf;
use std::sync::Arc;
use std::{fs, io};

use chrono::Local;
use tracing_subscriber::EnvFilter;

use timecard_engine::calculation::{build_phase_sheet, reconstruct_punch_schedule};
use timecard_engine::config::ReportConfig;
use timecard_engine::error::{TimecardError, TimecardResult};
use timecard_engine::models::JobLedger;
use timecard_engine::parser::parse_document;
use timecard_engine::render::{phase_sheet_markdown, punch_schedule_markdown};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(error) = run().await {
        tracing::error!(%error, "report generation failed");
        std::process::exit(1);
    }
}

async fn run() -> TimecardResult<()> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "timecard.yaml".to_string());
    let config = ReportConfig::load(&config_path)?;
    tracing::info!(input_dir = %config.input_dir.display(), "starting report run");

    let jobs = Arc::new(parse_all(&config).await?);
    tracing::info!(documents = jobs.len(), "all documents parsed");

    let today = Local::now().date_naive();
    let options = config.aggregator_options(today);
    let cutoff = config.cutoff(today);
    let pairing = config.pairing;

    // The two consumers share nothing mutable and run concurrently.
    let sheet_jobs = Arc::clone(&jobs);
    let sheet_task = tokio::task::spawn_blocking(move || {
        phase_sheet_markdown(&build_phase_sheet(&sheet_jobs, &options))
    });
    let punch_jobs = Arc::clone(&jobs);
    let punch_task = tokio::task::spawn_blocking(move || {
        punch_schedule_markdown(&reconstruct_punch_schedule(&punch_jobs, pairing, cutoff))
    });

    let (sheet_markdown, punch_markdown) = tokio::join!(sheet_task, punch_task);
    let sheet_markdown = sheet_markdown.map_err(task_failure)?;
    let punch_markdown = punch_markdown.map_err(task_failure)?;

    fs::write(&config.phase_sheet_path, sheet_markdown)?;
    tracing::info!(path = %config.phase_sheet_path.display(), "phase sheet written");
    fs::write(&config.time_table_path, punch_markdown)?;
    tracing::info!(path = %config.time_table_path.display(), "time table written");

    Ok(())
}

/// Scans the input folder and parses every `.csv` document, one blocking
/// task per file, joined before the consumers start.
async fn parse_all(config: &ReportConfig) -> TimecardResult<Vec<JobLedger>> {
    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(&config.input_dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) == Some("csv") {
            paths.push(path);
        }
    }
    paths.sort();

    let handles: Vec<_> = paths
        .into_iter()
        .map(|path| {
            tokio::task::spawn_blocking(move || -> TimecardResult<JobLedger> {
                tracing::debug!(path = %path.display(), "parsing document");
                let content = fs::read_to_string(&path)?;
                parse_document(&content)
            })
        })
        .collect();

    let mut jobs = Vec::with_capacity(handles.len());
    for handle in handles {
        jobs.push(handle.await.map_err(task_failure)??);
    }
    Ok(jobs)
}

fn task_failure(error: tokio::task::JoinError) -> TimecardError {
    TimecardError::Io(io::Error::other(error))
}
