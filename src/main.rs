use std::path::PathBuf;

use anyhow::{ensure, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use exclusions_extractor::core::splitter::{point_exclusions, state_exclusions};
use exclusions_extractor::core::Processor;
use exclusions_extractor::models::{PointExclusion, StateExclusion};
use exclusions_extractor::storage::{
    point_exclusions_blob_name, state_exclusions_blob_name, BlobContainerClient,
};
use exclusions_extractor::utils::{default_workbook_path, is_xlsx_file, to_csv_bytes};

/// Parse the Rt review exclusions workbook and upload the point/state
/// exclusion CSVs to blob storage.
#[derive(Parser, Debug)]
struct Args {
    /// Report date the exclusions file corresponds to (YYYY-MM-DD).
    /// Defaults to today.
    #[arg(short = 'd', long)]
    date: Option<NaiveDate>,

    /// Path to the exclusions workbook. Defaults to
    /// ~/Downloads/Rt_Review_<YYYYMMDD>.xlsx built from the report date.
    #[arg(short = 'f', long)]
    file: Option<PathBuf>,

    /// Overwrite existing blobs for this report date.
    #[arg(long)]
    overwrite_blobs: bool,
}

fn main() -> Result<()> {
    fmt::Subscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let args = Args::parse();

    let report_date = args.date.unwrap_or_else(|| Local::now().date_naive());
    let file_path = match args.file {
        Some(path) => path,
        None => default_workbook_path(report_date)?,
    };
    ensure!(
        file_path.is_file(),
        "exclusions file not found: {}",
        file_path.display()
    );
    if !is_xlsx_file(&file_path) {
        warn!(file = %file_path.display(), "file does not look like an .xlsx workbook");
    }
    info!(file = %file_path.display(), %report_date, "parsing exclusions workbook");

    let combined = Processor::new(report_date).process_workbook(&file_path)?;
    if combined.is_empty() {
        info!(
            file = %file_path.display(),
            "no data found in the exclusions file after processing; exiting"
        );
        return Ok(());
    }

    let points = point_exclusions(&combined);
    let states = state_exclusions(&combined);
    info!(
        combined_rows = combined.len(),
        point_rows = points.len(),
        state_rows = states.len(),
        "split exclusions"
    );

    let client = BlobContainerClient::from_env()?;
    client.upload_csv(
        &point_exclusions_blob_name(report_date),
        to_csv_bytes(&PointExclusion::CSV_HEADERS, &points)?,
        args.overwrite_blobs,
    )?;
    client.upload_csv(
        &state_exclusions_blob_name(report_date),
        to_csv_bytes(&StateExclusion::CSV_HEADERS, &states)?,
        args.overwrite_blobs,
    )?;

    Ok(())
}
