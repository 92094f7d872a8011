//! JSON run manifest written next to the generated documents.
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use chrono::{DateTime, Local};
use serde::Serialize;
use tracing::info;

use crate::api::{BatchJob, BatchReport};
use crate::error::Result;

#[derive(Debug, Serialize)]
struct Manifest<'a> {
    generated_at: DateTime<Local>,
    job: &'a BatchJob,
    report: &'a BatchReport,
}

/// Write the job description and per-row outcomes as pretty JSON.
pub fn write_manifest(path: &Path, job: &BatchJob, report: &BatchReport) -> Result<()> {
    let manifest = Manifest {
        generated_at: Local::now(),
        job,
        report,
    };
    let file = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(file, &manifest)?;
    info!("Manifest written: {:?}", path);
    Ok(())
}
