//! High-level library API: describe a run with [`BatchJob`], then generate
//! one PDF per CSV row with [`generate_batch`]. Prefer these entrypoints over
//! the low-level `core` and `io` modules when embedding badgepress.
use std::io::Read;
use std::path::PathBuf;

use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::assemble::assemble_document;
use crate::core::params::RenderOptions;
use crate::core::validate::{pair_templates, verify_inputs};
use crate::error::{Error, Result};
use crate::io::naming::{DEFAULT_PREFIX, output_file_name, output_path};
use crate::io::renderer::Renderer;
use crate::io::rows::RowReader;
use crate::types::TemplatePair;

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

/// Everything needed for one batch run; suitable for config files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchJob {
    pub html: Vec<PathBuf>,
    pub css: Vec<PathBuf>,
    pub csv: PathBuf,
    #[serde(default)]
    pub options: RenderOptions,
    /// Directory for generated files; None means the working directory
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    #[serde(default = "default_prefix")]
    pub prefix: String,
    /// If true, templating failures skip the row instead of aborting the run
    #[serde(default)]
    pub continue_on_error: bool,
}

impl BatchJob {
    pub fn new(html: Vec<PathBuf>, css: Vec<PathBuf>, csv: impl Into<PathBuf>) -> Self {
        Self {
            html,
            css,
            csv: csv.into(),
            options: RenderOptions::default(),
            output_dir: None,
            prefix: default_prefix(),
            continue_on_error: false,
        }
    }
}

/// What happened to a single CSV row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowOutcome {
    /// 1-based data row number (header excluded)
    pub row: usize,
    pub output: Option<PathBuf>,
    pub error: Option<String>,
}

/// Batch processing report
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub rendered: usize,
    pub failed: usize,
    pub outcomes: Vec<RowOutcome>,
}

impl BatchReport {
    fn record_success(&mut self, row: usize, output: PathBuf) {
        self.rendered += 1;
        self.outcomes.push(RowOutcome {
            row,
            output: Some(output),
            error: None,
        });
    }

    fn record_failure(&mut self, row: usize, error: &Error) {
        self.failed += 1;
        self.outcomes.push(RowOutcome {
            row,
            output: None,
            error: Some(error.to_string()),
        });
    }

    /// Paths of all successfully written documents, in row order.
    pub fn outputs(&self) -> impl Iterator<Item = &PathBuf> {
        self.outcomes.iter().filter_map(|o| o.output.as_ref())
    }
}

/// Validate the job's inputs and pair its templates.
///
/// The count check runs first and never touches the filesystem; the existence
/// check then covers every HTML file, every CSS file and the CSV, in that order.
pub fn preflight(job: &BatchJob) -> Result<Vec<TemplatePair>> {
    let pairs = pair_templates(&job.html, &job.css)?;
    verify_inputs(&job.html, &job.css, &job.csv)?;
    Ok(pairs)
}

/// Assemble and render every row from `rows`, one at a time.
///
/// Renderer failures are logged and counted, and the next row proceeds.
/// Templating failures abort the run unless `job.continue_on_error` is set;
/// other assembly failures (such as a template file vanishing) always abort.
pub fn drive_rows<R: Read>(
    rows: RowReader<R>,
    pairs: &[TemplatePair],
    job: &BatchJob,
    renderer: &dyn Renderer,
) -> Result<BatchReport> {
    let mut report = BatchReport::default();

    for (idx, row) in rows.enumerate() {
        let seq = idx + 1;
        let row = row?;
        debug!("Row {}: {:?}", seq, row);

        let document = match assemble_document(pairs, &row) {
            Ok(document) => document,
            Err(e) if job.continue_on_error && e.is_template() => {
                warn!("Skipping row {}: {}", seq, e);
                report.record_failure(seq, &e);
                continue;
            }
            Err(e) => return Err(e),
        };

        let file_name = output_file_name(&job.prefix, Local::now().naive_local(), seq);
        let output = output_path(job.output_dir.as_deref(), &file_name);

        match renderer.render(&document, &job.options, &output) {
            Ok(()) => {
                info!("PDF created: {}", output.display());
                report.record_success(seq, output);
            }
            Err(e) => {
                warn!("Failed to create PDF: {}", e);
                report.record_failure(seq, &e);
            }
        }
    }

    Ok(report)
}

/// Validate inputs, then render one PDF per CSV row.
///
/// Returns before reading any row if validation fails.
pub fn generate_batch(job: &BatchJob, renderer: &dyn Renderer) -> Result<BatchReport> {
    let pairs = preflight(job)?;

    if let Some(dir) = &job.output_dir {
        std::fs::create_dir_all(dir)?;
    }

    info!(
        "Generating from {:?} with {} template pair(s)",
        job.csv,
        pairs.len()
    );
    let rows = RowReader::open(&job.csv)?;
    drive_rows(rows, &pairs, job, renderer)
}
