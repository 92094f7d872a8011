use clap::Parser;
use std::path::PathBuf;

use badgepress::core::params::{DEFAULT_HEIGHT_CM, DEFAULT_WIDTH_CM};
use badgepress::io::naming::DEFAULT_PREFIX;
use badgepress::{DEFAULT_BACKEND_PATH, PageSize};

#[derive(Parser, Debug)]
#[command(
    name = "badgepress",
    version,
    about = "Generate PDFs from HTML templates and CSV file"
)]
pub struct CliArgs {
    /// Paths to HTML template files
    #[arg(long, num_args = 1.., required = true)]
    pub html: Vec<PathBuf>,

    /// Paths to CSS files, one per HTML template in the same order
    #[arg(long, num_args = 1.., required = true)]
    pub css: Vec<PathBuf>,

    /// Path to the CSV file; the header row names the template fields
    #[arg(long)]
    pub csv: PathBuf,

    /// Page size. Example: A4, A6, Letter, or "custom" to use --width/--height
    #[arg(long = "page_size", alias = "page-size", default_value = "A4")]
    pub page_size: PageSize,

    /// Page width in cm
    #[arg(long, default_value_t = DEFAULT_WIDTH_CM)]
    pub width: f64,

    /// Page height in cm
    #[arg(long, default_value_t = DEFAULT_HEIGHT_CM)]
    pub height: f64,

    /// Output directory for the generated PDFs
    #[arg(long = "output_dir", alias = "output-dir")]
    pub output_dir: Option<PathBuf>,

    /// Path to the wkhtmltopdf executable
    #[arg(long, env = "WKHTMLTOPDF_PATH", default_value = DEFAULT_BACKEND_PATH)]
    pub wkhtmltopdf: PathBuf,

    /// Filename prefix for generated PDFs
    #[arg(long, default_value = DEFAULT_PREFIX)]
    pub prefix: String,

    /// Skip rows whose template substitution fails instead of aborting the run
    #[arg(long, default_value_t = false)]
    pub continue_on_error: bool,

    /// Write a JSON manifest of the run to this path
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
