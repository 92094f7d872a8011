use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use badgepress::io::manifest::write_manifest;
use badgepress::{BatchJob, RenderOptions, WkHtmlToPdf, generate_batch};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn job_from_args(args: &CliArgs) -> Result<BatchJob, AppError> {
    if args.prefix.is_empty() || args.prefix.contains(['/', '\\']) {
        return Err(AppError::InvalidPrefix {
            prefix: args.prefix.clone(),
        });
    }
    let mut job = BatchJob::new(args.html.clone(), args.css.clone(), &args.csv);
    job.options = RenderOptions::new(args.page_size.clone(), args.width, args.height)?;
    job.output_dir = args.output_dir.clone();
    job.prefix = args.prefix.clone();
    job.continue_on_error = args.continue_on_error;
    Ok(job)
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.log);

    let job = job_from_args(&args)?;
    let renderer = WkHtmlToPdf::new(&args.wkhtmltopdf);
    info!("Renderer: {:?}", renderer.backend_path());

    let report = match generate_batch(&job, &renderer) {
        Ok(report) => report,
        // Pre-flight failures are reported and end the run without an error status.
        Err(e) if e.is_preflight() => {
            error!("{}", e);
            return Ok(());
        }
        Err(e) => {
            error!("{}", e);
            return Err(AppError::from(e).into());
        }
    };

    info!("Batch processing complete!");
    info!("Rendered: {}", report.rendered);
    info!("Failed: {}", report.failed);

    if let Some(path) = &args.manifest {
        write_manifest(path, &job, &report).map_err(AppError::from)?;
    }

    Ok(())
}
