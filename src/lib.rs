#![doc = r#"
badgepress — batch-generate one PDF per CSV row from HTML/CSS templates.

Each data row is merged into every HTML template (`{field}` placeholders are
replaced by the row's values), the matching stylesheet is inlined in front of
each section, sections are joined with page breaks, and the resulting document
is rendered to PDF by an external backend (wkhtmltopdf by default).

Requirements
------------
- `wkhtmltopdf` installed, or any other [`Renderer`] implementation.
- Rust 2024 edition toolchain.

Quick start
-----------
```rust,no_run
use std::path::PathBuf;
use badgepress::{generate_batch, BatchJob, PageSize, RenderOptions, WkHtmlToPdf};

fn main() -> badgepress::Result<()> {
    let mut job = BatchJob::new(
        vec![PathBuf::from("front.html"), PathBuf::from("back.html")],
        vec![PathBuf::from("front.css"), PathBuf::from("back.css")],
        "attendees.csv",
    );
    job.options = RenderOptions::new(PageSize::Custom, 8.5, 5.4)?;
    job.output_dir = Some(PathBuf::from("out"));

    let report = generate_batch(&job, &WkHtmlToPdf::default())?;
    println!("rendered={} failed={}", report.rendered, report.failed);
    Ok(())
}
```

Custom renderers
----------------
```rust
use std::path::Path;
use badgepress::{Renderer, RenderOptions};

struct HtmlDump;

impl Renderer for HtmlDump {
    fn render(&self, html: &str, _options: &RenderOptions, output: &Path) -> badgepress::Result<()> {
        std::fs::write(output.with_extension("html"), html)?;
        Ok(())
    }
}
```

Error handling
--------------
All public functions return `badgepress::Result<T>`. Pre-flight failures
(`Error::MissingFile`, `Error::TemplateCountMismatch`) are returned before any
row is read. Renderer failures never abort a batch; they are counted in the
[`BatchReport`].

Useful modules
--------------
- [`api`] — `BatchJob`, `BatchReport`, `generate_batch`.
- [`core`] — render options, validation, substitution and assembly.
- [`io`] — CSV rows, output naming, renderers and the run manifest.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Types
pub use crate::core::params::RenderOptions;
pub use error::{Error, Result};
pub use types::{DataRow, PageSize, TemplatePair};

// Building blocks
pub use crate::core::assemble::{PAGE_BREAK, assemble_document};
pub use crate::core::template::substitute;
pub use crate::core::validate::{pair_templates, verify_files_exist};
pub use io::{DEFAULT_BACKEND_PATH, Renderer, RowReader, WkHtmlToPdf};

// High-level API re-exports
pub use api::{BatchJob, BatchReport, RowOutcome, drive_rows, generate_batch, preflight};
