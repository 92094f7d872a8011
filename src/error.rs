//! Crate-level error type and `Result` alias.
//! Wraps I/O, CSV and JSON failures, and provides semantic variants for
//! pre-flight validation, templating and rendering failures.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("File not found: {}", path.display())]
    MissingFile { path: PathBuf },

    #[error("The amount of HTML and CSS files must be the same (html={html}, css={css})")]
    TemplateCountMismatch { html: usize, css: usize },

    #[error("Template {} references field '{field}' which is not present in the row", template.display())]
    MissingField { field: String, template: PathBuf },

    #[error("Malformed template {}: {reason}", template.display())]
    MalformedTemplate { template: PathBuf, reason: String },

    #[error("Renderer executable not found: {}", path.display())]
    BackendNotFound { path: PathBuf },

    #[error("Render error: {0}")]
    Render(String),

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },
}

impl Error {
    /// True for failures detected before any row is processed.
    pub fn is_preflight(&self) -> bool {
        matches!(
            self,
            Error::MissingFile { .. } | Error::TemplateCountMismatch { .. }
        )
    }

    /// True for failures caused by applying a row to a template.
    pub fn is_template(&self) -> bool {
        matches!(
            self,
            Error::MissingField { .. } | Error::MalformedTemplate { .. }
        )
    }
}
