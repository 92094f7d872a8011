//! HTML-to-PDF rendering capability and the wkhtmltopdf backend.
//!
//! The row driver only sees the [`Renderer`] trait, so tests and embedders can
//! substitute their own backend without spawning a process.
use std::ffi::OsString;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::debug;

use crate::core::params::RenderOptions;
use crate::error::{Error, Result};

/// Conventional install location of the wkhtmltopdf executable.
#[cfg(windows)]
pub const DEFAULT_BACKEND_PATH: &str = r"C:\Program Files\wkhtmltopdf\bin\wkhtmltopdf.exe";
#[cfg(not(windows))]
pub const DEFAULT_BACKEND_PATH: &str = "/usr/local/bin/wkhtmltopdf";

/// Renders one assembled HTML document to a PDF file.
pub trait Renderer {
    fn render(&self, html: &str, options: &RenderOptions, output: &Path) -> Result<()>;
}

/// Renderer that pipes HTML into an external `wkhtmltopdf` process.
#[derive(Debug, Clone)]
pub struct WkHtmlToPdf {
    backend_path: PathBuf,
}

impl Default for WkHtmlToPdf {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_PATH)
    }
}

impl WkHtmlToPdf {
    pub fn new(backend_path: impl Into<PathBuf>) -> Self {
        Self {
            backend_path: backend_path.into(),
        }
    }

    pub fn backend_path(&self) -> &Path {
        &self.backend_path
    }

    /// Full argument list: options, then `-` (read stdin), then the output path.
    pub fn command_args(options: &RenderOptions, output: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec!["--quiet".into()];
        args.extend(options.to_backend_args().into_iter().map(OsString::from));
        args.push("-".into());
        args.push(output.as_os_str().to_owned());
        args
    }
}

impl Renderer for WkHtmlToPdf {
    fn render(&self, html: &str, options: &RenderOptions, output: &Path) -> Result<()> {
        let args = Self::command_args(options, output);
        debug!("Running {:?} {:?}", self.backend_path, args);

        let mut child = Command::new(&self.backend_path)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => Error::BackendNotFound {
                    path: self.backend_path.clone(),
                },
                _ => Error::Render(format!("wkhtmltopdf exec error: {}", e)),
            })?;

        // Dropping stdin closes the pipe so the backend starts rendering.
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(html.as_bytes()),
            None => Ok(()),
        };

        let result = child.wait_with_output()?;
        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(Error::Render(format!(
                "wkhtmltopdf exited with {}: {}",
                result.status,
                stderr.trim()
            )));
        }
        written?;

        if !output.is_file() {
            return Err(Error::Render(format!(
                "wkhtmltopdf reported success but {:?} was not written",
                output
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PageSize;

    #[test]
    fn args_end_with_stdin_marker_and_output() {
        let args = WkHtmlToPdf::command_args(&RenderOptions::default(), Path::new("out/a.pdf"));
        assert_eq!(args[0], "--quiet");
        assert_eq!(args[args.len() - 2], "-");
        assert_eq!(args[args.len() - 1], "out/a.pdf");
        assert!(args.iter().any(|a| a == "--enable-local-file-access"));
        assert!(args.iter().any(|a| a == "--no-outline"));
    }

    #[test]
    fn custom_page_dimensions_reach_the_command() {
        let options = RenderOptions::new(PageSize::Custom, 10.0, 6.0).unwrap();
        let args = WkHtmlToPdf::command_args(&options, Path::new("a.pdf"));
        assert!(args.iter().any(|a| a == "10cm"));
        assert!(args.iter().any(|a| a == "6cm"));
    }

    #[test]
    fn missing_executable_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = WkHtmlToPdf::new(dir.path().join("no-such-wkhtmltopdf"));
        let output = dir.path().join("a.pdf");
        let err = renderer
            .render("<p>hi</p>", &RenderOptions::default(), &output)
            .unwrap_err();
        assert!(matches!(err, Error::BackendNotFound { .. }), "{err:?}");
        assert!(!output.exists());
    }
}
