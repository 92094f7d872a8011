//! Pre-flight checks run once before any row is touched.
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::types::TemplatePair;

/// Check that every path exists, in order, stopping at the first missing one.
pub fn verify_files_exist<I, P>(paths: I) -> Result<()>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    for path in paths {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::MissingFile {
                path: path.to_path_buf(),
            });
        }
        debug!("Found input file: {:?}", path);
    }
    Ok(())
}

/// Pair HTML and CSS templates by position. Only the counts are inspected.
pub fn pair_templates(html: &[PathBuf], css: &[PathBuf]) -> Result<Vec<TemplatePair>> {
    if html.len() != css.len() {
        return Err(Error::TemplateCountMismatch {
            html: html.len(),
            css: css.len(),
        });
    }
    Ok(html
        .iter()
        .zip(css)
        .map(|(h, c)| TemplatePair::new(h, c))
        .collect())
}

/// Existence check over all template files followed by the CSV, in that order.
pub fn verify_inputs(html: &[PathBuf], css: &[PathBuf], csv: &Path) -> Result<()> {
    verify_files_exist(
        html.iter()
            .map(PathBuf::as_path)
            .chain(css.iter().map(PathBuf::as_path))
            .chain(std::iter::once(csv)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn pairs_equal_length_lists_in_order() {
        let html = vec![PathBuf::from("a.html"), PathBuf::from("b.html")];
        let css = vec![PathBuf::from("a.css"), PathBuf::from("b.css")];
        let pairs = pair_templates(&html, &css).unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[1], TemplatePair::new("b.html", "b.css"));
    }

    #[test]
    fn unequal_lengths_fail_without_filesystem_access() {
        // none of these paths exist
        let html = vec![PathBuf::from("a.html"), PathBuf::from("b.html")];
        let css = vec![PathBuf::from("a.css")];
        match pair_templates(&html, &css) {
            Err(Error::TemplateCountMismatch { html, css }) => {
                assert_eq!((html, css), (2, 1));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn reports_first_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let present = dir.path().join("a.html");
        fs::write(&present, "<p></p>").unwrap();
        let missing1 = dir.path().join("missing.css");
        let missing2 = dir.path().join("data.csv");

        let err = verify_files_exist([&present, &missing1, &missing2]).unwrap_err();
        match err {
            Error::MissingFile { path } => assert_eq!(path, missing1),
            other => panic!("unexpected: {:?}", other),
        }
        assert!(verify_files_exist([&present]).is_ok());
    }

    #[test]
    fn directories_do_not_count_as_files() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            verify_files_exist([dir.path()]),
            Err(Error::MissingFile { .. })
        ));
    }

    #[test]
    fn csv_is_checked_after_templates() {
        let dir = tempfile::tempdir().unwrap();
        let html = vec![dir.path().join("missing.html")];
        let css = vec![dir.path().join("missing.css")];
        let csv = dir.path().join("missing.csv");
        match verify_inputs(&html, &css, &csv) {
            Err(Error::MissingFile { path }) => assert_eq!(path, html[0]),
            other => panic!("unexpected: {:?}", other),
        }
    }
}
