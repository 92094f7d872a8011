//! Builds the per-row HTML document from template pairs.
use std::fs;

use tracing::debug;

use crate::core::template::substitute;
use crate::error::Result;
use crate::types::{DataRow, TemplatePair};

/// Empty block that forces the renderer onto a new page.
pub const PAGE_BREAK: &str = r#"<div style="page-break-after:always;"></div>"#;

/// Inline the stylesheet ahead of an already substituted HTML section.
pub fn fragment(css: &str, html: &str) -> String {
    format!("<style>{}</style>\n{}", css, html)
}

/// Read, substitute and concatenate every pair for one row.
///
/// Files are re-read on each call. Sections keep template order and are
/// separated by [`PAGE_BREAK`]; nothing follows the last section.
pub fn assemble_document(pairs: &[TemplatePair], row: &DataRow) -> Result<String> {
    let mut document = String::new();
    for (i, pair) in pairs.iter().enumerate() {
        let html = fs::read_to_string(&pair.html)?;
        let css = fs::read_to_string(&pair.css)?;

        let filled = substitute(&html, row, &pair.html)?;
        document.push_str(&fragment(&css, &filled));

        if i + 1 < pairs.len() {
            document.push_str(PAGE_BREAK);
        }
    }
    debug!(
        "Assembled {} section(s), {} bytes",
        pairs.len(),
        document.len()
    );
    Ok(document)
}
