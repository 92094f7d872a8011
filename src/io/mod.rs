//! I/O layer: CSV row reading, output naming, the PDF renderer boundary and
//! the JSON run manifest.
pub mod rows;
pub use rows::RowReader;

pub mod naming;

pub mod renderer;
pub use renderer::{DEFAULT_BACKEND_PATH, Renderer, WkHtmlToPdf};

pub mod manifest;
