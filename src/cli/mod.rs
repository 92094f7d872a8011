//! Command Line Interface (CLI) layer for badgepress.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`): logging setup, validation and the
//! batch run. It wires user-provided options to the library functionality
//! exposed via `badgepress::api`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
