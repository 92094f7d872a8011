//! badgepress CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: print help when called bare, otherwise
//! parse args and run the batch. For programmatic use, prefer the library API
//! (`badgepress::api`).

use clap::{CommandFactory, Parser};

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if std::env::args_os().len() <= 1 {
        cli::CliArgs::command().print_help()?;
        println!();
        return Ok(());
    }
    let args = cli::CliArgs::parse();
    cli::run(args)
}
