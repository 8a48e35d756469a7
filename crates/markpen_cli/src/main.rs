//! markpen CLI
//!
//! Renders validation errors in place, as a report, or as cursor positions.

mod cli;
mod commands;
mod output;

use std::process::ExitCode;

use clap::Parser;
use miette::Result;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(has_errors) => {
            if has_errors {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<bool> {
    match &cli.command {
        Commands::Annotate {
            document,
            results,
            format,
        } => commands::annotate::run_annotate(cli, document, results, *format),
        Commands::Report {
            results,
            context_width,
        } => commands::report::run_report(cli, results, *context_width),
        Commands::Locate {
            document,
            line,
            offset,
            bytes,
        } => commands::locate::run_locate(document, *line, *offset, *bytes).map(|_| false),
        Commands::Init { force } => commands::init::run_init(*force).map(|_| false),
    }
}
