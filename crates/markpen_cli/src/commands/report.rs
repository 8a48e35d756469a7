//! Report command implementation

use std::path::Path;

use markpen_core::report::format_all;
use miette::Result;

use crate::cli::Cli;
use crate::commands::{load_config, read_response};

pub fn run_report(cli: &Cli, results: &Path, context_width: Option<usize>) -> Result<bool> {
    let config = load_config(cli)?;
    let response = read_response(results)?;
    let width = context_width.unwrap_or(config.context_width);

    print!("{}", format_all(&response.errors, width));

    Ok(response.error_count() > 0)
}
