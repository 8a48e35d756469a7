//! Annotate command implementation

use std::path::Path;

use miette::Result;

use crate::cli::{Cli, OutputFormat};
use crate::commands::{load_config, read_document, read_response};
use crate::output::output_rendering;

pub fn run_annotate(
    cli: &Cli,
    document: &Path,
    results: &Path,
    format: OutputFormat,
) -> Result<bool> {
    let config = load_config(cli)?;
    let text = read_document(document)?;
    let response = read_response(results)?;

    let rendering = markpen_core::render(&text, &response.errors, &config);
    output_rendering(&rendering, format)?;

    Ok(rendering.total > 0)
}
