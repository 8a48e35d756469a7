//! Subcommand implementations

pub mod annotate;
pub mod init;
pub mod locate;
pub mod report;

use std::path::Path;

use markpen_core::{MarkpenConfig, ValidationResponse};
use miette::{IntoDiagnostic, Result, WrapErr};
use tracing::{debug, info};

use crate::cli::Cli;

/// Loads the configuration given on the command line, or discovers one in
/// the current directory.
pub fn load_config(cli: &Cli) -> Result<MarkpenConfig> {
    if let Some(ref path) = cli.config {
        return MarkpenConfig::from_file(path).into_diagnostic();
    }

    if let Some(path) = MarkpenConfig::discover(".") {
        info!("Using config: {}", path.display());
        return MarkpenConfig::from_file(&path).into_diagnostic();
    }

    debug!("No config file found, using defaults");
    Ok(MarkpenConfig::new())
}

/// Reads a document from disk.
pub fn read_document(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read document {}", path.display()))
}

/// Reads and parses a validation response.
pub fn read_response(path: &Path) -> Result<ValidationResponse> {
    let json = std::fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read results {}", path.display()))?;
    let response = ValidationResponse::from_json(&json).into_diagnostic()?;
    debug!(
        "Loaded {} errors in {} sentences from {}",
        response.error_count(),
        response.errors.len(),
        path.display()
    );
    Ok(response)
}
