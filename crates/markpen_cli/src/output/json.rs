//! JSON output formatter

use markpen_core::Rendering;
use miette::{IntoDiagnostic, Result};

pub fn output_json(rendering: &Rendering) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(rendering).into_diagnostic()?
    );
    Ok(())
}
