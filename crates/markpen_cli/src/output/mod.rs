//! Output formatting module

mod html;
mod json;
mod text;

use markpen_core::Rendering;
use miette::Result;

use crate::cli::OutputFormat;

pub fn output_rendering(rendering: &Rendering, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => json::output_json(rendering)?,
        OutputFormat::Html => html::output_html(rendering),
        OutputFormat::Text => text::output_text(rendering),
    }

    Ok(())
}
