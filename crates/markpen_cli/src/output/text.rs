//! Text output formatter

use markpen_core::Rendering;
use markpen_core::formatters::to_text;

pub fn output_text(rendering: &Rendering) {
    println!("{}", to_text(&rendering.document));
    println!();
    println!("{}", rendering.headline());

    for entry in &rendering.errors {
        let error = &entry.error_ref.error;
        let placement = if entry.annotated { "" } else { " (not shown)" };
        println!(
            "  {}. {} [{}]{}",
            entry.error_ref.id, error.message, error.validator_name, placement
        );
    }
}
