//! HTML output formatter

use markpen_core::Rendering;
use markpen_core::formatters::html::{errors_to_html, to_html};

pub fn output_html(rendering: &Rendering) {
    println!("{}", to_html(&rendering.document));
    println!("<p>{}</p>", rendering.headline());
    println!("{}", errors_to_html(&rendering.errors));
}
