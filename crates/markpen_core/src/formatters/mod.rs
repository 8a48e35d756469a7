//! Renderers for annotated documents.
//!
//! - [`html`]: markup for an editor underlay
//! - [`text`]: a terminal-friendly rendering

pub mod html;
pub mod text;

pub use html::to_html;
pub use text::to_text;

/// Summary line for the number of errors found.
///
/// `total` is the full flattened error count, including errors that could
/// not be placed in the document.
pub fn headline(total: usize) -> String {
    format!("Found {} error{}", total, if total == 1 { "" } else { "s" })
}
