//! Locate command implementation

use std::path::Path;

use markpen_core::Position;
use markpen_core::resolver::{char_to_byte, position_at, resolve};
use miette::Result;
use tracing::debug;

use crate::commands::read_document;

pub fn run_locate(document: &Path, line: u32, offset: u32, bytes: bool) -> Result<()> {
    let text = read_document(document)?;
    let index = resolve(&text, Position::new(line, offset));

    // Targets past a line end land on a later position.
    let landed = position_at(&text, index);
    debug!(
        "{}:{} resolved to index {} ({}:{})",
        line, offset, index, landed.line, landed.offset
    );

    if bytes {
        println!("{}", char_to_byte(&text, index));
    } else {
        println!("{}", index);
    }
    Ok(())
}
