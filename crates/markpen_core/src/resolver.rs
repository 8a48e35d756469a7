//! Translation between logical positions and absolute character indices.
//!
//! Line lengths are not pre-indexed; every lookup is a single forward scan
//! over the buffer.

use markpen_ast::Position;

/// Resolves a logical position to an absolute character index.
///
/// Returns the index of the first character at or after `target`, i.e. the
/// first character whose line is at least `target.line` and whose offset on
/// that line is at least `target.offset`. An offset past the end of its line
/// therefore lands on a later line instead of failing. If no character
/// qualifies, the buffer length (in characters) is returned.
///
/// # Example
///
/// ```rust
/// use markpen_ast::Position;
/// use markpen_core::resolver::resolve;
///
/// assert_eq!(resolve("This is is a pen.", Position::new(1, 10)), 10);
/// ```
pub fn resolve(buffer: &str, target: Position) -> usize {
    let mut line = 1;
    let mut offset = 0;
    let mut len = 0;

    for (index, c) in buffer.chars().enumerate() {
        if line >= target.line && offset >= target.offset {
            return index;
        }
        offset += 1;
        if c == '\n' {
            line += 1;
            offset = 0;
        }
        len = index + 1;
    }

    len
}

/// Returns the logical position of the character at `index`.
///
/// Indices past the end map to the position just after the last character.
pub fn position_at(buffer: &str, index: usize) -> Position {
    let mut position = Position::new(1, 0);
    for c in buffer.chars().take(index) {
        if c == '\n' {
            position.line += 1;
            position.offset = 0;
        } else {
            position.offset += 1;
        }
    }
    position
}

/// Converts a character index into a byte offset into `buffer`.
///
/// Indices past the end clamp to `buffer.len()`.
pub fn char_to_byte(buffer: &str, index: usize) -> usize {
    buffer
        .char_indices()
        .nth(index)
        .map(|(byte, _)| byte)
        .unwrap_or(buffer.len())
}
