//! Cursor placement for "jump to error".

use tracing::debug;

use crate::ValidationError;
use crate::resolver::resolve;

/// The text input a caller wants to move the cursor in.
pub trait EditorSurface {
    /// Moves input focus to the surface.
    fn focus(&mut self);

    /// Selects the characters `start..end`. A zero-width selection places
    /// the cursor.
    fn set_selection_range(&mut self, start: usize, end: usize);
}

/// Places the cursor of `surface` at the end of `error`.
///
/// `buffer` must be the text currently shown by the surface. Returns the
/// character index the cursor was moved to.
pub fn jump_to_error<S>(surface: &mut S, buffer: &str, error: &ValidationError) -> usize
where
    S: EditorSurface + ?Sized,
{
    let index = resolve(buffer, error.range.end);
    debug!(
        "Jumping to {}:{} (index {})",
        error.range.end.line, error.range.end.offset, index
    );
    surface.focus();
    surface.set_selection_range(index, index);
    index
}
