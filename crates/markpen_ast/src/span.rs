//! Position, range and sub-sentence span types.
//!
//! All offsets count characters (Unicode scalar values), not bytes.

use serde::{Deserialize, Serialize};

/// A logical position in a document.
///
/// Lines are 1-indexed and offsets are 0-indexed from the start of the line.
/// The derived ordering compares `line` first, then `offset`, which is
/// document reading order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Position {
    /// Line number (1-indexed).
    pub line: u32,
    /// Character offset from the start of the line (0-indexed).
    #[serde(default)]
    pub offset: u32,
}

impl Position {
    /// Creates a new position.
    #[inline]
    pub const fn new(line: u32, offset: u32) -> Self {
        Self { line, offset }
    }
}

/// A start/end pair of logical positions.
///
/// Well-formed ranges never end before they start. This is not checked.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Range {
    /// Start position.
    pub start: Position,
    /// End position (exclusive).
    pub end: Position,
}

impl Range {
    /// Creates a new range.
    #[inline]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Returns true if the range starts and ends on the same line.
    #[inline]
    pub const fn is_single_line(&self) -> bool {
        self.start.line == self.end.line
    }
}

/// The highlighted part of a sentence, relative to the sentence string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubSentenceSpan {
    /// Character offset into the sentence.
    #[serde(default)]
    pub offset: u32,
    /// Number of highlighted characters. Zero marks an insertion point.
    #[serde(default)]
    pub length: u32,
}

impl SubSentenceSpan {
    /// Creates a new sub-sentence span.
    #[inline]
    pub const fn new(offset: u32, length: u32) -> Self {
        Self { offset, length }
    }

    /// Returns true for a pure insertion point.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Offset one past the last highlighted character.
    #[inline]
    pub const fn end(&self) -> u32 {
        self.offset.saturating_add(self.length)
    }
}
