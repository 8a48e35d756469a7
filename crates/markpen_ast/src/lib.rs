//! # markpen_ast
//!
//! Coordinate types shared by the markpen crates.
//!
//! Validation services report where an error applies in two coordinate
//! systems:
//!
//! - [`Range`]: a pair of logical [`Position`]s (1-based line, 0-based
//!   character offset on that line) in the whole document.
//! - [`SubSentenceSpan`]: an offset/length pair relative to the sentence
//!   string the error was found in.
//!
//! ## Example
//!
//! ```rust
//! use markpen_ast::{Position, Range};
//!
//! let range = Range::new(Position::new(1, 8), Position::new(1, 10));
//! assert!(range.is_single_line());
//! ```

mod span;

pub use span::{Position, Range, SubSentenceSpan};
