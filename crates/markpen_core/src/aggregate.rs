//! Flattening, ordering and numbering of validation errors.
//!
//! The service groups errors by sentence. Rendering needs a single list in
//! reading order of the error *ends*, numbered once so that in-place markers
//! and the error list refer to the same ids.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{SentenceResult, ValidationError};

/// The 1-based ordinal of an error within one render.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ErrorId(pub usize);

impl fmt::Display for ErrorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An error together with its ordinal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRef {
    /// Ordinal assigned after sorting.
    pub id: ErrorId,
    /// The error itself.
    #[serde(flatten)]
    pub error: ValidationError,
}

/// Concatenates the errors of every sentence, in input order.
pub fn flatten(results: &[SentenceResult]) -> Vec<ValidationError> {
    results
        .iter()
        .flat_map(|r| r.errors.iter().cloned())
        .collect()
}

/// Sorts errors by end line, then end offset.
///
/// The sort is stable: errors ending at the same position keep their
/// relative input order.
pub fn sort_errors(mut errors: Vec<ValidationError>) -> Vec<ValidationError> {
    errors.sort_by_key(|e| (e.range.end.line, e.range.end.offset));
    errors
}

/// Assigns ids `1..=n` in sequence order.
pub fn number(errors: Vec<ValidationError>) -> Vec<ErrorRef> {
    errors
        .into_iter()
        .enumerate()
        .map(|(i, error)| ErrorRef {
            id: ErrorId(i + 1),
            error,
        })
        .collect()
}

/// Flattens, sorts and numbers the errors of a response.
pub fn collect(results: &[SentenceResult]) -> Vec<ErrorRef> {
    number(sort_errors(flatten(results)))
}
