//! Validation error types as returned by the validation service.

use markpen_ast::{Position, Range, SubSentenceSpan};
use serde::{Deserialize, Serialize};

use crate::MarkpenError;

/// A single validation error.
///
/// Errors are produced upstream and treated as immutable here. Whether an
/// error could be annotated in place is reported by the renderer instead of
/// being written back onto the error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidationError {
    /// Where the error applies in the document.
    #[serde(rename = "position")]
    pub range: Range,

    /// The error message.
    pub message: String,

    /// Name of the validator that reported this error.
    #[serde(rename = "validator", default)]
    pub validator_name: String,

    /// The offending snippet, relative to the sentence text.
    #[serde(rename = "subsentence", default)]
    pub sub_sentence_span: SubSentenceSpan,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(
        validator_name: impl Into<String>,
        message: impl Into<String>,
        range: Range,
    ) -> Self {
        Self {
            range,
            message: message.into(),
            validator_name: validator_name.into(),
            sub_sentence_span: SubSentenceSpan::default(),
        }
    }

    /// Sets the sub-sentence span.
    pub fn with_sub_sentence_span(mut self, span: SubSentenceSpan) -> Self {
        self.sub_sentence_span = span;
        self
    }

    /// The position the error is ordered and placed by.
    #[inline]
    pub fn end(&self) -> Position {
        self.range.end
    }
}

/// The errors found in one sentence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceResult {
    /// The sentence the errors were found in.
    #[serde(rename = "sentence", default)]
    pub sentence_text: String,

    /// Errors found in the sentence.
    #[serde(default)]
    pub errors: Vec<ValidationError>,
}

impl SentenceResult {
    /// Creates a new sentence result.
    pub fn new(sentence_text: impl Into<String>, errors: Vec<ValidationError>) -> Self {
        Self {
            sentence_text: sentence_text.into(),
            errors,
        }
    }
}

/// A full validation response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResponse {
    /// Per-sentence results, in document order.
    #[serde(default)]
    pub errors: Vec<SentenceResult>,
}

impl ValidationResponse {
    /// Parses a response payload.
    pub fn from_json(json: &str) -> Result<Self, MarkpenError> {
        serde_json::from_str(json)
            .map_err(|e| MarkpenError::payload(format!("Invalid validation response: {}", e)))
    }

    /// Total number of errors across all sentences.
    pub fn error_count(&self) -> usize {
        self.errors.iter().map(|r| r.errors.len()).sum()
    }
}
