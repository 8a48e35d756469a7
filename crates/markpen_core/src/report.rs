//! Plain-text error report with bounded context snippets.
//!
//! Each error becomes a block like:
//!
//! ```text
//! Line 1:5 “Such 【distriubuted】 systems nee…”
//! Found possibly misspelled word "distriubuted".
//! ```

use crate::{SentenceResult, ValidationError};

/// Default number of context characters shown on each side of a span.
pub const DEFAULT_CONTEXT_WIDTH: usize = 12;

const ELLIPSIS: &str = "\u{2026}";
const OPEN_QUOTE: &str = "\u{201C}";
const CLOSE_QUOTE: &str = "\u{201D}";
const SPAN_OPEN: &str = "\u{3010}";
const SPAN_CLOSE: &str = "\u{3011}";
const INSERTION_POINT: &str = "\u{25B6}";

/// Formats a single error found in `sentence`.
///
/// At most `context_width` characters are shown on either side of the
/// error's sub-sentence span; truncated sides get an ellipsis. Offsets past
/// the end of the sentence yield empty slices.
pub fn format_error(sentence: &str, error: &ValidationError, context_width: usize) -> String {
    let chars: Vec<char> = sentence.chars().collect();
    let span = error.sub_sentence_span;
    let offset = span.offset as usize;
    let span_end = span.end() as usize;

    let left = offset.saturating_sub(context_width);
    let right = chars.len().min(span_end.saturating_add(context_width));

    let mut message = format!(
        "Line {}:{} {}",
        error.range.start.line, error.range.start.offset, OPEN_QUOTE
    );
    if left > 0 {
        message.push_str(ELLIPSIS);
    }
    message.push_str(&slice(&chars, left, offset));
    message.push_str(if span.is_empty() {
        INSERTION_POINT
    } else {
        SPAN_OPEN
    });
    message.push_str(&slice(&chars, offset, span_end));
    if !span.is_empty() {
        message.push_str(SPAN_CLOSE);
    }
    message.push_str(&slice(&chars, span_end, right));
    if right < chars.len() {
        message.push_str(ELLIPSIS);
    }
    message.push_str(CLOSE_QUOTE);
    message.push('\n');
    message.push_str(&error.message);
    message.push('\n');
    message
}

/// Formats every error of every sentence, one block per error, each block
/// followed by a blank line.
pub fn format_all(results: &[SentenceResult], context_width: usize) -> String {
    let mut report = String::new();
    for result in results {
        for error in &result.errors {
            report.push_str(&format_error(&result.sentence_text, error, context_width));
            report.push('\n');
        }
    }
    report
}

/// Characters `from..to` of `chars`, clamped to its bounds.
fn slice(chars: &[char], from: usize, to: usize) -> String {
    let to = to.min(chars.len());
    if from >= to {
        return String::new();
    }
    chars[from..to].iter().collect()
}
