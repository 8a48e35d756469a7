//! Plain-text rendering of annotated documents for terminals.

use crate::annotate::{AnnotatedDocument, Segment};

/// Renders an annotated document as text.
///
/// Highlighted runs are wrapped in `«` and `»`, marker groups are written as
/// `[1,2]` (with a trailing `…` when truncated).
pub fn to_text(document: &AnnotatedDocument) -> String {
    let mut text = String::new();
    for segment in document.segments() {
        match segment {
            Segment::Plain(run) => text.push_str(run),
            Segment::Highlight(run) => {
                text.push('«');
                text.push_str(run);
                text.push('»');
            }
            Segment::Marker(group) => {
                text.push('[');
                let ids: Vec<String> = group.ids.iter().map(|id| id.to_string()).collect();
                text.push_str(&ids.join(","));
                if group.truncated {
                    text.push_str(",…");
                }
                text.push(']');
            }
            Segment::LineBreak => text.push('\n'),
        }
    }
    text
}
