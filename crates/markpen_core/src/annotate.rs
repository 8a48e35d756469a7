//! In-place annotation of a document with numbered error markers.
//!
//! The renderer places every error on the characters of the document, then
//! walks the document once, turning it into a flat list of [`Segment`]s:
//! plain runs, highlighted runs, marker groups and line breaks.
//!
//! # Preconditions
//!
//! - `errors` must be sorted by end position and numbered in that order
//!   (see [`crate::aggregate::collect`]), so that marker ids increase in
//!   reading order.
//!
//! # Placement
//!
//! Both the start and the end of an error are looked up on the line of its
//! *end* position. A range that spans several lines is therefore highlighted
//! from `start.offset` on its end line, not from its real start.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::aggregate::{ErrorId, ErrorRef};

/// Default maximum number of ids listed in one marker group.
pub const DEFAULT_MARKER_LIMIT: usize = 4;

/// A cluster of error ids rendered where their ranges end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerGroup {
    /// Ids of the errors ending here, in sort order, capped at the limit.
    pub ids: Vec<ErrorId>,
    /// Whether more errors end here than were listed.
    pub truncated: bool,
}

/// One piece of an annotated document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Segment {
    /// Text outside any highlighted error.
    Plain(String),
    /// Text inside a highlighted error.
    Highlight(String),
    /// Errors ending at this point.
    Marker(MarkerGroup),
    /// End of a source line.
    LineBreak,
}

/// A document rendered as an ordered list of segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnnotatedDocument {
    segments: Vec<Segment>,
}

impl AnnotatedDocument {
    /// The segments in document order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Iterates over the marker groups in document order.
    pub fn markers(&self) -> impl Iterator<Item = &MarkerGroup> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Marker(group) => Some(group),
            _ => None,
        })
    }

    /// Reassembles the source text from the text runs and line breaks.
    pub fn source_text(&self) -> String {
        let mut text = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Plain(run) | Segment::Highlight(run) => text.push_str(run),
                Segment::LineBreak => text.push('\n'),
                Segment::Marker(_) => {}
            }
        }
        text
    }
}

/// The result of annotating a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotation {
    /// The rendered document.
    pub document: AnnotatedDocument,
    /// Ids of the errors that received a start or end mark.
    pub annotated: BTreeSet<ErrorId>,
}

impl Annotation {
    /// Returns whether the error with `id` was placed in the document.
    pub fn is_annotated(&self, id: ErrorId) -> bool {
        self.annotated.contains(&id)
    }
}

/// Per-character bookkeeping, alive for a single render.
struct AnnotatedCharacter<'a> {
    ch: char,
    starting: Vec<&'a ErrorRef>,
    ending: Vec<&'a ErrorRef>,
}

impl<'a> AnnotatedCharacter<'a> {
    fn new(ch: char) -> Self {
        Self {
            ch,
            starting: Vec::new(),
            ending: Vec::new(),
        }
    }
}

/// Accumulates the pending text run and emits segments.
///
/// A run is emitted as a highlight only when an error ends on the next
/// character. Runs cut short by a start, a line break or the end of the
/// document are emitted as plain text, even inside a highlight.
#[derive(Default)]
struct SegmentWriter {
    segments: Vec<Segment>,
    pending: String,
    highlighting: bool,
}

impl SegmentWriter {
    fn flush(&mut self, highlight: bool) {
        if self.pending.is_empty() {
            return;
        }
        let run = std::mem::take(&mut self.pending);
        self.segments.push(if highlight {
            Segment::Highlight(run)
        } else {
            Segment::Plain(run)
        });
    }

    fn close_highlight(&mut self) {
        self.flush(true);
        self.highlighting = false;
    }

    fn open_highlight(&mut self) {
        self.flush(false);
        self.highlighting = true;
    }

    fn push(&mut self, segment: Segment) {
        self.flush(false);
        self.segments.push(segment);
    }
}

/// Renders documents with in-place error markers.
#[derive(Debug, Clone, Copy)]
pub struct AnnotationRenderer {
    marker_limit: usize,
}

impl Default for AnnotationRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl AnnotationRenderer {
    /// Creates a renderer with the default marker limit.
    pub fn new() -> Self {
        Self {
            marker_limit: DEFAULT_MARKER_LIMIT,
        }
    }

    /// Sets how many ids a marker group lists before it is truncated.
    pub fn with_marker_limit(mut self, limit: usize) -> Self {
        self.marker_limit = limit;
        self
    }

    /// Annotates `buffer` with the given sorted, numbered errors.
    pub fn annotate(&self, buffer: &str, errors: &[ErrorRef]) -> Annotation {
        // Index 0 is the synthetic empty line so that line numbers index directly.
        let mut lines: Vec<Vec<AnnotatedCharacter<'_>>> = std::iter::once(Vec::new())
            .chain(
                buffer
                    .split('\n')
                    .map(|line| line.chars().map(AnnotatedCharacter::new).collect()),
            )
            .collect();

        let annotated = place_errors(&mut lines, errors);
        debug!(
            "Annotated {} of {} errors on {} lines",
            annotated.len(),
            errors.len(),
            lines.len() - 1
        );

        let mut writer = SegmentWriter::default();
        for (line_no, line) in lines.iter().enumerate().skip(1) {
            if line_no != 1 {
                writer.push(Segment::LineBreak);
            }
            for c in line {
                let ends = !c.ending.is_empty();

                if writer.highlighting && ends {
                    writer.close_highlight();
                }
                if ends {
                    writer.push(Segment::Marker(self.marker_group(&c.ending)));
                }
                if !c.starting.is_empty() {
                    writer.open_highlight();
                }
                // An error may start and end on the same character.
                if writer.highlighting && ends {
                    writer.close_highlight();
                }

                writer.pending.push(c.ch);
            }
        }
        writer.flush(false);

        Annotation {
            document: AnnotatedDocument {
                segments: writer.segments,
            },
            annotated,
        }
    }

    fn marker_group(&self, ending: &[&ErrorRef]) -> MarkerGroup {
        MarkerGroup {
            ids: ending.iter().take(self.marker_limit).map(|r| r.id).collect(),
            truncated: ending.len() > self.marker_limit,
        }
    }
}

/// Attaches every error to the characters of its end line.
fn place_errors<'a>(
    lines: &mut [Vec<AnnotatedCharacter<'a>>],
    errors: &'a [ErrorRef],
) -> BTreeSet<ErrorId> {
    let mut annotated = BTreeSet::new();

    for error_ref in errors {
        let range = error_ref.error.range;
        let line_no = range.end.line as usize;
        if line_no == 0 || line_no >= lines.len() {
            trace!(
                "Error {} ends on line {} outside the document; not annotated",
                error_ref.id, line_no
            );
            continue;
        }

        if !range.is_single_line() {
            trace!(
                "Error {} spans lines {} to {}; placing it on line {}",
                error_ref.id, range.start.line, range.end.line, line_no
            );
        }

        let chars = &mut lines[line_no];
        let start = range.start.offset as usize;
        let end = range.end.offset as usize;

        if start != 0 || end != 0 {
            if let Some(c) = chars.get_mut(start) {
                c.starting.push(error_ref);
                annotated.insert(error_ref.id);
            }
        }
        if let Some(c) = chars.get_mut(end) {
            c.ending.push(error_ref);
            annotated.insert(error_ref.id);
        }
    }

    annotated
}

/// Annotates `buffer` with the default marker limit.
pub fn annotate(buffer: &str, errors: &[ErrorRef]) -> Annotation {
    AnnotationRenderer::new().annotate(buffer, errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::number;
    use crate::ValidationError;
    use markpen_ast::{Position, Range};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn error(start: (u32, u32), end: (u32, u32)) -> ValidationError {
        ValidationError::new(
            "Test",
            "message",
            Range::new(Position::new(start.0, start.1), Position::new(end.0, end.1)),
        )
    }

    fn plain(s: &str) -> Segment {
        Segment::Plain(s.to_string())
    }

    fn highlight(s: &str) -> Segment {
        Segment::Highlight(s.to_string())
    }

    fn marker(ids: &[usize], truncated: bool) -> Segment {
        Segment::Marker(MarkerGroup {
            ids: ids.iter().copied().map(ErrorId).collect(),
            truncated,
        })
    }

    #[test]
    fn test_annotate_single_error() {
        let errors = number(vec![error((1, 8), (1, 10))]);
        let annotation = annotate("This is is a pen.", &errors);

        assert_eq!(
            annotation.document.segments(),
            &[
                plain("This is "),
                highlight("is"),
                marker(&[1], false),
                plain(" a pen."),
            ]
        );
        assert!(annotation.is_annotated(ErrorId(1)));
    }

    #[test]
    fn test_annotate_without_errors() {
        let annotation = annotate("one\ntwo", &[]);

        assert_eq!(
            annotation.document.segments(),
            &[plain("one"), Segment::LineBreak, plain("two")]
        );
        assert!(annotation.annotated.is_empty());
    }

    #[test]
    fn test_annotate_empty_buffer() {
        let annotation = annotate("", &[]);
        assert!(annotation.document.segments().is_empty());
    }

    #[test]
    fn test_errors_ending_together_share_a_marker() {
        let errors = number(vec![error((1, 0), (1, 4)), error((1, 2), (1, 4))]);
        let annotation = annotate("abcdef", &errors);

        let markers: Vec<_> = annotation.document.markers().collect();
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].ids, vec![ErrorId(1), ErrorId(2)]);
        assert!(!markers[0].truncated);
    }

    #[rstest]
    #[case::at_limit(4, false)]
    #[case::over_limit(5, true)]
    #[case::far_over_limit(9, true)]
    fn test_marker_group_is_capped(#[case] count: usize, #[case] truncated: bool) {
        let errors = number((0..count).map(|_| error((1, 1), (1, 3))).collect());
        let annotation = annotate("abcdef", &errors);

        let markers: Vec<_> = annotation.document.markers().collect();
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].ids.len(), count.min(DEFAULT_MARKER_LIMIT));
        assert_eq!(markers[0].ids[0], ErrorId(1));
        assert_eq!(markers[0].truncated, truncated);
        assert_eq!(annotation.annotated.len(), count);
    }

    #[test]
    fn test_custom_marker_limit() {
        let errors = number((0..3).map(|_| error((1, 1), (1, 3))).collect());
        let annotation = AnnotationRenderer::new()
            .with_marker_limit(2)
            .annotate("abcdef", &errors);

        let group = annotation.document.markers().next().unwrap();
        assert_eq!(group.ids, vec![ErrorId(1), ErrorId(2)]);
        assert!(group.truncated);
    }

    #[test]
    fn test_single_character_span() {
        let errors = number(vec![error((1, 2), (1, 3))]);
        let annotation = annotate("abcdef", &errors);

        assert_eq!(
            annotation.document.segments(),
            &[plain("ab"), highlight("c"), marker(&[1], false), plain("def")]
        );
    }

    #[test]
    fn test_zero_width_span_renders_marker_only() {
        let errors = number(vec![error((1, 3), (1, 3))]);
        let annotation = annotate("abcdef", &errors);

        assert_eq!(
            annotation.document.segments(),
            &[plain("abc"), marker(&[1], false), plain("def")]
        );
        assert!(annotation.is_annotated(ErrorId(1)));
    }

    #[test]
    fn test_zero_position_marks_line_start() {
        let errors = number(vec![error((2, 0), (2, 0))]);
        let annotation = annotate("ab\ncd", &errors);

        assert_eq!(
            annotation.document.segments(),
            &[
                plain("ab"),
                Segment::LineBreak,
                marker(&[1], false),
                plain("cd"),
            ]
        );
    }

    #[test]
    fn test_multi_line_range_is_placed_on_end_line() {
        let errors = number(vec![error((1, 2), (2, 3))]);
        let annotation = annotate("abcdef\nghijkl", &errors);

        assert_eq!(
            annotation.document.segments(),
            &[
                plain("abcdef"),
                Segment::LineBreak,
                plain("gh"),
                highlight("i"),
                marker(&[1], false),
                plain("jkl"),
            ]
        );
    }

    #[test]
    fn test_nested_errors() {
        // Sorted by end: (1,2)-(1,4) gets id 1, (1,0)-(1,6) gets id 2.
        let errors = number(vec![error((1, 2), (1, 4)), error((1, 0), (1, 6))]);
        let annotation = annotate("abcdefgh", &errors);

        assert_eq!(
            annotation.document.segments(),
            &[
                plain("ab"),
                highlight("cd"),
                marker(&[1], false),
                plain("ef"),
                marker(&[2], false),
                plain("gh"),
            ]
        );
    }

    #[rstest]
    #[case::line_past_end(error((3, 0), (3, 1)))]
    #[case::line_zero(error((0, 1), (0, 2)))]
    fn test_out_of_range_errors_are_skipped(#[case] outside: ValidationError) {
        let errors = number(vec![error((1, 0), (1, 1)), outside]);
        let annotation = annotate("ab\ncd", &errors);

        assert!(annotation.is_annotated(ErrorId(1)));
        assert!(!annotation.is_annotated(ErrorId(2)));
        assert_eq!(annotation.document.markers().count(), 1);
        assert_eq!(annotation.document.source_text(), "ab\ncd");
    }

    #[test]
    fn test_end_past_line_length_still_annotates_start() {
        let errors = number(vec![error((1, 1), (1, 9))]);
        let annotation = annotate("abc", &errors);

        assert_eq!(annotation.document.segments(), &[plain("a"), plain("bc")]);
        assert!(annotation.is_annotated(ErrorId(1)));
        assert_eq!(annotation.document.markers().count(), 0);
    }

    #[test]
    fn test_open_highlight_is_plain_across_line_break() {
        let errors = number(vec![error((1, 1), (1, 9)), error((2, 0), (2, 1))]);
        let annotation = annotate("abc\ndef", &errors);

        assert_eq!(
            annotation.document.segments(),
            &[
                plain("a"),
                plain("bc"),
                Segment::LineBreak,
                highlight("d"),
                marker(&[2], false),
                plain("ef"),
            ]
        );
        assert_eq!(annotation.document.source_text(), "abc\ndef");
    }

    #[test]
    fn test_start_on_end_character_is_closed_immediately() {
        let errors = number(vec![error((1, 0), (1, 2)), error((1, 2), (1, 4))]);
        let annotation = annotate("abcdef", &errors);

        assert_eq!(
            annotation.document.segments(),
            &[
                highlight("ab"),
                marker(&[1], false),
                plain("cd"),
                marker(&[2], false),
                plain("ef"),
            ]
        );
        assert!(annotation.is_annotated(ErrorId(2)));
    }

    #[test]
    fn test_offsets_past_line_end_are_not_annotated() {
        let errors = number(vec![error((1, 5), (1, 9))]);
        let annotation = annotate("abc", &errors);

        assert_eq!(annotation.document.segments(), &[plain("abc")]);
        assert!(!annotation.is_annotated(ErrorId(1)));
    }

    #[test]
    fn test_annotate_never_drops_characters() {
        let texts = [
            "This is is a pen.",
            "first\nsecond line\n\nfourth\n",
            "分散処理\nです。",
            "",
            "\n",
        ];
        let errors = number(vec![
            error((1, 0), (1, 2)),
            error((1, 1), (1, 3)),
            error((2, 2), (2, 2)),
            error((2, 0), (2, 4)),
            error((2, 3), (2, 4)),
            error((4, 1), (4, 5)),
            error((7, 0), (7, 1)),
        ]);

        for text in texts {
            let annotation = annotate(text, &errors);
            assert_eq!(annotation.document.source_text(), text);
        }
    }

    #[test]
    fn test_marker_ids_increase_in_reading_order() {
        let errors = number(vec![
            error((1, 0), (1, 1)),
            error((1, 2), (1, 3)),
            error((2, 0), (2, 2)),
        ]);
        let annotation = annotate("abcd\nefgh", &errors);

        let ids: Vec<ErrorId> = annotation
            .document
            .markers()
            .flat_map(|m| m.ids.iter().copied())
            .collect();
        assert_eq!(ids, vec![ErrorId(1), ErrorId(2), ErrorId(3)]);
    }

    #[test]
    fn test_segment_serialization() {
        let errors = number(vec![error((1, 0), (1, 1))]);
        let annotation = annotate("ab", &errors);
        let json = serde_json::to_value(&annotation.document).unwrap();

        assert_eq!(json[0]["kind"], "highlight");
        assert_eq!(json[0]["value"], "a");
        assert_eq!(json[1]["kind"], "marker");
        assert_eq!(json[1]["value"]["ids"][0], 1);
        assert_eq!(json[2]["kind"], "plain");
    }
}
