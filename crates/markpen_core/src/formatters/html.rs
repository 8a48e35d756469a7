//! HTML rendering of annotated documents.

use std::fmt::Write;

use crate::annotate::{AnnotatedDocument, MarkerGroup, Segment};
use crate::render::ErrorEntry;

/// CSS class of the element wrapping the whole document.
pub const DOCUMENT_CLASS: &str = "markpen-annotated";

/// CSS class of marker group elements.
pub const MARKER_CLASS: &str = "markpen-marker";

/// CSS class added to list entries that could not be placed in the document.
pub const UNANNOTATED_CLASS: &str = "markpen-unannotated";

/// Renders an annotated document as HTML.
///
/// Plain runs become `<span>`, highlighted runs `<i>`, line breaks `<br/>`
/// and marker groups a `<div>` listing their ids. All text is escaped.
pub fn to_html(document: &AnnotatedDocument) -> String {
    let mut html = format!("<span class=\"{}\">", DOCUMENT_CLASS);
    for segment in document.segments() {
        match segment {
            Segment::Plain(run) => {
                let _ = write!(html, "<span>{}</span>", html_escape::encode_text(run));
            }
            Segment::Highlight(run) => {
                let _ = write!(html, "<i>{}</i>", html_escape::encode_text(run));
            }
            Segment::Marker(group) => {
                let _ = write!(
                    html,
                    "<div class=\"{}\">{}</div>",
                    MARKER_CLASS,
                    marker_label(group)
                );
            }
            Segment::LineBreak => html.push_str("<br/>"),
        }
    }
    html.push_str("</span>");
    html
}

/// Renders the numbered error list as an ordered HTML list.
pub fn errors_to_html(errors: &[ErrorEntry]) -> String {
    let mut html = String::from("<ol class=\"markpen-errors\">");
    for entry in errors {
        let error = &entry.error_ref.error;
        let class = if entry.annotated {
            String::new()
        } else {
            format!(" class=\"{}\"", UNANNOTATED_CLASS)
        };
        let _ = write!(
            html,
            "<li value=\"{}\"{}>{}<div class=\"markpen-validator\">{}</div></li>",
            entry.error_ref.id,
            class,
            html_escape::encode_text(&error.message),
            html_escape::encode_text(&error.validator_name)
        );
    }
    html.push_str("</ol>");
    html
}

fn marker_label(group: &MarkerGroup) -> String {
    let mut label = group
        .ids
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",");
    if group.truncated {
        label.push_str("&hellip;");
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::number;
    use crate::annotate::annotate;
    use crate::ValidationError;
    use markpen_ast::{Position, Range};

    fn error(start: u32, end: u32) -> ValidationError {
        ValidationError::new(
            "Test",
            "message",
            Range::new(Position::new(1, start), Position::new(1, end)),
        )
    }

    #[test]
    fn test_to_html() {
        let errors = number(vec![error(8, 10)]);
        let annotation = annotate("This is is a pen.", &errors);

        insta::assert_snapshot!(
            to_html(&annotation.document),
            @r#"<span class="markpen-annotated"><span>This is </span><i>is</i><div class="markpen-marker">1</div><span> a pen.</span></span>"#
        );
    }

    #[test]
    fn test_to_html_escapes_text() {
        let errors = number(vec![error(0, 3)]);
        let annotation = annotate("<b>&\nnext", &errors);

        insta::assert_snapshot!(
            to_html(&annotation.document),
            @r#"<span class="markpen-annotated"><i>&lt;b&gt;</i><div class="markpen-marker">1</div><span>&amp;</span><br/><span>next</span></span>"#
        );
    }

    #[test]
    fn test_errors_to_html() {
        let results = vec![crate::SentenceResult::new(
            "x",
            vec![
                error(0, 1),
                ValidationError::new(
                    "Test",
                    "message",
                    Range::new(Position::new(3, 0), Position::new(3, 1)),
                ),
            ],
        )];
        let mut rendering = crate::render("a<b", &results, &crate::MarkpenConfig::new());
        rendering.errors[0].error_ref.error.message = "Use \"&\"".to_string();

        insta::assert_snapshot!(
            errors_to_html(&rendering.errors),
            @r#"<ol class="markpen-errors"><li value="1">Use "&amp;"<div class="markpen-validator">Test</div></li><li value="2" class="markpen-unannotated">message<div class="markpen-validator">Test</div></li></ol>"#
        );
    }

    #[test]
    fn test_to_html_truncated_marker() {
        let errors = number((0..5).map(|_| error(1, 2)).collect());
        let annotation = annotate("abc", &errors);

        assert!(to_html(&annotation.document)
            .contains("<div class=\"markpen-marker\">1,2,3,4&hellip;</div>"));
    }
}
