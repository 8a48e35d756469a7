//! One-call rendering of a validation response against its document.

use serde::Serialize;
use tracing::info;

use crate::aggregate::{self, ErrorRef};
use crate::annotate::{AnnotatedDocument, AnnotationRenderer};
use crate::formatters::headline;
use crate::{MarkpenConfig, SentenceResult};

/// An error from the rendered list, with whether it was placed in the
/// document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorEntry {
    #[serde(flatten)]
    pub error_ref: ErrorRef,
    pub annotated: bool,
}

/// The annotated document together with the numbered error list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rendering {
    pub document: AnnotatedDocument,
    pub errors: Vec<ErrorEntry>,
    /// Number of errors in the response, placed or not.
    pub total: usize,
}

impl Rendering {
    /// Summary line for the error count.
    pub fn headline(&self) -> String {
        headline(self.total)
    }
}

/// Sorts and numbers the errors of `results`, then annotates `text` with them.
pub fn render(text: &str, results: &[SentenceResult], config: &MarkpenConfig) -> Rendering {
    let errors = aggregate::collect(results);
    let annotation = AnnotationRenderer::new()
        .with_marker_limit(config.marker_limit)
        .annotate(text, &errors);

    let total = errors.len();
    info!(
        "Rendered {} errors ({} annotated in place)",
        total,
        annotation.annotated.len()
    );

    let errors = errors
        .into_iter()
        .map(|error_ref| ErrorEntry {
            annotated: annotation.is_annotated(error_ref.id),
            error_ref,
        })
        .collect();

    Rendering {
        document: annotation.document,
        errors,
        total,
    }
}
