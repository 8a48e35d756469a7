//! # markpen_core
//!
//! Error position resolution and annotation engine.
//!
//! Given a document and the validation errors a service found in it, this
//! crate provides:
//! - Translation of logical `(line, offset)` positions to character indices
//!   ([`resolver`])
//! - Flattening and end-position ordering of grouped errors ([`aggregate`])
//! - In-place annotation with merged, capped marker groups ([`annotate`])
//! - A plain-text report with bounded context snippets ([`report`])
//!
//! Every operation is a pure function of its inputs.
//!
//! ## Example
//!
//! ```rust
//! use markpen_core::{MarkpenConfig, ValidationResponse, render, report};
//!
//! let response = ValidationResponse::from_json(r#"{
//!     "errors": [{
//!         "sentence": "This is is a pen.",
//!         "errors": [{
//!             "message": "Found word \"is\" repeated twice in succession.",
//!             "validator": "SuccessiveWord",
//!             "subsentence": { "offset": 8, "length": 2 },
//!             "position": {
//!                 "start": { "line": 1, "offset": 8 },
//!                 "end": { "line": 1, "offset": 10 }
//!             }
//!         }]
//!     }]
//! }"#)?;
//!
//! let config = MarkpenConfig::default();
//! let rendering = render("This is is a pen.", &response.errors, &config);
//! assert_eq!(rendering.headline(), "Found 1 error");
//!
//! let text = report::format_all(&response.errors, config.context_width);
//! assert!(text.starts_with("Line 1:8"));
//! # Ok::<(), markpen_core::MarkpenError>(())
//! ```

pub mod aggregate;
pub mod annotate;
mod config;
pub mod cursor;
mod diagnostic;
mod error;
pub mod formatters;
mod render;
pub mod report;
pub mod resolver;
pub mod session;

pub use aggregate::{ErrorId, ErrorRef};
pub use annotate::{AnnotatedDocument, Annotation, AnnotationRenderer, MarkerGroup, Segment};
pub use config::MarkpenConfig;
pub use cursor::{EditorSurface, jump_to_error};
pub use diagnostic::{SentenceResult, ValidationError, ValidationResponse};
pub use error::MarkpenError;
pub use render::{ErrorEntry, Rendering, render};

pub use markpen_ast::{Position, Range, SubSentenceSpan};
