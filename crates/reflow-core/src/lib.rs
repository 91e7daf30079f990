//! Paragraph detection and width-constrained reflow for Markdown text
//!
//! Finds the paragraph around a line, rewraps it to a preferred width and
//! re-emits block-quote markers and list indentation on every wrapped line.
//! Spaces inside inline code spans and link labels are never used as wrap
//! points.

pub mod boundary;
pub mod classify;
pub mod diff;
pub mod document;
pub mod edit;
pub mod error;
pub mod line;
pub mod protect;
pub mod reflow;
pub mod settings;

pub use boundary::{Metadata, ParagraphBoundary, document_boundary, paragraph_boundary};
pub use diff::{ReflowDiff, unified_diff};
pub use document::{format_document, format_on_save, overlong_lines, reflow_paragraph_at};
pub use edit::Edit;
pub use error::{Error, Result};
pub use line::{Line, LineSource, TextLines};
pub use protect::{
    SENTINEL, protect_code_span_spaces, protect_link_spaces, restore_protected_spaces,
};
pub use reflow::reflow;
pub use settings::{Settings, SettingsOverrides, get_settings};
