//! End-to-end flow through the library the way an editor host drives it
//!
//! settings from the host configuration -> boundary under the cursor ->
//! reflow -> replace the range in the buffer.

use pretty_assertions::assert_eq;
use reflow_core::{
    Line, LineSource, ReflowDiff, Result, Settings, document_boundary, format_document,
    get_settings, paragraph_boundary, reflow,
};
use reflow_test_utils::FixturePair;
use serde_json::json;

/// Minimal editable buffer standing in for an editor document.
struct EditorBuffer {
    lines: Vec<String>,
}

impl EditorBuffer {
    fn new(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(str::to_string).collect(),
        }
    }

    fn range_text(&self, start: usize, end: usize) -> String {
        self.lines[start..=end].join("\r\n")
    }

    /// Replace `start..=end` and return the number of lines inserted.
    fn replace(&mut self, start: usize, end: usize, text: &str) -> usize {
        let new: Vec<String> = text.split('\n').map(str::to_string).collect();
        let count = new.len();
        self.lines.splice(start..=end, new);
        count
    }

    fn text(&self) -> String {
        self.lines.join("\n")
    }
}

impl LineSource for EditorBuffer {
    fn line_at(&self, number: usize) -> Result<Line<'_>> {
        match self.lines.get(number) {
            Some(text) => Ok(Line::new(number, text)),
            None => Err(reflow_core::Error::out_of_range(
                number,
                self.lines.len().saturating_sub(1),
            )),
        }
    }

    fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// Reflow under the cursor, then move the cursor past the result, until the
/// end of the buffer.
fn walk_buffer(buffer: &mut EditorBuffer, settings: &Settings) {
    let mut cursor = 0;
    while cursor < buffer.line_count() {
        let boundary = paragraph_boundary(buffer, cursor).unwrap();
        let raw = buffer.range_text(boundary.line_start, boundary.line_end);
        let replacement = reflow(&boundary, &raw, settings);
        let inserted = buffer.replace(boundary.line_start, boundary.line_end, &replacement);
        cursor = boundary.line_start + inserted;
    }
}

#[test]
fn test_host_settings_to_buffer_edit() {
    let host_config = json!({
        "preferredLineLength": 30,
        "doubleSpaceBetweenSentences": true,
        "editor.fontSize": 14
    });
    let settings = get_settings(Some(&host_config)).unwrap();
    assert_eq!(settings.preferred_line_length, 30);

    let mut buffer = EditorBuffer::new(
        "# Notes\n\nFirst sentence here. Second sentence\nfollows on a new line.\n\nTail.",
    );
    let boundary = paragraph_boundary(&buffer, 3).unwrap();
    assert_eq!((boundary.line_start, boundary.line_end), (2, 3));

    let raw = buffer.range_text(2, 3);
    let replacement = reflow(&boundary, &raw, &settings);
    assert_eq!(
        replacement,
        "First sentence here.  Second\nsentence follows on a new\nline."
    );
    buffer.replace(2, 3, &replacement);

    assert_eq!(
        buffer.text(),
        "# Notes\n\nFirst sentence here.  Second\nsentence follows on a new\nline.\n\nTail."
    );
}

#[test]
fn test_cursor_walk_matches_format_document() {
    let pair = FixturePair::load("basics");
    let settings = Settings::default();

    let mut buffer = EditorBuffer::new(&pair.before);
    walk_buffer(&mut buffer, &settings);

    let formatted = format_document(&pair.before, &settings).unwrap();
    assert_eq!(buffer.text(), formatted);
    assert_eq!(formatted, pair.after.replace("\r\n", "\n"));
}

#[test]
fn test_walk_is_stable_on_formatted_text() {
    let pair = FixturePair::load("basics");
    let mut buffer = EditorBuffer::new(&pair.after);
    walk_buffer(&mut buffer, &Settings::default());

    let diff = ReflowDiff::compute(&pair.after.replace("\r\n", "\n"), &buffer.text());
    assert!(!diff.changed, "formatted fixture changed on a second pass");
}

#[test]
fn test_document_boundary_after_frontmatter() {
    let buffer = EditorBuffer::new("---\ntitle: x\n---\n\n\nBody line one\nline two\n\nNext");
    let boundary = document_boundary(&buffer).unwrap();
    assert_eq!((boundary.line_start, boundary.line_end), (5, 6));
}

#[test]
fn test_out_of_range_cursor() {
    let buffer = EditorBuffer::new("only line");
    assert!(paragraph_boundary(&buffer, 3).is_err());
}
