//! Whole-document operations
//!
//! Hosts that hold the full text rather than a live editor buffer use these
//! to reflow one paragraph by line number or every paragraph at once.

use tracing::debug;

use crate::boundary::{VerbatimTracker, paragraph_boundary, scan};
use crate::classify::line_too_long;
use crate::edit::Edit;
use crate::error::Result;
use crate::line::{LineSource, TextLines};
use crate::reflow::reflow;
use crate::settings::Settings;

/// Reflow the paragraph containing `line`.
pub fn reflow_paragraph_at(source: &str, line: usize, settings: &Settings) -> Result<Edit> {
    let lines = TextLines::new(source);
    let boundary = paragraph_boundary(&lines, line)?;
    let original = lines.text_range(boundary.line_start, boundary.line_end)?;
    let replacement = reflow(&boundary, &original, settings);

    Ok(Edit {
        line_start: boundary.line_start,
        line_end: boundary.line_end,
        original,
        replacement,
    })
}

/// Reflow every paragraph of `source`.
///
/// Frontmatter and fenced code blocks are copied as they are. A trailing
/// newline is kept; `\r\n` separators become `\n`.
pub fn format_document(source: &str, settings: &Settings) -> Result<String> {
    let lines = TextLines::new(source);
    let max = lines.max_line_number()?;
    let mut regions = VerbatimTracker::default();
    let mut produced = Vec::new();
    let mut paragraphs = 0usize;

    let mut next = 0;
    while next <= max {
        let verbatim = regions.advance(lines.line_at(next)?.text);
        let boundary = scan(&lines, next, max, verbatim)?;
        debug_assert_eq!(boundary.line_start, next);
        for number in boundary.line_start + 1..=boundary.line_end {
            regions.advance(lines.line_at(number)?.text);
        }

        let original = lines.text_range(boundary.line_start, boundary.line_end)?;
        produced.push(reflow(&boundary, &original, settings));
        paragraphs += 1;
        next = boundary.line_end + 1;
    }

    debug!(lines = max + 1, paragraphs, "formatted document");
    Ok(produced.join("\n"))
}

/// Format the document only when `format_on_save` is enabled.
pub fn format_on_save(source: &str, settings: &Settings) -> Result<Option<String>> {
    if !settings.format_on_save {
        return Ok(None);
    }
    format_document(source, settings).map(Some)
}

/// Zero-based numbers of lines wider than the preferred length, ignoring
/// frontmatter and fenced code.
pub fn overlong_lines(text: &str, settings: &Settings) -> Vec<usize> {
    let mut regions = VerbatimTracker::default();
    TextLines::new(text)
        .lines()
        .iter()
        .enumerate()
        .filter(|(_, line)| !regions.advance(line))
        .filter(|(_, line)| line_too_long(line, settings.preferred_line_length))
        .map(|(number, _)| number)
        .collect()
}
