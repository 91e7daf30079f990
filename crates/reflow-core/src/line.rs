//! Line access abstraction
//!
//! The scanner never owns a document. It asks a [`LineSource`] for one line
//! at a time, so any host that can answer "what is on line N" (an editor
//! buffer, a file, a test fixture) can drive it.

use crate::error::{Error, Result};

/// A single line of a document, without its terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// Zero-based line number.
    pub number: usize,
    /// Line text without `\n` or `\r\n`.
    pub text: &'a str,
    /// Character offset of the first character that is not a space or a
    /// tab, or the character length of the line when there is none.
    pub first_non_whitespace_offset: usize,
}

impl<'a> Line<'a> {
    pub fn new(number: usize, text: &'a str) -> Self {
        let first_non_whitespace_offset = text
            .chars()
            .position(|c| !is_layout_space(c))
            .unwrap_or_else(|| text.chars().count());
        Self {
            number,
            text,
            first_non_whitespace_offset,
        }
    }

    /// Whether the line holds nothing but spaces and tabs.
    pub fn is_empty_or_whitespace(&self) -> bool {
        self.first_non_whitespace_offset == self.text.chars().count()
    }

    /// The leading run of spaces and tabs.
    pub fn indent(&self) -> &'a str {
        let end = self
            .text
            .char_indices()
            .nth(self.first_non_whitespace_offset)
            .map_or(self.text.len(), |(byte, _)| byte);
        &self.text[..end]
    }
}

/// Spaces and tabs separate words and form indentation. Other whitespace,
/// such as a non-breaking space, is ordinary text.
pub(crate) fn is_layout_space(c: char) -> bool {
    matches!(c, ' ' | '\t')
}

/// Capability for reading lines of a document by number.
pub trait LineSource {
    /// Return line `number`, failing with [`Error::LineOutOfRange`] when it
    /// is outside `[0, max_line_number]`.
    fn line_at(&self, number: usize) -> Result<Line<'_>>;

    /// Total number of lines.
    fn line_count(&self) -> usize;

    /// Highest valid line number (`line_count - 1`).
    fn max_line_number(&self) -> Result<usize> {
        self.line_count().checked_sub(1).ok_or(Error::EmptyDocument)
    }
}

/// In-memory document over a fixed list of lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextLines {
    lines: Vec<String>,
}

impl TextLines {
    /// Split `source` on `\r\n` or `\n`.
    ///
    /// Like an editor buffer, an empty source has one empty line and a
    /// trailing newline yields a final empty line.
    pub fn new(source: &str) -> Self {
        let lines = source
            .split('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l).to_string())
            .collect();
        Self { lines }
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Text of lines `start..=end` joined with `\n`.
    pub fn text_range(&self, start: usize, end: usize) -> Result<String> {
        if start > end {
            return Err(Error::InvalidBoundary { start, end });
        }
        let max = self.max_line_number()?;
        if end > max {
            return Err(Error::out_of_range(end, max));
        }
        Ok(self.lines[start..=end].join("\n"))
    }
}

impl LineSource for TextLines {
    fn line_at(&self, number: usize) -> Result<Line<'_>> {
        match self.lines.get(number) {
            Some(text) => Ok(Line::new(number, text)),
            None => Err(Error::out_of_range(
                number,
                self.lines.len().saturating_sub(1),
            )),
        }
    }

    fn line_count(&self) -> usize {
        self.lines.len()
    }
}
