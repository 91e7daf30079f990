//! Line-range replacement produced by a reflow.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::line::{LineSource, TextLines};

/// Replace lines `line_start..=line_end` with `replacement`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edit {
    pub line_start: usize,
    pub line_end: usize,
    /// Text the range held before the edit, lines joined with `\n`.
    pub original: String,
    /// New text for the range, lines joined with `\n`.
    pub replacement: String,
}

impl Edit {
    /// Whether applying the edit would leave the text as it is.
    pub fn is_noop(&self) -> bool {
        self.original == self.replacement
    }

    /// Apply the edit to `source`.
    ///
    /// Lines outside the range are kept; all line separators in the result
    /// are `\n`.
    pub fn apply(&self, source: &str) -> Result<String> {
        let lines = TextLines::new(source);
        let max = lines.max_line_number()?;
        if self.line_start > self.line_end {
            return Err(Error::InvalidBoundary {
                start: self.line_start,
                end: self.line_end,
            });
        }
        if self.line_end > max {
            return Err(Error::out_of_range(self.line_end, max));
        }

        let all = lines.lines();
        let mut out: Vec<&str> = Vec::with_capacity(all.len());
        out.extend(all[..self.line_start].iter().map(String::as_str));
        out.push(&self.replacement);
        out.extend(all[self.line_end + 1..].iter().map(String::as_str));
        Ok(out.join("\n"))
    }
}
