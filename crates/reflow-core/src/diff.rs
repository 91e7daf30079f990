//! Line diffs between original and reflowed text

use similar::{ChangeTag, TextDiff};

/// Summary of what a reflow changed.
#[derive(Debug, Clone, PartialEq)]
pub struct ReflowDiff {
    /// Whether the texts differ at all.
    pub changed: bool,
    pub lines_added: usize,
    pub lines_removed: usize,
    /// Similarity ratio (0.0 to 1.0)
    pub similarity: f64,
}

impl ReflowDiff {
    pub fn unchanged() -> Self {
        Self {
            changed: false,
            lines_added: 0,
            lines_removed: 0,
            similarity: 1.0,
        }
    }

    /// Compare two texts line by line.
    pub fn compute(old: &str, new: &str) -> Self {
        if old == new {
            return Self::unchanged();
        }

        let text_diff = TextDiff::from_lines(old, new);
        let mut lines_added = 0;
        let mut lines_removed = 0;
        for change in text_diff.iter_all_changes() {
            match change.tag() {
                ChangeTag::Insert => lines_added += 1,
                ChangeTag::Delete => lines_removed += 1,
                ChangeTag::Equal => {}
            }
        }

        Self {
            changed: true,
            lines_added,
            lines_removed,
            similarity: f64::from(text_diff.ratio()),
        }
    }
}

impl Default for ReflowDiff {
    fn default() -> Self {
        Self::unchanged()
    }
}

/// Unified diff of `old` against `new`, both labelled `label`.
///
/// Empty when the texts are equal.
pub fn unified_diff(old: &str, new: &str, label: &str) -> String {
    if old == new {
        return String::new();
    }
    TextDiff::from_lines(old, new)
        .unified_diff()
        .context_radius(3)
        .header(label, label)
        .to_string()
}
