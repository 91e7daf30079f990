//! Line classification
//!
//! Stateless predicates over a single line's leading characters. None of
//! them look at neighbouring lines; deciding what a line means in context is
//! the scanner's job.

use std::sync::LazyLock;

use regex::Regex;

/// Digits, a dot, then at least one space. Content after the spaces is optional.
static ORDERED_LIST_START: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^ *\d+\. +").unwrap());

/// `*` or `-` followed by at least one space.
static UNORDERED_LIST_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ *[*-] +").unwrap());

/// Leading run of spaces and `>` up to the last `>` in that run.
static BLOCK_QUOTE_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[ >]*>").unwrap());

static ATX_HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^ {0,3}#{1,6}(?: |$)").unwrap());

static HORIZONTAL_RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:(?:\* *){3,}|(?:- *){3,}|(?:_ *){3,})$").unwrap());

static CODE_FENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^ *(?:`{3,}|~{3,})").unwrap());

/// What a line's leading syntax says it is, ignoring any block-quote prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    CodeFence,
    FrontmatterDelimiter,
    HorizontalRule,
    HeadingUnderline,
    AtxHeading,
    OrderedListItem,
    UnorderedListItem,
    Text,
}

impl LineKind {
    /// Lines that never join a paragraph with their neighbours.
    pub fn is_standalone(self) -> bool {
        !matches!(
            self,
            Self::OrderedListItem | Self::UnorderedListItem | Self::Text
        )
    }

    pub fn is_list_item(self) -> bool {
        matches!(self, Self::OrderedListItem | Self::UnorderedListItem)
    }
}

/// Classify `line` after removing its block-quote prefix.
///
/// Precedence matters: `---` is a frontmatter delimiter before it is a rule
/// or an underline, and `* * *` is a rule rather than a list item.
pub fn classify(line: &str) -> LineKind {
    let (_, content) = split_block_quote(line);
    if content.trim().is_empty() {
        LineKind::Blank
    } else if is_code_fence_delimiter(content) {
        LineKind::CodeFence
    } else if is_frontmatter_delimiter(content) {
        LineKind::FrontmatterDelimiter
    } else if is_horizontal_rule(content) {
        LineKind::HorizontalRule
    } else if is_heading_underline(content) {
        LineKind::HeadingUnderline
    } else if is_atx_heading(content) {
        LineKind::AtxHeading
    } else if is_ordered_list_start(content) {
        LineKind::OrderedListItem
    } else if is_unordered_list_start(content) {
        LineKind::UnorderedListItem
    } else {
        LineKind::Text
    }
}

pub fn is_ordered_list_start(line: &str) -> bool {
    ORDERED_LIST_START.is_match(line)
}

pub fn is_unordered_list_start(line: &str) -> bool {
    UNORDERED_LIST_START.is_match(line)
}

pub fn is_list_start(line: &str) -> bool {
    is_ordered_list_start(line) || is_unordered_list_start(line)
}

/// The literal list marker at the start of `line`: leading spaces, the
/// marker itself and the spaces after it.
pub fn list_marker(line: &str) -> Option<&str> {
    ORDERED_LIST_START
        .find(line)
        .or_else(|| UNORDERED_LIST_START.find(line))
        .map(|m| m.as_str())
}

/// True when the leading run of the line holds only spaces and `>` and at
/// least one `>`.
///
/// Irregular spacing between markers (`" >  >  >"`) is accepted.
pub fn is_block_quote(line: &str) -> bool {
    BLOCK_QUOTE_PREFIX.is_match(line)
}

/// Number of `>` markers in the leading run.
pub fn block_quote_depth(line: &str) -> usize {
    BLOCK_QUOTE_PREFIX
        .find(line)
        .map_or(0, |m| m.as_str().matches('>').count())
}

/// Split a line into its block-quote depth and the content after the last
/// marker (and one optional space following it).
pub fn split_block_quote(line: &str) -> (usize, &str) {
    match BLOCK_QUOTE_PREFIX.find(line) {
        Some(m) => {
            let rest = &line[m.end()..];
            let content = rest.strip_prefix(' ').unwrap_or(rest);
            (m.as_str().matches('>').count(), content)
        }
        None => (0, line),
    }
}

/// A line of only `=` or only `-`, as found under a setext heading.
pub fn is_heading_underline(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && (trimmed.chars().all(|c| c == '=') || trimmed.chars().all(|c| c == '-'))
}

pub fn is_atx_heading(line: &str) -> bool {
    ATX_HEADING.is_match(line)
}

/// Three or more of the same `*`, `-` or `_`, optionally space separated.
pub fn is_horizontal_rule(line: &str) -> bool {
    HORIZONTAL_RULE.is_match(line.trim())
}

pub fn is_code_fence_delimiter(line: &str) -> bool {
    CODE_FENCE.is_match(line)
}

pub fn is_frontmatter_delimiter(line: &str) -> bool {
    line.trim() == "---"
}

/// Whitespace only once any block-quote prefix is removed.
pub fn is_blank(line: &str) -> bool {
    split_block_quote(line).1.trim().is_empty()
}

/// Whether `text` is longer than `max_length` characters.
///
/// Exactly that comparison: `("", 0)` is not too long, `("x", 0)` is.
pub fn line_too_long(text: &str, max_length: i64) -> bool {
    exceeds(text.chars().count(), max_length)
}

pub(crate) fn exceeds(length: usize, max_length: i64) -> bool {
    i64::try_from(length).map_or(true, |len| len > max_length)
}
