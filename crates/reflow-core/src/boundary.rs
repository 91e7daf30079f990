//! Paragraph boundary detection
//!
//! Starting from one line, walk up and down until something ends the
//! paragraph: a blank line, a heading, a rule, a fence, a frontmatter
//! delimiter, a new list item, or a change in block-quote depth.

use serde::Serialize;
use tracing::{debug, trace};

use crate::classify::{
    LineKind, classify, is_blank, is_code_fence_delimiter, is_frontmatter_delimiter,
    is_heading_underline, list_marker, split_block_quote,
};
use crate::error::{Error, Result};
use crate::line::{Line, LineSource};

/// How a paragraph's lines are prefixed, derived from its first line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Metadata {
    /// Characters put after the quote prefix on every continuation line.
    pub indent: String,
    /// Literal list marker of the first line (with its surrounding spaces),
    /// empty when the paragraph is not a list item.
    pub list_marker: String,
    /// Column after the quote prefix where list-item content starts.
    pub list_marker_width: usize,
    pub block_quote_depth: usize,
    pub is_list_item: bool,
    pub is_block_quote: bool,
    /// Frontmatter or fenced code: emit the lines untouched.
    pub is_verbatim: bool,
}

impl Metadata {
    /// Derive metadata from a paragraph's first line.
    pub fn from_first_line(line: &Line<'_>) -> Self {
        let (depth, content) = split_block_quote(line.text);
        let marker = if classify(line.text).is_list_item() {
            list_marker(content)
        } else {
            None
        };

        match marker {
            Some(marker) => {
                let width = marker.chars().count();
                Self {
                    indent: " ".repeat(width),
                    list_marker: marker.to_string(),
                    list_marker_width: width,
                    block_quote_depth: depth,
                    is_list_item: true,
                    is_block_quote: depth > 0,
                    is_verbatim: false,
                }
            }
            None => {
                let content_line = if depth == 0 {
                    *line
                } else {
                    Line::new(line.number, content)
                };
                Self {
                    indent: content_line.indent().to_string(),
                    block_quote_depth: depth,
                    is_block_quote: depth > 0,
                    ..Self::default()
                }
            }
        }
    }

    fn verbatim() -> Self {
        Self {
            is_verbatim: true,
            ..Self::default()
        }
    }

    /// `"> "` repeated to the block-quote depth.
    pub fn quote_prefix(&self) -> String {
        "> ".repeat(self.block_quote_depth)
    }

    /// Prefix of the first produced line.
    pub fn first_line_prefix(&self) -> String {
        if self.is_list_item {
            format!("{}{}", self.quote_prefix(), self.list_marker)
        } else {
            format!("{}{}", self.quote_prefix(), self.indent)
        }
    }

    /// Prefix of every produced line after the first.
    pub fn continuation_prefix(&self) -> String {
        format!("{}{}", self.quote_prefix(), self.indent)
    }
}

/// Inclusive, zero-based line range of one paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParagraphBoundary {
    pub line_start: usize,
    pub line_end: usize,
    pub metadata: Metadata,
}

impl ParagraphBoundary {
    pub fn new(line_start: usize, line_end: usize, metadata: Metadata) -> Result<Self> {
        if line_start > line_end {
            return Err(Error::InvalidBoundary {
                start: line_start,
                end: line_end,
            });
        }
        Ok(Self {
            line_start,
            line_end,
            metadata,
        })
    }

    pub fn line_count(&self) -> usize {
        self.line_end - self.line_start + 1
    }

    pub fn contains(&self, line: usize) -> bool {
        (self.line_start..=self.line_end).contains(&line)
    }
}

/// Find the paragraph containing `starting_line`.
///
/// # Errors
///
/// [`Error::LineOutOfRange`] when `starting_line` is past the end of the
/// document, [`Error::EmptyDocument`] when there are no lines.
pub fn paragraph_boundary<S>(lines: &S, starting_line: usize) -> Result<ParagraphBoundary>
where
    S: LineSource + ?Sized,
{
    let max = lines.max_line_number()?;
    if starting_line > max {
        return Err(Error::out_of_range(starting_line, max));
    }

    let mut regions = VerbatimTracker::default();
    let mut verbatim = false;
    for number in 0..=starting_line {
        verbatim = regions.advance(lines.line_at(number)?.text);
    }
    scan(lines, starting_line, max, verbatim)
}

/// Find the first paragraph of a document, skipping a leading frontmatter
/// block and any blank lines after it.
pub fn document_boundary<S>(lines: &S) -> Result<ParagraphBoundary>
where
    S: LineSource + ?Sized,
{
    let max = lines.max_line_number()?;
    let mut first = 0;

    if is_frontmatter_delimiter(lines.line_at(0)?.text) {
        first = 1;
        while first <= max && !is_frontmatter_delimiter(lines.line_at(first)?.text) {
            first += 1;
        }
        first += 1;
        debug!(content_line = first, "skipped frontmatter");
    }
    while first <= max && is_blank(lines.line_at(first)?.text) {
        first += 1;
    }

    paragraph_boundary(lines, first.min(max))
}

/// Boundary of the paragraph at `start`, given whether `start` sits inside
/// frontmatter or a fenced code block.
pub(crate) fn scan<S>(
    lines: &S,
    start: usize,
    max: usize,
    verbatim: bool,
) -> Result<ParagraphBoundary>
where
    S: LineSource + ?Sized,
{
    if verbatim {
        trace!(line = start, "verbatim line");
        return ParagraphBoundary::new(start, start, Metadata::verbatim());
    }

    let line = lines.line_at(start)?;
    let text = line.text;
    let (depth, content) = split_block_quote(text);
    let kind = classify(text);
    trace!(line = start, ?kind, depth, "classified starting line");

    if is_heading_underline(content) && start > 0 {
        let above = lines.line_at(start - 1)?.text;
        if classify(above) == LineKind::Text && split_block_quote(above).0 == depth {
            let top = scan_backward(lines, start - 1, depth)?;
            let metadata = Metadata::from_first_line(&lines.line_at(top)?);
            if !metadata.is_list_item {
                debug!(line_start = top, line_end = start, "setext heading");
                return ParagraphBoundary::new(top, start, metadata);
            }
        }
    }

    if kind.is_standalone() {
        return ParagraphBoundary::new(start, start, Metadata::from_first_line(&line));
    }

    let top = scan_backward(lines, start, depth)?;
    let metadata = Metadata::from_first_line(&lines.line_at(top)?);
    let bottom = scan_forward(lines, start, max, depth, metadata.is_list_item)?;

    debug!(
        line_start = top,
        line_end = bottom,
        list = metadata.is_list_item,
        depth,
        "paragraph boundary"
    );
    ParagraphBoundary::new(top, bottom, metadata)
}

fn scan_backward<S>(lines: &S, start: usize, depth: usize) -> Result<usize>
where
    S: LineSource + ?Sized,
{
    let mut top = start;
    if classify(lines.line_at(top)?.text).is_list_item() {
        return Ok(top);
    }
    while top > 0 {
        let text = lines.line_at(top - 1)?.text;
        if split_block_quote(text).0 != depth {
            break;
        }
        let kind = classify(text);
        if kind.is_standalone() {
            break;
        }
        top -= 1;
        if kind.is_list_item() {
            break;
        }
    }
    Ok(top)
}

fn scan_forward<S>(
    lines: &S,
    start: usize,
    max: usize,
    depth: usize,
    is_list_item: bool,
) -> Result<usize>
where
    S: LineSource + ?Sized,
{
    let mut bottom = start;
    while bottom < max {
        let text = lines.line_at(bottom + 1)?.text;
        let (next_depth, content) = split_block_quote(text);
        if next_depth != depth {
            break;
        }
        if is_heading_underline(content) && !is_list_item {
            bottom += 1;
            break;
        }
        let kind = classify(text);
        if kind.is_standalone() || kind.is_list_item() {
            break;
        }
        bottom += 1;
    }
    Ok(bottom)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Region {
    #[default]
    DocumentStart,
    Normal,
    Frontmatter,
    Fence {
        marker: char,
        width: usize,
    },
}

/// Tracks frontmatter and fenced code blocks line by line.
#[derive(Debug, Default)]
pub(crate) struct VerbatimTracker {
    region: Region,
}

impl VerbatimTracker {
    /// Feed the next line; returns whether it must be left untouched.
    pub(crate) fn advance(&mut self, text: &str) -> bool {
        match self.region {
            Region::DocumentStart if is_frontmatter_delimiter(text) => {
                self.region = Region::Frontmatter;
                true
            }
            Region::DocumentStart | Region::Normal => {
                self.region = Region::Normal;
                match fence_opening(text) {
                    Some((marker, width)) => {
                        self.region = Region::Fence { marker, width };
                        true
                    }
                    None => false,
                }
            }
            Region::Frontmatter => {
                if is_frontmatter_delimiter(text) {
                    self.region = Region::Normal;
                }
                true
            }
            Region::Fence { marker, width } => {
                if matches!(fence_opening(text), Some((closing, run)) if closing == marker && run >= width)
                {
                    self.region = Region::Normal;
                }
                true
            }
        }
    }
}

fn fence_opening(text: &str) -> Option<(char, usize)> {
    let (_, content) = split_block_quote(text);
    if !is_code_fence_delimiter(content) {
        return None;
    }
    let trimmed = content.trim_start();
    let marker = trimmed.chars().next()?;
    let width = trimmed.chars().take_while(|&c| c == marker).count();
    Some((marker, width))
}
