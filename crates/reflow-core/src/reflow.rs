//! Width-constrained paragraph reflow
//!
//! The paragraph's lines are stripped of their structural prefixes and
//! joined into one stream of words, which is then packed greedily into
//! lines no wider than the preferred length. Every produced line gets the
//! paragraph's quote prefix back; list items get their marker on the first
//! line and matching indentation on the rest.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::boundary::{Metadata, ParagraphBoundary};
use crate::classify::{classify, exceeds, is_heading_underline, list_marker, split_block_quote};
use crate::line::is_layout_space;
use crate::protect::{protect_code_span_spaces, protect_link_spaces, restore_protected_spaces};
use crate::settings::Settings;

/// A scheme-qualified or `www.` URL with nothing wrapped around it.
static BARE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[A-Za-z][A-Za-z0-9+.-]*://|www\.)\S+$").unwrap());

/// Rewrap `raw_text`, the lines `boundary.line_start..=boundary.line_end`
/// joined with line separators.
///
/// The result uses `\n` between lines. Blank paragraphs, lone structural
/// lines (headings, rules, fences) and verbatim regions come back unchanged
/// apart from line separators.
pub fn reflow(boundary: &ParagraphBoundary, raw_text: &str, settings: &Settings) -> String {
    let lines: Vec<&str> = raw_text
        .split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .collect();
    let metadata = &boundary.metadata;

    let passthrough = metadata.is_verbatim || classify(lines[0]).is_standalone();
    if passthrough {
        return lines.join("\n");
    }

    if settings.preferred_line_length <= 0 {
        warn!(
            width = settings.preferred_line_length,
            "non-positive preferred line length, every word gets its own line"
        );
    }

    let underline = match lines.split_last() {
        Some((last, body))
            if !body.is_empty()
                && !metadata.is_list_item
                && is_heading_underline(split_block_quote(last).1) =>
        {
            Some(*last)
        }
        _ => None,
    };
    let body = if underline.is_some() {
        &lines[..lines.len() - 1]
    } else {
        &lines[..]
    };

    let stream = logical_stream(body, metadata, settings);
    let protected = protect_link_spaces(&protect_code_span_spaces(&stream));
    let words = split_words(&protected);
    if words.is_empty() {
        return lines.join("\n");
    }

    let produced = match underline {
        Some(underline) => setext_heading(&words, underline, metadata, settings),
        None => wrap_words(&words, metadata, settings),
    };

    debug!(
        input_lines = lines.len(),
        output_lines = produced.len(),
        words = words.len(),
        "reflowed paragraph"
    );
    restore_protected_spaces(&produced.join("\n"))
}

/// One word of the stream and the whitespace width that followed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Word<'a> {
    text: &'a str,
    gap_after: usize,
}

/// Paragraph content with quote markers, the first line's list marker and
/// all leading indentation removed, lines joined by single spaces.
///
/// With double spacing on, a line that ends a sentence is joined to the
/// next with two spaces, so a sentence gap that fell on a line break is
/// still a sentence gap.
fn logical_stream(lines: &[&str], metadata: &Metadata, settings: &Settings) -> String {
    let mut stream = String::new();
    for (index, &line) in lines.iter().enumerate() {
        let mut content = if metadata.is_block_quote {
            split_block_quote(line).1
        } else {
            line
        };
        if index == 0 && metadata.is_list_item {
            if let Some(marker) = list_marker(content) {
                content = &content[marker.len()..];
            }
        }
        let content = content.trim_matches(is_layout_space);
        if content.is_empty() {
            continue;
        }
        if !stream.is_empty() {
            let sentence_break =
                settings.double_space_between_sentences && is_sentence_end(&stream);
            stream.push_str(if sentence_break { "  " } else { " " });
        }
        stream.push_str(content);
    }
    stream
}

fn split_words(stream: &str) -> Vec<Word<'_>> {
    let mut words = Vec::new();
    let mut rest = stream.trim_start_matches(is_layout_space);
    while !rest.is_empty() {
        let end = rest.find(is_layout_space).unwrap_or(rest.len());
        let (text, tail) = rest.split_at(end);
        let next = tail.trim_start_matches(is_layout_space);
        words.push(Word {
            text,
            gap_after: tail.len() - next.len(),
        });
        rest = next;
    }
    words
}

fn is_sentence_end(word: &str) -> bool {
    word.ends_with(['.', '!', '?'])
}

/// Separator to put between `word` and `next`.
///
/// With double spacing on, a sentence end followed by a capitalised word
/// gets two spaces, and a sentence end that already had two keeps them.
fn separator(word: &Word<'_>, next: Option<&Word<'_>>, settings: &Settings) -> &'static str {
    if !settings.double_space_between_sentences || !is_sentence_end(word.text) {
        return " ";
    }
    let capitalised = next
        .and_then(|n| n.text.chars().next())
        .is_some_and(char::is_uppercase);
    if capitalised || word.gap_after >= 2 {
        "  "
    } else {
        " "
    }
}

fn is_bare_url(word: &str) -> bool {
    BARE_URL.is_match(word)
}

fn wrap_words(words: &[Word<'_>], metadata: &Metadata, settings: &Settings) -> Vec<String> {
    let continuation = metadata.continuation_prefix();
    let mut produced = Vec::new();

    let mut line = metadata.first_line_prefix();
    let mut length = line.chars().count();
    let mut has_word = false;
    let mut gap = " ";

    for (index, word) in words.iter().enumerate() {
        let width = word.text.chars().count();
        if !has_word {
            line.push_str(word.text);
            length += width;
            has_word = true;
        } else {
            // Measured with the space that would follow the word, so a
            // full line is at most one short of the preferred length.
            let candidate = length + gap.len() + width + 1;
            let exempt = !settings.wrap_long_links && is_bare_url(word.text);
            if !exempt && exceeds(candidate, settings.preferred_line_length) {
                produced.push(std::mem::replace(&mut line, continuation.clone()));
                line.push_str(word.text);
                length = continuation.chars().count() + width;
            } else {
                line.push_str(gap);
                line.push_str(word.text);
                length += gap.len() + width;
            }
        }
        gap = separator(word, words.get(index + 1), settings);
    }
    produced.push(line);
    produced
}

/// Heading text on one line, then its underline.
fn setext_heading(
    words: &[Word<'_>],
    underline: &str,
    metadata: &Metadata,
    settings: &Settings,
) -> Vec<String> {
    let mut text = String::new();
    for (index, word) in words.iter().enumerate() {
        text.push_str(word.text);
        if index + 1 < words.len() {
            text.push_str(separator(word, words.get(index + 1), settings));
        }
    }

    let underline = if settings.resize_header_dash_lines {
        let marker = split_block_quote(underline).1.trim().chars().next().unwrap_or('=');
        format!(
            "{}{}",
            metadata.continuation_prefix(),
            marker.to_string().repeat(text.chars().count())
        )
    } else {
        underline.to_string()
    };

    vec![format!("{}{}", metadata.first_line_prefix(), text), underline]
}
