//! Inline-span protection
//!
//! Before a paragraph is split into words, spaces inside inline code spans
//! and link labels are swapped for [`SENTINEL`] so the word splitter cannot
//! break there. [`restore_protected_spaces`] swaps them back once the lines
//! are built.

/// Placeholder for a protected space. Backspace does not occur in Markdown
/// source.
pub const SENTINEL: char = '\u{8}';

/// Replace spaces inside `[...]` link labels with [`SENTINEL`].
///
/// Brackets do not nest: the first `]` after a `[` closes it. A `[` with no
/// closing `]` is left alone.
pub fn protect_link_spaces(text: &str) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    let mut i = 0;
    while let Some(open) = find_from(&chars, i, '[') {
        let Some(close) = find_from(&chars, open + 1, ']') else {
            break;
        };
        protect_range(&mut chars[open + 1..close]);
        i = close + 1;
    }
    chars.into_iter().collect()
}

/// Replace spaces inside inline code spans with [`SENTINEL`].
///
/// A run of `k` backticks opens a span that only a run of exactly `k`
/// backticks closes, so `` ``a ` b`` `` is one span. Runs without a match
/// are literal backticks.
pub fn protect_code_span_spaces(text: &str) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        if chars[i] != '`' {
            i += 1;
            continue;
        }
        let width = backtick_run(&chars, i);
        let body = i + width;
        match closing_run(&chars, body, width) {
            Some(close) => {
                protect_range(&mut chars[body..close]);
                i = close + width;
            }
            None => i = body,
        }
    }
    chars.into_iter().collect()
}

/// Turn every [`SENTINEL`] back into a space.
pub fn restore_protected_spaces(text: &str) -> String {
    text.replace(SENTINEL, " ")
}

fn find_from(chars: &[char], start: usize, target: char) -> Option<usize> {
    chars
        .get(start..)?
        .iter()
        .position(|&c| c == target)
        .map(|offset| start + offset)
}

fn protect_range(chars: &mut [char]) {
    for c in chars.iter_mut().filter(|c| **c == ' ') {
        *c = SENTINEL;
    }
}

fn backtick_run(chars: &[char], start: usize) -> usize {
    chars[start..].iter().take_while(|&&c| c == '`').count()
}

fn closing_run(chars: &[char], start: usize, width: usize) -> Option<usize> {
    let mut j = start;
    while j < chars.len() {
        if chars[j] == '`' {
            let run = backtick_run(chars, j);
            if run == width {
                return Some(j);
            }
            j += run;
        } else {
            j += 1;
        }
    }
    None
}
