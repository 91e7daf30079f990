//! Tests for paragraph reflow

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use reflow_core::{Settings, TextLines, paragraph_boundary, reflow};

fn with_width(width: i64) -> Settings {
    Settings {
        preferred_line_length: width,
        ..Settings::default()
    }
}

/// Reflow the paragraph starting at line 0 of `text`.
fn reflow_text(text: &str, settings: &Settings) -> String {
    let lines = TextLines::new(text);
    let boundary = paragraph_boundary(&lines, 0).unwrap();
    let raw = lines
        .text_range(boundary.line_start, boundary.line_end)
        .unwrap();
    reflow(&boundary, &raw, settings)
}

#[test]
fn test_long_sentence_wraps_at_eighty() {
    let input = "This is a really long sentence that should wrap at eighty characters when reflowed by the engine.";
    let output = reflow_text(input, &Settings::default());
    let lines: Vec<&str> = output.split('\n').collect();
    assert_eq!(
        lines,
        vec![
            "This is a really long sentence that should wrap at eighty characters when",
            "reflowed by the engine.",
        ]
    );
    assert!(lines[0].chars().count() <= 80);
    assert_eq!(lines.join(" "), input);
}

#[test]
fn test_list_item_continuation_joins() {
    let output = reflow_text("* item one\n  continuation of item one", &Settings::default());
    assert_eq!(output, "* item one continuation of item one");
}

#[test]
fn test_list_item_continuation_aligns_after_marker() {
    let output = reflow_text("* item one\n  continuation of item one", &with_width(20));
    assert_eq!(output, "* item one\n  continuation of\n  item one");
    for line in output.split('\n').skip(1) {
        assert!(line.starts_with("  ") && !line.starts_with("   "));
    }
}

#[test]
fn test_block_quote_wraps_with_marker() {
    let input = "> quoted text that is too long to fit on one eighty-character line and must wrap";
    let output = reflow_text(input, &Settings::default());
    let lines: Vec<&str> = output.split('\n').collect();
    assert!(lines.len() > 1);
    assert!(lines.iter().all(|l| l.starts_with("> ")));
    assert_eq!(
        lines,
        vec![
            "> quoted text that is too long to fit on one eighty-character line and must",
            "> wrap",
        ]
    );
}

#[test]
fn test_double_space_between_sentences() {
    let settings = Settings {
        double_space_between_sentences: true,
        ..Settings::default()
    };
    assert_eq!(
        reflow_text("End of sentence. Start of next.", &settings),
        "End of sentence.  Start of next."
    );
    assert_eq!(
        reflow_text("Is it? Yes! Done. ok", &settings),
        "Is it?  Yes!  Done. ok"
    );
}

#[test]
fn test_sentence_gap_on_line_break_survives_second_pass() {
    let settings = Settings {
        preferred_line_length: 15,
        double_space_between_sentences: true,
        ..Settings::default()
    };
    let once = reflow_text("xxxxx kept.  as yy", &settings);
    assert_eq!(once, "xxxxx kept.\nas yy");
    assert_eq!(reflow_text(&once, &settings), once);
}

#[test]
fn test_sentence_line_break_joins_with_two_spaces() {
    let settings = Settings {
        double_space_between_sentences: true,
        ..Settings::default()
    };
    assert_eq!(
        reflow_text("First line ends here.\nthen more", &settings),
        "First line ends here.  then more"
    );
    assert_eq!(
        reflow_text("First line ends here.\nthen more", &Settings::default()),
        "First line ends here. then more"
    );
}

#[test]
fn test_non_breaking_space_is_kept() {
    assert_eq!(
        reflow_text("ten\u{a0}km away", &Settings::default()),
        "ten\u{a0}km away"
    );
    assert_eq!(
        reflow_text("ten\u{a0}km away", &with_width(8)),
        "ten\u{a0}km\naway"
    );
}

#[test]
fn test_tabs_separate_words() {
    assert_eq!(reflow_text("one\ttwo\t\tthree", &Settings::default()), "one two three");
}

#[test]
fn test_single_space_collapses_without_double_spacing() {
    assert_eq!(
        reflow_text("End of sentence.  Start of next.", &Settings::default()),
        "End of sentence. Start of next."
    );
}

#[test]
fn test_code_span_is_never_split() {
    let output = reflow_text("Use `cargo build --release` to build it", &with_width(20));
    assert_eq!(output, "Use\n`cargo build --release`\nto build it");
}

#[test]
fn test_link_label_is_never_split() {
    let output = reflow_text("Read [the full guide here] now", &with_width(15));
    assert_eq!(output, "Read\n[the full guide here]\nnow");
}

#[test]
fn test_full_line_is_one_short_of_width() {
    assert_eq!(reflow_text("aaaa bbbb", &with_width(9)), "aaaa\nbbbb");
    assert_eq!(reflow_text("aaaa bbbb", &with_width(10)), "aaaa bbbb");
}

#[test]
fn test_overlong_word_gets_own_line() {
    let output = reflow_text("supercalifragilisticexpialidocious word", &with_width(10));
    assert_eq!(output, "supercalifragilisticexpialidocious\nword");
}

#[test]
fn test_non_positive_width_puts_each_word_on_a_line() {
    assert_eq!(reflow_text("one two three", &with_width(0)), "one\ntwo\nthree");
    assert_eq!(reflow_text("one two three", &with_width(-5)), "one\ntwo\nthree");
}

#[test]
fn test_nested_quote_prefix() {
    let output = reflow_text(
        "> > deep quote with enough words to wrap twice over",
        &with_width(20),
    );
    assert_eq!(
        output,
        "> > deep quote with\n> > enough words to\n> > wrap twice over"
    );
}

#[test]
fn test_indented_paragraph_keeps_indent() {
    let output = reflow_text("  indented paragraph that wraps around", &with_width(20));
    assert_eq!(output, "  indented\n  paragraph that\n  wraps around");
}

#[test]
fn test_ordered_list_item() {
    assert_eq!(
        reflow_text("1. first\n   second line", &Settings::default()),
        "1. first second line"
    );
}

#[test]
fn test_long_link_wraps_by_default() {
    let input = "See https://example.com/a/very/long/path here";
    assert_eq!(
        reflow_text(input, &with_width(20)),
        "See\nhttps://example.com/a/very/long/path\nhere"
    );
}

#[test]
fn test_long_link_stays_when_wrapping_disabled() {
    let settings = Settings {
        preferred_line_length: 20,
        wrap_long_links: false,
        ..Settings::default()
    };
    let input = "See https://example.com/a/very/long/path here";
    assert_eq!(
        reflow_text(input, &settings),
        "See https://example.com/a/very/long/path\nhere"
    );
}

#[test]
fn test_setext_underline_resized() {
    assert_eq!(
        reflow_text("Title\n=========", &Settings::default()),
        "Title\n====="
    );
    assert_eq!(
        reflow_text("> Quoted Title\n> ---", &Settings::default()),
        "> Quoted Title\n> ------------"
    );
}

#[test]
fn test_resized_underline_keeps_indent() {
    assert_eq!(
        reflow_text("  Title\n  ===", &Settings::default()),
        "  Title\n  ====="
    );
}

#[test]
fn test_setext_underline_kept_when_resize_disabled() {
    let settings = Settings {
        resize_header_dash_lines: false,
        ..Settings::default()
    };
    assert_eq!(
        reflow_text("Title   text\n=", &settings),
        "Title text\n="
    );
}

#[test]
fn test_setext_heading_is_not_wrapped() {
    let output = reflow_text("A heading that is wider\nthan the width\n---", &with_width(10));
    assert_eq!(
        output,
        "A heading that is wider than the width\n--------------------------------------"
    );
}

#[test]
fn test_blank_and_structural_lines_unchanged() {
    assert_eq!(reflow_text("", &Settings::default()), "");
    assert_eq!(reflow_text("   ", &Settings::default()), "   ");
    assert_eq!(reflow_text(">", &Settings::default()), ">");
    let heading = "# a heading that is long enough to wrap";
    assert_eq!(reflow_text(heading, &with_width(10)), heading);
    assert_eq!(reflow_text("***", &with_width(1)), "***");
}

#[test]
fn test_bare_list_marker_unchanged() {
    assert_eq!(reflow_text("* ", &Settings::default()), "* ");
}

#[test]
fn test_crlf_input_produces_lf_output() {
    let lines = TextLines::new("one\r\ntwo");
    let boundary = paragraph_boundary(&lines, 0).unwrap();
    assert_eq!(reflow(&boundary, "one\r\ntwo", &with_width(5)), "one\ntwo");
}

#[test]
fn test_output_independent_of_original_breaks() {
    let settings = with_width(30);
    let a = reflow_text("alpha beta gamma delta epsilon zeta eta theta", &settings);
    let b = reflow_text("alpha\nbeta gamma\ndelta epsilon zeta\neta\ntheta", &settings);
    assert_eq!(a, b);
}

fn paragraph() -> impl Strategy<Value = String> {
    let prefix = prop_oneof![
        Just(String::new()),
        Just("> ".to_string()),
        Just("> > ".to_string()),
        Just("* ".to_string()),
        Just("12. ".to_string()),
        Just("> - ".to_string()),
    ];
    let word = "[a-z]{1,12}|[A-Z][a-z]{0,8}|[a-z]{1,8}[.!?]|`[a-z]{1,4} [a-z]{1,4}`|\\[[a-z]{1,4} [a-z]{1,4}\\]";
    let gap = prop_oneof![Just(" "), Just("  ")];
    (prefix, prop::collection::vec((word, gap), 1..40)).prop_map(|(prefix, words)| {
        let body: String = words.iter().map(|(w, g)| format!("{w}{g}")).collect();
        format!("{prefix}{}", body.trim_end())
    })
}

proptest! {
    #[test]
    fn test_reflow_is_idempotent(
        text in paragraph(),
        width in 10i64..100,
        double_space in any::<bool>(),
    ) {
        let settings = Settings {
            preferred_line_length: width,
            double_space_between_sentences: double_space,
            ..Settings::default()
        };
        let once = reflow_text(&text, &settings);
        let twice = reflow_text(&once, &settings);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn test_reflow_keeps_every_word(text in paragraph(), width in 10i64..100) {
        let once = reflow_text(&text, &with_width(width));
        let strip = |s: &str| -> Vec<String> {
            s.split_whitespace()
                .filter(|w| !matches!(*w, ">" | "*" | "-" | "12."))
                .map(str::to_string)
                .collect()
        };
        prop_assert_eq!(strip(&once), strip(&text));
    }
}
