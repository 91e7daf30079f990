//! Scenario tests: whole documents and paragraphs reflowed end to end
//!
//! Each module covers one kind of Markdown content, driving the library
//! only through its public entry points.

use pretty_assertions::assert_eq;
use reflow_core::{Settings, TextLines, format_document, paragraph_boundary, reflow};

fn reflow_first(text: &str, settings: &Settings) -> String {
    let lines = TextLines::new(text);
    let boundary = paragraph_boundary(&lines, 0).unwrap();
    let raw = lines
        .text_range(boundary.line_start, boundary.line_end)
        .unwrap();
    reflow(&boundary, &raw, settings)
}

fn width(n: i64) -> Settings {
    Settings {
        preferred_line_length: n,
        ..Settings::default()
    }
}

// =============================================================================
// Plain paragraphs
// =============================================================================

mod plain {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn long_sentence_wraps_into_two_lines() {
        let input = "This is a really long sentence that should wrap at eighty characters when reflowed by the engine.";
        let output = reflow_first(input, &Settings::default());
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].chars().count() <= 80);
        assert!(!lines[0].ends_with(' '));
        assert_eq!(lines.join(" "), input);
        assert!(!output.contains("  "));
    }

    #[test]
    fn short_lines_are_joined() {
        assert_eq!(
            reflow_first("a\nb\nc", &Settings::default()),
            "a b c"
        );
    }
}

// =============================================================================
// Lists
// =============================================================================

mod lists {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn continuation_aligns_after_marker() {
        let output = reflow_first("* item one\n  continuation of item one", &width(16));
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines.len() > 1);
        assert!(lines[0].starts_with("* "));
        for line in &lines[1..] {
            assert!(line.starts_with("  "));
            assert!(!line[2..].starts_with(' '));
        }
    }

    #[test]
    fn each_item_is_its_own_paragraph() {
        let doc = "* one\n* two\n  more\n1. three\n";
        assert_eq!(
            format_document(doc, &Settings::default()).unwrap(),
            "* one\n* two more\n1. three\n"
        );
    }
}

// =============================================================================
// Block quotes
// =============================================================================

mod quotes {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_line_keeps_the_marker() {
        let input = "> quoted text that is too long to fit on one eighty-character line and must wrap";
        let output = reflow_first(input, &Settings::default());
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines.len() > 1);
        assert!(lines.iter().all(|line| line.starts_with("> ")));
    }

    #[test]
    fn depth_change_splits_paragraphs() {
        let doc = "> outer\n> > inner\n> > more\n> back out\n";
        assert_eq!(
            format_document(doc, &Settings::default()).unwrap(),
            "> outer\n> > inner more\n> back out\n"
        );
    }
}

// =============================================================================
// Sentence spacing
// =============================================================================

mod sentences {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn double_space_after_period() {
        let settings = Settings {
            double_space_between_sentences: true,
            ..Settings::default()
        };
        assert_eq!(
            reflow_first("End of sentence. Start of next.", &settings),
            "End of sentence.  Start of next."
        );
    }

    #[test]
    fn single_space_by_default() {
        assert_eq!(
            reflow_first("End of sentence.  Start of next.", &Settings::default()),
            "End of sentence. Start of next."
        );
    }
}

// =============================================================================
// Verbatim regions
// =============================================================================

mod verbatim {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fenced_code_survives_formatting() {
        let doc = "Intro\ntext\n\n~~~~\nkeep   this\n```\nand this\n~~~~\n\nOutro\ntext\n";
        assert_eq!(
            format_document(doc, &width(20)).unwrap(),
            "Intro text\n\n~~~~\nkeep   this\n```\nand this\n~~~~\n\nOutro text\n"
        );
    }

    #[test]
    fn frontmatter_survives_formatting() {
        let doc = "---\nkey: value with many words in it\n---\nBody\ntext\n";
        assert_eq!(
            format_document(doc, &width(10)).unwrap(),
            "---\nkey: value with many words in it\n---\nBody text\n"
        );
    }
}
