//! Command implementations

use std::path::Path;

use colored::Colorize;
use reflow_core::{
    ReflowDiff, Settings, format_document, format_on_save, overlong_lines, reflow_paragraph_at,
    unified_diff,
};
use tracing::{debug, info};

use crate::cli::ReflowArgs;
use crate::config::resolve_settings;
use crate::error::Result;
use crate::io;

/// How a command finished when it did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Clean,
    /// `--check` found a file that would change.
    WouldChange,
}

/// Reflow the paragraph around `line`.
pub fn run_paragraph(args: &ReflowArgs, line: usize) -> Result<Outcome> {
    let settings = resolve_settings(args.config.as_deref(), &args.overrides())?;
    let original = io::read_text(&args.file)?;

    let edit = reflow_paragraph_at(&original, line, &settings)?;
    debug!(
        line_start = edit.line_start,
        line_end = edit.line_end,
        noop = edit.is_noop(),
        "reflowed paragraph"
    );
    let updated = if edit.is_noop() {
        original.clone()
    } else {
        edit.apply(&original)?
    };

    finish(args, &settings, &original, &updated)
}

/// Reflow the whole document. With `on_save`, only when the settings ask
/// for formatting on save.
pub fn run_format(args: &ReflowArgs, on_save: bool) -> Result<Outcome> {
    let settings = resolve_settings(args.config.as_deref(), &args.overrides())?;
    let original = io::read_text(&args.file)?;

    let updated = if on_save {
        match format_on_save(&original, &settings)? {
            Some(formatted) => formatted,
            None => {
                debug!("formatOnSave is disabled, leaving document as is");
                original.clone()
            }
        }
    } else {
        format_document(&original, &settings)?
    };

    finish(args, &settings, &original, &updated)
}

fn finish(args: &ReflowArgs, settings: &Settings, original: &str, updated: &str) -> Result<Outcome> {
    let path = args.file.as_path();
    let summary = ReflowDiff::compute(original, updated);
    debug!(
        changed = summary.changed,
        added = summary.lines_added,
        removed = summary.lines_removed,
        similarity = summary.similarity,
        "reflow summary"
    );

    if args.check {
        return Ok(report_check(path, settings, updated, &summary));
    }

    if args.diff {
        print!("{}", unified_diff(original, updated, &path.display().to_string()));
        return Ok(Outcome::Clean);
    }

    if args.in_place {
        if summary.changed {
            io::write_atomic(path, updated)?;
            info!(path = %path.display(), "wrote reflowed document");
            eprintln!("{} {}", "Reflowed".green().bold(), path.display());
        } else {
            eprintln!("{} {}", "Unchanged".dimmed(), path.display());
        }
        return Ok(Outcome::Clean);
    }

    print!("{updated}");
    Ok(Outcome::Clean)
}

fn report_check(path: &Path, settings: &Settings, updated: &str, summary: &ReflowDiff) -> Outcome {
    for number in overlong_lines(updated, settings) {
        println!(
            "{}:{}: {} longer than {} characters",
            path.display(),
            number + 1,
            "warning:".yellow(),
            settings.preferred_line_length
        );
    }

    if summary.changed {
        println!(
            "{} {} (+{} -{})",
            "would reflow".red().bold(),
            path.display(),
            summary.lines_added,
            summary.lines_removed
        );
        Outcome::WouldChange
    } else {
        Outcome::Clean
    }
}
