//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use reflow_core::SettingsOverrides;

/// Reflow Markdown paragraphs to a preferred line width
#[derive(Parser, Debug)]
#[command(name = "reflow-md")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Reflow the paragraph around one line
    ///
    /// Examples:
    ///   reflow-md paragraph README.md --line 12
    ///   reflow-md paragraph README.md -l 12 --width 72 --in-place
    Paragraph {
        /// Zero-based line number inside the paragraph
        #[arg(short, long)]
        line: usize,

        #[command(flatten)]
        args: ReflowArgs,
    },

    /// Reflow every paragraph of a document
    ///
    /// Examples:
    ///   reflow-md format README.md --diff
    ///   reflow-md format README.md --check
    Format {
        /// Only format when `formatOnSave` is enabled in the settings
        #[arg(long)]
        on_save: bool,

        #[command(flatten)]
        args: ReflowArgs,
    },
}

/// Options shared by every command
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ReflowArgs {
    /// Markdown file to reflow
    pub file: PathBuf,

    /// Settings file (.toml, .json, .yaml or .yml)
    #[arg(short, long, env = "REFLOW_MD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Preferred line length
    #[arg(short, long, allow_negative_numbers = true)]
    pub width: Option<i64>,

    /// Put two spaces between sentences
    #[arg(long)]
    pub double_space: bool,

    /// Keep setext underlines at their current length
    #[arg(long)]
    pub no_resize_headers: bool,

    /// Never move a bare URL to the next line
    #[arg(long)]
    pub no_wrap_long_links: bool,

    /// Write the result back to the file
    #[arg(short, long, conflicts_with_all = ["diff", "check"])]
    pub in_place: bool,

    /// Print a unified diff instead of the reflowed text
    #[arg(long, conflicts_with = "check")]
    pub diff: bool,

    /// Exit with status 1 if the file would change
    #[arg(long)]
    pub check: bool,
}

impl ReflowArgs {
    /// Settings given on the command line. Flags left off stay unset so the
    /// config file and defaults show through.
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            preferred_line_length: self.width,
            double_space_between_sentences: self.double_space.then_some(true),
            resize_header_dash_lines: self.no_resize_headers.then_some(false),
            wrap_long_links: self.no_wrap_long_links.then_some(false),
            format_on_save: None,
        }
    }
}
