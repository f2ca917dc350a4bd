//! CLI argument parsing for similardiff.
//!
//! Uses clap derive macros for declarative argument definitions.
//! The pipeline itself lives in the `commands` module.

use crate::config::{ColorChoice, DEFAULT_RULES_FILE};
use crate::diff_tool::DEFAULT_DIFF_PROGRAM;
use crate::render::OutputFormat;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Similardiff: compare two files, hiding changes explained by known substitutions.
///
/// Runs a classic line diff, then drops every changed line whose old text
/// becomes the new text after applying the configured `old -> new`
/// substitutions in order (e.g. identifiers renamed during a refactor).
///
/// Rules are read from `similardiff.ini` (one `old=new` or `old:new` per
/// line, `#` for comments) and from `--rules`. Set `SIMILARDIFF_COLOR=true`
/// for colored output.
#[derive(Parser, Debug)]
#[command(name = "similardiff")]
#[command(author, version, about, long_about)]
pub struct Cli {
    /// Original file.
    pub file_a: PathBuf,

    /// Modified file.
    pub file_b: PathBuf,

    /// Inline substitution rules, applied after those from the rules file.
    #[arg(short, long, value_name = "OLD:NEW,...")]
    pub rules: Option<String>,

    /// Rules file; a missing file means no file rules.
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_RULES_FILE)]
    pub config: PathBuf,

    /// Color output; overrides SIMILARDIFF_COLOR.
    #[arg(long, value_enum, value_name = "WHEN")]
    pub color: Option<ColorChoice>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Program producing the normal-format line diff.
    #[arg(long, value_name = "PROGRAM", default_value = DEFAULT_DIFF_PROGRAM)]
    pub diff_program: String,

    /// Increase log verbosity (-v debug, -vv trace). SIMILARDIFF_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
