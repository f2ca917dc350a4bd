//! The similardiff pipeline.
//!
//! One run is a single forward pass:
//!
//! 1. Collect substitution rules (rules file, then `--rules`)
//! 2. Run the comparison program on the two files
//! 3. Scan its output into change records
//! 4. Drop records explained by the rules
//! 5. Render the survivors to stdout


use crate::cli::Cli;
use crate::config::{SubstitutionRule, collect_rules, color_enabled};
use crate::diff::{ChangeRecord, scan_output};
use crate::diff_tool::run_diff;
use crate::error::Result;
use crate::filter::discard_similarities;
use crate::render::{OutputFormat, render_lines, write_json, write_text};
use std::io::Write;
use tracing::debug;

/// Execute a comparison and print the result to stdout.
pub fn run(cli: &Cli) -> Result<()> {
    let color = color_enabled(cli.color);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    execute(cli, color, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Execute a comparison, writing the rendered result to `out`.
pub fn execute<W: Write>(cli: &Cli, color: bool, out: &mut W) -> Result<()> {
    let rules = collect_rules(&cli.config, cli.rules.as_deref())?;
    let output = run_diff(&cli.diff_program, &cli.file_a, &cli.file_b)?;

    if !output.differs {
        debug!("files are identical");
    }

    let records = surviving_changes(&output.stdout, &rules)?;

    let file_a = cli.file_a.display().to_string();
    let file_b = cli.file_b.display().to_string();

    match cli.format {
        OutputFormat::Text => write_text(out, &render_lines(&file_a, &file_b, &records), color)?,
        OutputFormat::Json => write_json(out, &file_a, &file_b, &records)?,
    }

    Ok(())
}

/// Scan raw comparison output and keep only the materially different records.
pub fn surviving_changes(
    diff_output: &str,
    rules: &[SubstitutionRule],
) -> Result<Vec<ChangeRecord>> {
    let records = scan_output(diff_output)?;
    debug!(records = records.len(), "scanned comparison output");

    Ok(discard_similarities(records, rules))
}
