//! Rendering of surviving change records.
//!
//! The text listing looks like a unified diff without hunk headers:
//!
//! ```text
//! --- a.txt
//! +++ b.txt
//! 3	-old line
//! 3	+new line
//! ```
//!
//! Nothing at all is written when there are no records.

#[cfg(test)]
mod tests;

use crate::diff::ChangeRecord;
use clap::ValueEnum;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::Write;

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Line listing, optionally colored.
    #[default]
    Text,
    /// A single JSON document with the surviving records.
    Json,
}

/// Which side of the comparison a display line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Removed,
    Added,
}

/// One fully formed output line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLine {
    pub style: LineStyle,
    pub text: String,
}

impl DisplayLine {
    fn removed(text: String) -> Self {
        Self {
            style: LineStyle::Removed,
            text,
        }
    }

    fn added(text: String) -> Self {
        Self {
            style: LineStyle::Added,
            text,
        }
    }
}

/// Build the display lines for the records.
///
/// Each record prints its old side when it has an old line number and its
/// new side when it has a new line number.
pub fn render_lines(file_a: &str, file_b: &str, records: &[ChangeRecord]) -> Vec<DisplayLine> {
    if records.is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::with_capacity(2 + records.len() * 2);
    lines.push(DisplayLine::removed(format!("--- {}", file_a)));
    lines.push(DisplayLine::added(format!("+++ {}", file_b)));

    for record in records {
        if record.old_line > 0 {
            lines.push(DisplayLine::removed(format!(
                "{}\t-{}",
                record.old_line, record.old_text
            )));
        }
        if record.new_line > 0 {
            lines.push(DisplayLine::added(format!(
                "{}\t+{}",
                record.new_line, record.new_text
            )));
        }
    }

    lines
}

/// Write display lines, painting removals red and additions green when `color` is set.
pub fn write_text<W: Write>(out: &mut W, lines: &[DisplayLine], color: bool) -> std::io::Result<()> {
    for line in lines {
        match (color, line.style) {
            (false, _) => writeln!(out, "{}", line.text)?,
            (true, LineStyle::Removed) => writeln!(out, "{}", line.text.red())?,
            (true, LineStyle::Added) => writeln!(out, "{}", line.text.green())?,
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    file_a: &'a str,
    file_b: &'a str,
    records: &'a [ChangeRecord],
}

/// Write the records as one pretty-printed JSON document.
pub fn write_json<W: Write>(
    out: &mut W,
    file_a: &str,
    file_b: &str,
    records: &[ChangeRecord],
) -> std::io::Result<()> {
    if records.is_empty() {
        return Ok(());
    }

    let report = JsonReport {
        file_a,
        file_b,
        records,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)
}
