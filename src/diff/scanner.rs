//! Single forward pass over comparison output.

use super::builder::build_records;
use super::header::parse_hunk_header;
use super::record::ChangeRecord;
use crate::error::Result;
use tracing::{debug, trace};

/// Reconstruct the ordered change records from raw comparison output lines.
///
/// Lines that are not hunk headers and do not belong to a hunk (blank
/// trailing lines, stray text) are skipped. A structural error inside a
/// hunk aborts the whole scan.
pub fn scan_lines<S: AsRef<str>>(lines: &[S]) -> Result<Vec<ChangeRecord>> {
    let mut records = Vec::new();
    let mut cursor = 0;

    while cursor < lines.len() {
        let line = lines[cursor].as_ref();

        let Some(header) = parse_hunk_header(line) else {
            trace!(line = cursor + 1, text = line, "skipping unrecognized line");
            cursor += 1;
            continue;
        };

        let (hunk_records, consumed) = build_records(lines, cursor, &header)?;
        debug!(
            line = cursor + 1,
            %header,
            records = hunk_records.len(),
            consumed,
            "parsed hunk"
        );

        records.extend(hunk_records);
        cursor += consumed;
    }

    Ok(records)
}

/// Split raw comparison output on `\n` and scan it.
///
/// A `\r` before the newline belongs to the content and is kept.
pub fn scan_output(output: &str) -> Result<Vec<ChangeRecord>> {
    let lines: Vec<&str> = output.split('\n').collect();
    scan_lines(&lines)
}
