//! Record construction for a single hunk.
//!
//! Given a recognised header and its position in the line sequence, reads
//! the old block, the `---` separator and the new block as the header
//! dictates and emits the corresponding records.

use super::header::{HunkHeader, LineRange};
use super::record::ChangeRecord;
use crate::error::{Result, SimilarDiffError};

/// Width of the `< ` / `> ` marker on content lines.
const CONTENT_PREFIX_LEN: usize = 2;

/// Line between the old and new blocks of a change hunk.
const SEPARATOR: &str = "---";

/// Build the records for the hunk whose header sits at `lines[cursor]`.
///
/// # Returns
///
/// * `Ok((records, consumed))` - Records in emission order and the number of
///   lines consumed, header included
/// * `Err(SimilarDiffError::ParseError)` - The hunk is truncated, a content
///   line is shorter than its marker, or a range is reversed
pub fn build_records<S: AsRef<str>>(
    lines: &[S],
    cursor: usize,
    header: &HunkHeader,
) -> Result<(Vec<ChangeRecord>, usize)> {
    let mut reader = HunkReader {
        lines,
        position: cursor + 1,
        header,
    };

    let records: Vec<ChangeRecord> = match *header {
        HunkHeader::ChangeOne { old, new } => {
            change_block(&mut reader, LineRange::single(old), LineRange::single(new))?
        }
        HunkHeader::ChangeMany { old, new } => change_block(&mut reader, old, new)?,
        HunkHeader::ChangeOneToMany { old, new } => {
            change_block(&mut reader, LineRange::single(old), new)?
        }
        HunkHeader::ChangeManyToOne { old, new } => {
            change_block(&mut reader, old, LineRange::single(new))?
        }
        HunkHeader::Delete { old, .. } => reader
            .content_block(old)?
            .into_iter()
            .enumerate()
            .map(|(i, text)| ChangeRecord::deleted(text, old.start + i))
            .collect(),
        HunkHeader::Add { new, .. } => reader
            .content_block(new)?
            .into_iter()
            .enumerate()
            .map(|(i, text)| ChangeRecord::added(text, new.start + i))
            .collect(),
    };

    reader.skip_markers();

    Ok((records, reader.position - cursor))
}

/// Read `old` lines, the separator and `new` lines, then pair them up.
///
/// The first `min(old, new)` lines on each side become changed records;
/// the surplus on the longer side becomes added or deleted records.
fn change_block<S: AsRef<str>>(
    reader: &mut HunkReader<'_, S>,
    old: LineRange,
    new: LineRange,
) -> Result<Vec<ChangeRecord>> {
    let old_texts = reader.content_block(old)?;
    reader.separator()?;
    let new_texts = reader.content_block(new)?;

    let pairs = old_texts.len().min(new_texts.len());
    let mut records = Vec::with_capacity(old_texts.len().max(new_texts.len()));

    for i in 0..pairs {
        records.push(ChangeRecord::changed(
            old_texts[i],
            new_texts[i],
            old.start + i,
            new.start + i,
        ));
    }

    for (i, text) in new_texts.iter().enumerate().skip(pairs) {
        records.push(ChangeRecord::added(text, new.start + i));
    }

    for (i, text) in old_texts.iter().enumerate().skip(pairs) {
        records.push(ChangeRecord::deleted(text, old.start + i));
    }

    Ok(records)
}

/// Forward-only reader over the lines following a hunk header.
struct HunkReader<'a, S> {
    lines: &'a [S],
    position: usize,
    header: &'a HunkHeader,
}

impl<'a, S: AsRef<str>> HunkReader<'a, S> {
    /// Read one content line per line number in `range`, markers stripped.
    fn content_block(&mut self, range: LineRange) -> Result<Vec<&'a str>> {
        let count = range.line_count().ok_or_else(|| {
            SimilarDiffError::ParseError(format!(
                "hunk {}: range {} does not describe a valid line count",
                self.header, range
            ))
        })?;

        let mut texts = Vec::new();
        for _ in 0..count {
            let line = self.next_line("content line")?;
            let text = line.get(CONTENT_PREFIX_LEN..).ok_or_else(|| {
                SimilarDiffError::ParseError(format!(
                    "line {}: content line {:?} in hunk {} is shorter than its marker",
                    self.position, line, self.header
                ))
            })?;
            texts.push(text);
        }

        Ok(texts)
    }

    /// Consume the `---` line between the old and new blocks.
    fn separator(&mut self) -> Result<()> {
        let line = self.next_line("separator")?;
        if !line.starts_with(SEPARATOR) {
            return Err(SimilarDiffError::ParseError(format!(
                "line {}: expected {:?} in hunk {}, found {:?}",
                self.position, SEPARATOR, self.header, line
            )));
        }
        Ok(())
    }

    /// Next line that is not a `\ No newline at end of file` marker.
    fn next_line(&mut self, expected: &str) -> Result<&'a str> {
        self.skip_markers();

        let line = self.lines.get(self.position).ok_or_else(|| {
            SimilarDiffError::ParseError(format!(
                "hunk {} expected a {} at line {}, found end of input",
                self.header,
                expected,
                self.position + 1
            ))
        })?;
        self.position += 1;

        Ok(line.as_ref())
    }

    fn skip_markers(&mut self) {
        while self
            .lines
            .get(self.position)
            .is_some_and(|line| line.as_ref().starts_with('\\'))
        {
            self.position += 1;
        }
    }
}
