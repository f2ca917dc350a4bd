//! Hunk header recognition for normal-format diff output.
//!
//! A header has a side range, an operator and another side range, e.g.
//! `1,3c7,9`. The six accepted shapes overlap structurally, so they are
//! tried in a fixed order and the first match wins:
//!
//! 1. `LcR`
//! 2. `L1,L2cR1,R2`
//! 3. `LcR1,R2`
//! 4. `L1,L2cR`
//! 5. `LdR` / `L1,L2dR`
//! 6. `LaR` / `LaR1,R2`

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// An inclusive range of 1-based line numbers on one side of a hunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    /// A range covering exactly one line.
    pub fn single(line: usize) -> Self {
        Self {
            start: line,
            end: line,
        }
    }

    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of lines covered, or `None` when `end` precedes `start` or
    /// the count does not fit in `usize`.
    pub fn line_count(&self) -> Option<usize> {
        self.end
            .checked_sub(self.start)
            .and_then(|span| span.checked_add(1))
    }
}

impl std::fmt::Display for LineRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{},{}", self.start, self.end)
        }
    }
}

/// A recognised hunk header, one variant per shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HunkHeader {
    /// `LcR`: one line replaced by one line.
    ChangeOne { old: usize, new: usize },
    /// `L1,L2cR1,R2`: several lines replaced by several lines.
    ChangeMany { old: LineRange, new: LineRange },
    /// `LcR1,R2`: one line replaced by several lines.
    ChangeOneToMany { old: usize, new: LineRange },
    /// `L1,L2cR`: several lines replaced by one line.
    ChangeManyToOne { old: LineRange, new: usize },
    /// `LdR` or `L1,L2dR`: lines removed; `after` is informational only.
    Delete { old: LineRange, after: usize },
    /// `LaR` or `LaR1,R2`: lines inserted; `after` is informational only.
    Add { after: usize, new: LineRange },
}

#[derive(Debug, Clone, Copy)]
enum Shape {
    ChangeOne,
    ChangeMany,
    ChangeOneToMany,
    ChangeManyToOne,
    Delete,
    Add,
}

/// Grammars in priority order.
static GRAMMARS: LazyLock<Vec<(Shape, Regex)>> = LazyLock::new(|| {
    [
        (Shape::ChangeOne, r"^([0-9]+)c([0-9]+)$"),
        (Shape::ChangeMany, r"^([0-9]+),([0-9]+)c([0-9]+),([0-9]+)$"),
        (Shape::ChangeOneToMany, r"^([0-9]+)c([0-9]+),([0-9]+)$"),
        (Shape::ChangeManyToOne, r"^([0-9]+),([0-9]+)c([0-9]+)$"),
        (Shape::Delete, r"^([0-9]+)(?:,([0-9]+))?d([0-9]+)$"),
        (Shape::Add, r"^([0-9]+)a([0-9]+)(?:,([0-9]+))?$"),
    ]
    .into_iter()
    .map(|(shape, pattern)| (shape, Regex::new(pattern).expect("hunk grammar is a valid regex")))
    .collect()
});

/// Classify a line as a hunk header.
///
/// Returns `None` for content lines, separators, blank lines, and headers
/// whose numbers do not fit in `usize`.
pub fn parse_hunk_header(line: &str) -> Option<HunkHeader> {
    for (shape, regex) in GRAMMARS.iter() {
        if let Some(caps) = regex.captures(line) {
            return extract(*shape, &caps);
        }
    }
    None
}

fn extract(shape: Shape, caps: &Captures<'_>) -> Option<HunkHeader> {
    let num = |i: usize| -> Option<usize> { caps.get(i)?.as_str().parse().ok() };

    let header = match shape {
        Shape::ChangeOne => HunkHeader::ChangeOne {
            old: num(1)?,
            new: num(2)?,
        },
        Shape::ChangeMany => HunkHeader::ChangeMany {
            old: LineRange::new(num(1)?, num(2)?),
            new: LineRange::new(num(3)?, num(4)?),
        },
        Shape::ChangeOneToMany => HunkHeader::ChangeOneToMany {
            old: num(1)?,
            new: LineRange::new(num(2)?, num(3)?),
        },
        Shape::ChangeManyToOne => HunkHeader::ChangeManyToOne {
            old: LineRange::new(num(1)?, num(2)?),
            new: num(3)?,
        },
        Shape::Delete => {
            let start = num(1)?;
            let end = match caps.get(2) {
                Some(_) => num(2)?,
                None => start,
            };
            HunkHeader::Delete {
                old: LineRange::new(start, end),
                after: num(3)?,
            }
        }
        Shape::Add => {
            let start = num(2)?;
            let end = match caps.get(3) {
                Some(_) => num(3)?,
                None => start,
            };
            HunkHeader::Add {
                after: num(1)?,
                new: LineRange::new(start, end),
            }
        }
    };

    Some(header)
}

impl std::fmt::Display for HunkHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HunkHeader::ChangeOne { old, new } => write!(f, "{old}c{new}"),
            HunkHeader::ChangeMany { old, new } => write!(f, "{old}c{new}"),
            HunkHeader::ChangeOneToMany { old, new } => write!(f, "{old}c{new}"),
            HunkHeader::ChangeManyToOne { old, new } => write!(f, "{old}c{new}"),
            HunkHeader::Delete { old, after } => write!(f, "{old}d{after}"),
            HunkHeader::Add { after, new } => write!(f, "{after}a{new}"),
        }
    }
}
