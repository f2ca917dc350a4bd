//! Normal-format diff parsing for similardiff.
//!
//! This module turns the classic `diff FILE_A FILE_B` output into typed
//! change records:
//! - `header` classifies hunk header lines (`1c1`, `1,3c7,9`, `5a10,13`, ...)
//! - `builder` reads the content lines a header announces
//! - `scanner` drives both over the whole output
//!
//! Every header shape yields records carrying the real line numbers of
//! both files, so unbalanced change hunks split into paired changes plus
//! trailing additions or deletions.

mod builder;
mod header;
mod record;
mod scanner;


// Re-export public API
pub use builder::build_records;
pub use header::{HunkHeader, LineRange, parse_hunk_header};
pub use record::{ChangeKind, ChangeRecord};
pub use scanner::{scan_lines, scan_output};
