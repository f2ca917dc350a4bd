//! Change records reconstructed from hunks.

use serde::Serialize;

/// Classification of a reconstructed edit, mirroring the `c`/`a`/`d` operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    /// A line in file A was replaced by a line in file B.
    Changed,
    /// A line exists only in file B.
    Added,
    /// A line exists only in file A.
    Deleted,
}

/// One semantic edit unit.
///
/// Line numbers are 1-based; `0` means the side does not apply (an added
/// record has no old line, a deleted record has no new line).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeRecord {
    pub kind: ChangeKind,
    /// Content from file A, without the `< ` prefix. Empty for added records.
    pub old_text: String,
    /// Content from file B, without the `> ` prefix. Empty for deleted records.
    pub new_text: String,
    pub old_line: usize,
    pub new_line: usize,
}

impl ChangeRecord {
    /// Pair a line of file A with a line of file B.
    pub fn changed(old_text: &str, new_text: &str, old_line: usize, new_line: usize) -> Self {
        Self {
            kind: ChangeKind::Changed,
            old_text: old_text.to_string(),
            new_text: new_text.to_string(),
            old_line,
            new_line,
        }
    }

    /// A line present only in file B.
    pub fn added(new_text: &str, new_line: usize) -> Self {
        Self {
            kind: ChangeKind::Added,
            old_text: String::new(),
            new_text: new_text.to_string(),
            old_line: 0,
            new_line,
        }
    }

    /// A line present only in file A.
    pub fn deleted(old_text: &str, old_line: usize) -> Self {
        Self {
            kind: ChangeKind::Deleted,
            old_text: old_text.to_string(),
            new_text: String::new(),
            old_line,
            new_line: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn added_record_has_no_old_side() {
        let record = ChangeRecord::added("new", 7);
        assert_eq!(record.kind, ChangeKind::Added);
        assert_eq!(record.old_line, 0);
        assert!(record.old_text.is_empty());
        assert_eq!(record.new_line, 7);
    }

    #[test]
    fn deleted_record_has_no_new_side() {
        let record = ChangeRecord::deleted("old", 3);
        assert_eq!(record.kind, ChangeKind::Deleted);
        assert_eq!(record.new_line, 0);
        assert!(record.new_text.is_empty());
        assert_eq!(record.old_line, 3);
    }

    #[test]
    fn kind_serializes_in_snake_case() {
        let json = serde_json::to_string(&ChangeRecord::changed("a", "b", 1, 2)).unwrap();
        assert_eq!(
            json,
            r#"{"kind":"changed","old_text":"a","new_text":"b","old_line":1,"new_line":2}"#
        );
    }
}
