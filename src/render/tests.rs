//! Tests for rendering.

use super::{DisplayLine, LineStyle, render_lines, write_json, write_text};
use crate::diff::ChangeRecord;

fn sample_records() -> Vec<ChangeRecord> {
    vec![
        ChangeRecord::changed("old", "new", 3, 4),
        ChangeRecord::added("extra", 9),
        ChangeRecord::deleted("gone", 12),
    ]
}

fn text_of(lines: &[DisplayLine]) -> Vec<&str> {
    lines.iter().map(|l| l.text.as_str()).collect()
}

#[test]
fn test_render_lines_listing() {
    let lines = render_lines("a.txt", "b.txt", &sample_records());

    assert_eq!(
        text_of(&lines),
        vec![
            "--- a.txt",
            "+++ b.txt",
            "3\t-old",
            "4\t+new",
            "9\t+extra",
            "12\t-gone",
        ]
    );
}

#[test]
fn test_render_lines_styles_follow_sides() {
    let lines = render_lines("a", "b", &sample_records());
    let styles: Vec<LineStyle> = lines.iter().map(|l| l.style).collect();

    assert_eq!(
        styles,
        vec![
            LineStyle::Removed,
            LineStyle::Added,
            LineStyle::Removed,
            LineStyle::Added,
            LineStyle::Added,
            LineStyle::Removed,
        ]
    );
}

#[test]
fn test_render_lines_empty_records_render_nothing() {
    assert!(render_lines("a", "b", &[]).is_empty());
}

#[test]
fn test_write_text_plain() {
    let lines = render_lines("a", "b", &[ChangeRecord::changed("x", "y", 1, 1)]);
    let mut out = Vec::new();

    write_text(&mut out, &lines, false).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "--- a\n+++ b\n1\t-x\n1\t+y\n");
}

#[test]
fn test_write_text_colored() {
    let lines = render_lines("a", "b", &[ChangeRecord::changed("x", "y", 1, 1)]);
    let mut out = Vec::new();

    write_text(&mut out, &lines, true).unwrap();

    let text = String::from_utf8(out).unwrap();
    let rows: Vec<&str> = text.lines().collect();
    assert_eq!(rows.len(), 4);
    assert!(rows[0].starts_with("\x1b[31m") && rows[0].contains("--- a"));
    assert!(rows[1].starts_with("\x1b[32m") && rows[1].contains("+++ b"));
    assert!(rows[2].starts_with("\x1b[31m") && rows[2].contains("1\t-x"));
    assert!(rows[3].starts_with("\x1b[32m") && rows[3].contains("1\t+y"));
}

#[test]
fn test_write_json_document() {
    let mut out = Vec::new();

    write_json(&mut out, "a.txt", "b.txt", &sample_records()).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["file_a"], "a.txt");
    assert_eq!(value["file_b"], "b.txt");
    assert_eq!(value["records"].as_array().unwrap().len(), 3);
    assert_eq!(value["records"][0]["kind"], "changed");
    assert_eq!(value["records"][1]["kind"], "added");
    assert_eq!(value["records"][1]["old_line"], 0);
    assert_eq!(value["records"][2]["kind"], "deleted");
    assert_eq!(value["records"][2]["old_text"], "gone");
}

#[test]
fn test_write_json_empty_records_write_nothing() {
    let mut out = Vec::new();

    write_json(&mut out, "a", "b", &[]).unwrap();

    assert!(out.is_empty());
}
