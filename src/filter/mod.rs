//! Similarity filtering of change records.
//!
//! A changed record is "similar" when its old text, after every
//! substitution rule has been applied in declared order, is exactly its new
//! text. Similar records are dropped; added and deleted records have nothing
//! to compare against and are always kept.


use crate::config::SubstitutionRule;
use crate::diff::{ChangeKind, ChangeRecord};
use tracing::debug;

/// Apply the rules to `text` one after another, each on the previous output.
pub fn normalize(text: &str, rules: &[SubstitutionRule]) -> String {
    rules
        .iter()
        .fold(text.to_string(), |acc, rule| rule.apply(&acc))
}

/// Whether the record's differences are fully explained by the rules.
///
/// Only changed records can be similar. With no rules a record is similar
/// only if both sides were already identical.
pub fn is_similar(record: &ChangeRecord, rules: &[SubstitutionRule]) -> bool {
    record.kind == ChangeKind::Changed && normalize(&record.old_text, rules) == record.new_text
}

/// Drop similar records, keeping the survivors in order and unmodified.
pub fn discard_similarities(
    mut records: Vec<ChangeRecord>,
    rules: &[SubstitutionRule],
) -> Vec<ChangeRecord> {
    if rules.is_empty() {
        return records;
    }

    let before = records.len();
    records.retain(|record| !is_similar(record, rules));

    debug!(
        dropped = before - records.len(),
        kept = records.len(),
        "discarded similar records"
    );
    records
}
