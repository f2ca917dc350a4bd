//! Substitution rules and their two textual sources.

use crate::error::{Result, SimilarDiffError};
use std::path::Path;
use tracing::{debug, warn};

/// Rules file looked up in the current directory when none is given.
pub const DEFAULT_RULES_FILE: &str = "similardiff.ini";

/// Lines shorter than this cannot hold `k=v` and are skipped.
const MIN_RULE_LINE_LEN: usize = 3;

/// A literal `old -> new` replacement used to normalize text before comparing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionRule {
    pattern: String,
    replacement: String,
}

impl SubstitutionRule {
    /// Create a rule. The pattern must be non-empty.
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        if pattern.is_empty() {
            return Err(SimilarDiffError::UserError(
                "substitution rule has an empty pattern".to_string(),
            ));
        }

        Ok(Self {
            pattern,
            replacement: replacement.into(),
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Replace every non-overlapping occurrence of the pattern.
    pub fn apply(&self, text: &str) -> String {
        text.replace(&self.pattern, &self.replacement)
    }
}

/// Parse an inline list such as `import:include,package:module`.
///
/// Empty entries are ignored so a trailing comma is harmless.
///
/// # Returns
///
/// * `Ok(Vec<SubstitutionRule>)` - Rules in list order
/// * `Err(SimilarDiffError::UserError)` - An entry has no `:` or an empty pattern
pub fn parse_inline_rules(list: &str) -> Result<Vec<SubstitutionRule>> {
    let mut rules = Vec::new();

    for entry in list.split(',').filter(|entry| !entry.is_empty()) {
        let (pattern, replacement) = entry.split_once(':').ok_or_else(|| {
            SimilarDiffError::UserError(format!(
                "invalid rule '{}': expected OLD:NEW\n\
                 Fix: pass rules as --rules old1:new1,old2:new2",
                entry
            ))
        })?;

        let rule = SubstitutionRule::new(pattern, replacement).map_err(|_| {
            SimilarDiffError::UserError(format!(
                "invalid rule '{}': the text to replace must not be empty",
                entry
            ))
        })?;
        rules.push(rule);
    }

    Ok(rules)
}

/// Parse rules from key-value file content, one `old=new` or `old:new` per line.
///
/// Blank, short and `#` comment lines are skipped. Lines without a delimiter
/// or with an empty key are skipped with a warning.
pub fn parse_rules_file(content: &str) -> Vec<SubstitutionRule> {
    let mut rules = Vec::new();

    for (index, raw) in content.lines().enumerate() {
        let line = raw.trim();

        if line.len() < MIN_RULE_LINE_LEN || line.starts_with('#') {
            continue;
        }

        let Some((pattern, replacement)) = split_key_value(line) else {
            warn!(line = index + 1, text = line, "ignoring rule without '=' or ':'");
            continue;
        };

        match SubstitutionRule::new(pattern, replacement) {
            Ok(rule) => rules.push(rule),
            Err(_) => warn!(line = index + 1, text = line, "ignoring rule with empty key"),
        }
    }

    rules
}

/// Split at the first `=`, or at the first `:` when there is no `=`.
fn split_key_value(line: &str) -> Option<(&str, &str)> {
    line.split_once('=').or_else(|| line.split_once(':'))
}

/// Load rules from a file, degrading to no rules when it cannot be read.
pub fn load_rules_file(path: &Path) -> Vec<SubstitutionRule> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let rules = parse_rules_file(&content);
            debug!(path = %path.display(), count = rules.len(), "loaded rules file");
            rules
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no rules file; comparing without substitutions");
            Vec::new()
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "cannot read rules file; ignoring it");
            Vec::new()
        }
    }
}
