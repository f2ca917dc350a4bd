//! Configuration for similardiff.
//!
//! Two concerns live here:
//! - substitution rules, read from a key-value file (`similardiff.ini` by
//!   default) and/or an inline `old:new,...` list
//! - output coloring, chosen by `--color` or the `SIMILARDIFF_COLOR` variable
//!
//! A missing or unreadable rules file is not an error; it contributes no rules.

mod color;
mod rules;


use crate::error::Result;
use std::path::Path;
use tracing::{debug, trace};

// Re-export public API
pub use color::{COLOR_ENV_VAR, ColorChoice, color_enabled, resolve_color};
pub use rules::{
    DEFAULT_RULES_FILE, SubstitutionRule, load_rules_file, parse_inline_rules, parse_rules_file,
};

/// Gather the ordered rule list for one run.
///
/// Rules from the file come first, inline rules are appended after them.
///
/// # Returns
///
/// * `Ok(Vec<SubstitutionRule>)` - Possibly empty, in application order
/// * `Err(SimilarDiffError::UserError)` - The inline list is malformed
pub fn collect_rules(rules_file: &Path, inline: Option<&str>) -> Result<Vec<SubstitutionRule>> {
    let mut rules = load_rules_file(rules_file);

    if let Some(list) = inline {
        rules.extend(parse_inline_rules(list)?);
    }

    for rule in &rules {
        trace!(pattern = rule.pattern(), replacement = rule.replacement(), "rule");
    }
    debug!(count = rules.len(), "substitution rules ready");
    Ok(rules)
}
