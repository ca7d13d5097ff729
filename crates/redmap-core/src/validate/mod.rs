//! Redirect graph validation: duplicate sources, chains and loops.
//!
//! Validation is a read-only pass over a rule snapshot. It never reorders or
//! drops rules; defects are returned as [`Issue`] records in a fixed order:
//! duplicates, then chains, then loops, each in input order.

mod issue;
mod loops;

pub use issue::{Issue, IssueKind, Severity, UnknownSeverity};
pub use loops::{LoopDetection, UnknownLoopDetection};

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::rule::RedirectRule;
use crate::url_model::normalize;

/// Knobs for [`validate_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidateOptions {
    pub loop_detection: LoopDetection,
}

/// A rule together with its normalized endpoints.
pub(crate) struct KeyedRule<'a> {
    pub rule: &'a RedirectRule,
    pub from: String,
    pub to: String,
}

/// Normalized source key -> index of the first rule with that source.
pub(crate) type SourceIndex<'k> = HashMap<&'k str, usize>;

/// Validates with default options (full cycle detection).
pub fn validate(rules: &[RedirectRule]) -> Vec<Issue> {
    validate_with(rules, &ValidateOptions::default())
}

pub fn validate_with(rules: &[RedirectRule], opts: &ValidateOptions) -> Vec<Issue> {
    let keyed: Vec<KeyedRule<'_>> = rules
        .iter()
        .map(|rule| KeyedRule {
            rule,
            from: normalize(&rule.from),
            to: normalize(&rule.to),
        })
        .collect();

    let mut issues = Vec::new();

    let mut sources: SourceIndex<'_> = HashMap::with_capacity(keyed.len());
    for (i, k) in keyed.iter().enumerate() {
        match sources.entry(k.from.as_str()) {
            Entry::Occupied(first) => {
                issues.push(Issue::duplicate(keyed[*first.get()].rule, k.rule));
            }
            Entry::Vacant(slot) => {
                slot.insert(i);
            }
        }
    }

    for (i, k) in keyed.iter().enumerate() {
        if let Some(&target) = sources.get(k.to.as_str()) {
            if target != i {
                issues.push(Issue::chain(k.rule, keyed[target].rule));
            }
        }
    }

    issues.extend(loops::detect(&keyed, &sources, opts.loop_detection));

    tracing::debug!(
        rules = rules.len(),
        issues = issues.len(),
        loop_detection = %opts.loop_detection,
        "validated redirect rules"
    );
    issues
}
