//! One-line summary of a rule set and its issues.

use std::fmt;

use crate::rule::RedirectRule;
use crate::validate::{Issue, Severity};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuleSetSummary {
    pub rules: usize,
    pub permanent: usize,
    pub temporary: usize,
    pub warnings: usize,
    pub errors: usize,
}

impl RuleSetSummary {
    pub fn new(rules: &[RedirectRule], issues: &[Issue]) -> Self {
        let permanent = rules.iter().filter(|r| r.status.is_permanent()).count();
        let errors = issues.iter().filter(|i| i.severity == Severity::Error).count();
        Self {
            rules: rules.len(),
            permanent,
            temporary: rules.len() - permanent,
            warnings: issues.len() - errors,
            errors,
        }
    }

    /// Highest severity present, if any.
    pub fn worst(&self) -> Option<Severity> {
        if self.errors > 0 {
            Some(Severity::Error)
        } else if self.warnings > 0 {
            Some(Severity::Warning)
        } else {
            None
        }
    }
}

impl fmt::Display for RuleSetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} rules ({} permanent, {} temporary): {} warnings, {} errors",
            self.rules, self.permanent, self.temporary, self.warnings, self.errors
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::{RuleId, StatusType};
    use crate::validate::validate;

    #[test]
    fn counts_statuses_and_severities() {
        let rules = vec![
            RedirectRule::new(RuleId(1), "/a", "/b", StatusType::Permanent),
            RedirectRule::new(RuleId(2), "/b", "/a", StatusType::Found),
            RedirectRule::new(RuleId(3), "/c", "/d", StatusType::Temporary),
        ];
        let issues = validate(&rules);
        let summary = RuleSetSummary::new(&rules, &issues);
        assert_eq!(summary.rules, 3);
        assert_eq!(summary.permanent, 1);
        assert_eq!(summary.temporary, 2);
        assert_eq!(summary.warnings, 2);
        assert_eq!(summary.errors, 1);
        assert_eq!(summary.worst(), Some(Severity::Error));
        assert_eq!(
            summary.to_string(),
            "3 rules (1 permanent, 2 temporary): 2 warnings, 1 errors"
        );
    }

    #[test]
    fn clean_set_has_no_worst() {
        assert_eq!(RuleSetSummary::new(&[], &[]).worst(), None);
    }
}
