//! Issue records produced by graph validation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::rule::{RedirectRule, RuleId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    /// Two rules share a normalized source.
    Duplicate,
    /// A rule's destination is another rule's source.
    Chain,
    /// Following destinations leads back to the starting source.
    Loop,
}

impl IssueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            IssueKind::Duplicate => "duplicate",
            IssueKind::Chain => "chain",
            IssueKind::Loop => "loop",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Ordered so that `Warning < Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown severity {0:?} (expected \"warning\" or \"error\")")]
pub struct UnknownSeverity(pub String);

impl FromStr for Severity {
    type Err = UnknownSeverity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "warning" | "warn" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            _ => Err(UnknownSeverity(s.to_string())),
        }
    }
}

/// One structural defect found in a rule set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub kind: IssueKind,
    pub severity: Severity,
    pub message: String,
    /// Rules involved, in the order they are described by `message`.
    pub rule_ids: Vec<RuleId>,
}

impl Issue {
    pub(crate) fn duplicate(first: &RedirectRule, later: &RedirectRule) -> Self {
        Self {
            kind: IssueKind::Duplicate,
            severity: Severity::Warning,
            message: format!(
                "Duplicate source: \"{}\" appears more than once; the last rule wins.",
                later.from
            ),
            rule_ids: vec![first.id, later.id],
        }
    }

    pub(crate) fn chain(rule: &RedirectRule, target: &RedirectRule) -> Self {
        Self {
            kind: IssueKind::Chain,
            severity: Severity::Warning,
            message: format!(
                "Redirect chain: \"{}\" -> \"{}\" -> \"{}\". Combine into a single rule.",
                rule.from, rule.to, target.to
            ),
            rule_ids: vec![rule.id, target.id],
        }
    }

    /// `cycle` lists the rules in traversal order; it is never empty.
    pub(crate) fn cycle(cycle: &[&RedirectRule]) -> Self {
        let message = match cycle {
            [single] => format!("Redirect loop: \"{}\" redirects to itself.", single.from),
            [a, b] => format!(
                "Redirect loop: \"{}\" and \"{}\" redirect to each other.",
                a.from, b.from
            ),
            _ => {
                let mut hops: Vec<String> = cycle.iter().map(|r| format!("\"{}\"", r.from)).collect();
                hops.push(format!("\"{}\"", cycle[0].from));
                format!("Redirect loop: {}.", hops.join(" -> "))
            }
        };
        Self {
            kind: IssueKind::Loop,
            severity: Severity::Error,
            message,
            rule_ids: cycle.iter().map(|r| r.id).collect(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids: Vec<String> = self.rule_ids.iter().map(ToString::to_string).collect();
        write!(
            f,
            "{:<7} {:<9} [{}] {}",
            self.severity,
            self.kind,
            ids.join(", "),
            self.message
        )
    }
}
