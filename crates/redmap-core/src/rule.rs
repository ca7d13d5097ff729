//! Redirect rule model: caller-assigned ids, status classes, and the boundary
//! filter that turns raw rows into rules.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier supplied by the caller for each rule.
///
/// Issues reference rules by id, so ids must be unique within one snapshot.
/// The CLI uses the 1-based line number of the rules file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleId(pub usize);

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// HTTP status class of a redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StatusType {
    #[default]
    #[serde(rename = "301")]
    Permanent,
    #[serde(rename = "302")]
    Found,
    #[serde(rename = "307")]
    Temporary,
}

impl StatusType {
    /// Numeric HTTP status code.
    pub fn code(self) -> u16 {
        match self {
            StatusType::Permanent => 301,
            StatusType::Found => 302,
            StatusType::Temporary => 307,
        }
    }

    /// Code as it appears in text formats ("301", "302", "307").
    pub fn as_str(self) -> &'static str {
        match self {
            StatusType::Permanent => "301",
            StatusType::Found => "302",
            StatusType::Temporary => "307",
        }
    }

    /// True only for 301. Both 302 and 307 are temporary.
    pub fn is_permanent(self) -> bool {
        matches!(self, StatusType::Permanent)
    }

    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            301 => Some(StatusType::Permanent),
            302 => Some(StatusType::Found),
            307 => Some(StatusType::Temporary),
            _ => None,
        }
    }

    /// Strict parse of "301" / "302" / "307" (surrounding whitespace allowed).
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse::<u16>().ok().and_then(Self::from_code)
    }

    /// Boundary coercion: missing or unrecognised values become 301.
    pub fn parse_or_default(raw: Option<&str>) -> Self {
        match raw {
            None => StatusType::default(),
            Some(s) => Self::parse(s).unwrap_or_else(|| {
                tracing::debug!(value = s, "unrecognised redirect status, using 301");
                StatusType::default()
            }),
        }
    }
}

impl fmt::Display for StatusType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One validated redirect: both endpoints are non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectRule {
    pub id: RuleId,
    pub from: String,
    pub to: String,
    pub status: StatusType,
}

impl RedirectRule {
    pub fn new(id: RuleId, from: impl Into<String>, to: impl Into<String>, status: StatusType) -> Self {
        Self {
            id,
            from: from.into(),
            to: to.into(),
            status,
        }
    }
}

/// A row as the user typed it, before filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    pub id: usize,
    pub from: String,
    pub to: String,
    pub status: Option<String>,
}

impl RawRow {
    /// Converts to a rule, or `None` when either endpoint is blank.
    pub fn into_rule(self) -> Option<RedirectRule> {
        if self.from.trim().is_empty() || self.to.trim().is_empty() {
            return None;
        }
        let status = StatusType::parse_or_default(self.status.as_deref());
        Some(RedirectRule {
            id: RuleId(self.id),
            from: self.from,
            to: self.to,
            status,
        })
    }
}

/// Keeps rows with both endpoints present, preserving order.
pub fn collect_rules<I>(rows: I) -> Vec<RedirectRule>
where
    I: IntoIterator<Item = RawRow>,
{
    rows.into_iter().filter_map(RawRow::into_rule).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: usize, from: &str, to: &str, status: Option<&str>) -> RawRow {
        RawRow {
            id,
            from: from.to_string(),
            to: to.to_string(),
            status: status.map(String::from),
        }
    }

    #[test]
    fn status_codes() {
        assert_eq!(StatusType::Permanent.code(), 301);
        assert_eq!(StatusType::Found.code(), 302);
        assert_eq!(StatusType::Temporary.code(), 307);
        assert!(StatusType::Permanent.is_permanent());
        assert!(!StatusType::Found.is_permanent());
        assert!(!StatusType::Temporary.is_permanent());
    }

    #[test]
    fn status_parse_or_default() {
        assert_eq!(StatusType::parse_or_default(Some("302")), StatusType::Found);
        assert_eq!(StatusType::parse_or_default(Some(" 307 ")), StatusType::Temporary);
        assert_eq!(StatusType::parse_or_default(Some("308")), StatusType::Permanent);
        assert_eq!(StatusType::parse_or_default(Some("perm")), StatusType::Permanent);
        assert_eq!(StatusType::parse_or_default(None), StatusType::Permanent);
    }

    #[test]
    fn status_serde_as_string() {
        let s = serde_json::to_string(&StatusType::Temporary).unwrap();
        assert_eq!(s, "\"307\"");
        let back: StatusType = serde_json::from_str("\"302\"").unwrap();
        assert_eq!(back, StatusType::Found);
    }

    #[test]
    fn collect_rules_drops_blank_endpoints() {
        let rules = collect_rules(vec![
            row(1, "/a", "/b", Some("302")),
            row(2, "  ", "/c", None),
            row(3, "/d", "", None),
            row(4, "/e", "/f", Some("bogus")),
        ]);
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].id, RuleId(1));
        assert_eq!(rules[0].status, StatusType::Found);
        assert_eq!(rules[1].id, RuleId(4));
        assert_eq!(rules[1].status, StatusType::Permanent);
    }
}
