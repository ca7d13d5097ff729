//! Generic JSON: `[{"from","to","type"}]`, the only lossless format.

use serde::{Deserialize, Serialize};

use super::to_json;
use crate::rule::{collect_rules, RawRow, RedirectRule, StatusType};

#[derive(Debug, Serialize)]
struct JsonRuleOut<'a> {
    from: &'a str,
    to: &'a str,
    #[serde(rename = "type")]
    status: StatusType,
}

/// Input side accepts `type` as a string or a number, or omitted.
#[derive(Debug, Deserialize)]
struct JsonRuleIn {
    #[serde(default)]
    from: String,
    #[serde(default)]
    to: String,
    #[serde(rename = "type", default)]
    status: Option<serde_json::Value>,
}

impl JsonRuleIn {
    fn status_text(&self) -> Option<String> {
        match &self.status {
            None | Some(serde_json::Value::Null) => None,
            Some(serde_json::Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
        }
    }
}

pub fn emit(rules: &[RedirectRule]) -> String {
    let doc: Vec<JsonRuleOut<'_>> = rules
        .iter()
        .map(|r| JsonRuleOut {
            from: &r.from,
            to: &r.to,
            status: r.status,
        })
        .collect();
    to_json(&doc, false)
}

/// Parses a JSON rule list. Ids are 1-based array positions; entries with a
/// blank endpoint are dropped and unknown statuses become 301.
pub fn parse(text: &str) -> Result<Vec<RedirectRule>, serde_json::Error> {
    let entries: Vec<JsonRuleIn> = serde_json::from_str(text)?;
    let rows = entries.into_iter().enumerate().map(|(i, entry)| RawRow {
        id: i + 1,
        status: entry.status_text(),
        from: entry.from,
        to: entry.to,
    });
    Ok(collect_rules(rows))
}
