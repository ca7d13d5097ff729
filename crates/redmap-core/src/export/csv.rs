//! CSV emitter: `from,to,type` header then one row per rule.
//!
//! Fields are written verbatim; values containing commas are not quoted.

use super::EMPTY_PLACEHOLDER;
use crate::rule::RedirectRule;

pub const HEADER: &str = "from,to,type";

pub fn emit(rules: &[RedirectRule]) -> String {
    if rules.is_empty() {
        return EMPTY_PLACEHOLDER.to_string();
    }
    let mut lines = Vec::with_capacity(rules.len() + 1);
    lines.push(HEADER.to_string());
    lines.extend(
        rules
            .iter()
            .map(|r| format!("{},{},{}", r.from.trim(), r.to.trim(), r.status)),
    );
    lines.join("\n")
}
