//! Cloudflare-style redirect list.
//!
//! Cloudflare only distinguishes permanent from temporary, so 302 and 307
//! both render as `"permanent": false`.

use serde::Serialize;

use super::to_json;
use crate::rule::RedirectRule;

#[derive(Debug, Serialize)]
struct CloudflareRule<'a> {
    source: &'a str,
    destination: &'a str,
    permanent: bool,
}

pub fn emit(rules: &[RedirectRule]) -> String {
    let doc: Vec<CloudflareRule<'_>> = rules
        .iter()
        .map(|r| CloudflareRule {
            source: r.from.trim(),
            destination: r.to.trim(),
            permanent: r.status.is_permanent(),
        })
        .collect();
    to_json(&doc, true)
}
