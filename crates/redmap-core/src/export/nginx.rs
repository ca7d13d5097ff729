//! Nginx emitter, meant to be included inside a `server { }` block.
//!
//! Plain sources become exact-match `location` blocks. `location` never sees
//! the query string, so sources with a query are matched with an `if` on
//! `$request_uri` instead.

use super::{header_line, quote_always, quote_arg, EmitOptions, ServerMatch, EMPTY_PLACEHOLDER};
use crate::rule::RedirectRule;

const NGINX_SPECIALS: &[char] = &[';', '{', '}', '\''];

pub fn emit(rules: &[RedirectRule]) -> String {
    emit_with(rules, &EmitOptions::default())
}

pub fn emit_with(rules: &[RedirectRule], opts: &EmitOptions) -> String {
    if rules.is_empty() {
        return EMPTY_PLACEHOLDER.to_string();
    }
    let mut lines = Vec::with_capacity(rules.len() * 3 + 2);
    if opts.header {
        lines.push(header_line(rules));
        lines.push("# Include inside a server { } block.".to_string());
    }
    for rule in rules {
        let m = ServerMatch::of(&rule.from);
        let opener = match m.query {
            Some(_) => format!("if ($request_uri = {}) {{", quote_always(&m.request_uri())),
            None => format!("location = {} {{", quote_arg(&m.path, NGINX_SPECIALS)),
        };
        lines.push(opener);
        lines.push(format!(
            "    return {} {};",
            rule.status.code(),
            quote_arg(rule.to.trim(), NGINX_SPECIALS)
        ));
        lines.push("}".to_string());
    }
    lines.join("\n")
}
