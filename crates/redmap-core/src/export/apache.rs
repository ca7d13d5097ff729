//! Apache `.htaccess` emitter.
//!
//! Plain path sources become mod_alias `Redirect` lines. `Redirect` never
//! looks at the query string, so as soon as one source carries a query the
//! whole document switches to mod_rewrite, keeping every rule in input order
//! inside one block. Sources are written as their server-side path; absolute
//! source URLs lose their scheme and host.

use super::{header_line, quote_arg, EmitOptions, ServerMatch, EMPTY_PLACEHOLDER};
use crate::rule::RedirectRule;

const REGEX_META: &[char] = &[
    '\\', '.', '^', '$', '|', '?', '*', '+', '(', ')', '[', ']', '{', '}',
];

pub fn emit(rules: &[RedirectRule]) -> String {
    emit_with(rules, &EmitOptions::default())
}

pub fn emit_with(rules: &[RedirectRule], opts: &EmitOptions) -> String {
    if rules.is_empty() {
        return EMPTY_PLACEHOLDER.to_string();
    }
    let matches: Vec<ServerMatch> = rules.iter().map(|r| ServerMatch::of(&r.from)).collect();
    let needs_rewrite = matches.iter().any(|m| m.query.is_some());

    let mut lines = Vec::with_capacity(rules.len() * 2 + 4);
    if opts.header {
        lines.push(header_line(rules));
    }
    if needs_rewrite {
        lines.push("<IfModule mod_rewrite.c>".to_string());
        lines.push("RewriteEngine On".to_string());
        for (rule, m) in rules.iter().zip(&matches) {
            push_rewrite(&mut lines, rule, m);
        }
    } else {
        lines.push("<IfModule mod_alias.c>".to_string());
        for (rule, m) in rules.iter().zip(&matches) {
            lines.push(format!(
                "Redirect {} {} {}",
                rule.status.code(),
                quote_arg(&m.path, &[]),
                quote_arg(rule.to.trim(), &[])
            ));
        }
    }
    lines.push("</IfModule>".to_string());
    lines.join("\n")
}

fn push_rewrite(lines: &mut Vec<String>, rule: &RedirectRule, m: &ServerMatch) {
    // Per-directory patterns see the path without its leading slash.
    let pattern = format!("^{}$", escape_regex(m.path.trim_start_matches('/')));
    let code = rule.status.code();
    match &m.query {
        Some(query) => {
            lines.push(format!(
                "RewriteCond %{{QUERY_STRING}} ^{}$",
                escape_regex(query)
            ));
            // QSD: the matched query is not carried over to the destination.
            lines.push(format!(
                "RewriteRule {} {} [R={code},L,QSD]",
                pattern,
                quote_arg(rule.to.trim(), &[])
            ));
        }
        None => lines.push(format!(
            "RewriteRule {} {} [R={code},L]",
            pattern,
            quote_arg(rule.to.trim(), &[])
        )),
    }
}

/// Escapes a literal for use in a mod_rewrite pattern; whitespace is escaped
/// too so the pattern stays a single argument.
fn escape_regex(literal: &str) -> String {
    let mut out = String::with_capacity(literal.len());
    for c in literal.chars() {
        if REGEX_META.contains(&c) || c.is_whitespace() {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::{RuleId, StatusType};

    #[test]
    fn single_permanent_rule() {
        let rules = vec![RedirectRule::new(RuleId(1), "/old", "/new", StatusType::Permanent)];
        assert_eq!(
            emit(&rules),
            "# Redirects generated by redmap (1 rule)\n\
             <IfModule mod_alias.c>\n\
             Redirect 301 /old /new\n\
             </IfModule>"
        );
    }

    #[test]
    fn absolute_source_reduced_to_path() {
        let rules = vec![RedirectRule::new(
            RuleId(1),
            "https://example.com/old",
            "https://example.org/new",
            StatusType::Found,
        )];
        assert!(emit(&rules).contains("Redirect 302 /old https://example.org/new"));
    }

    #[test]
    fn query_source_uses_rewrite_conditions() {
        let rules = vec![
            RedirectRule::new(RuleId(1), "/plain.html", "/a", StatusType::Permanent),
            RedirectRule::new(RuleId(2), "https://example.com/old?x=1", "/new", StatusType::Temporary),
        ];
        let out = emit_with(&rules, &EmitOptions { header: false });
        assert_eq!(
            out,
            "<IfModule mod_rewrite.c>\n\
             RewriteEngine On\n\
             RewriteRule ^plain\\.html$ /a [R=301,L]\n\
             RewriteCond %{QUERY_STRING} ^x=1$\n\
             RewriteRule ^old$ /new [R=307,L,QSD]\n\
             </IfModule>"
        );
        assert!(!out.contains("Redirect "));
    }

    #[test]
    fn hostful_source_without_path_targets_root() {
        let rules = vec![RedirectRule::new(RuleId(1), "foo://host", "/new", StatusType::Permanent)];
        assert!(emit(&rules).contains("Redirect 301 / /new"));

        let rules = vec![RedirectRule::new(RuleId(1), "foo://host?a=b", "/new", StatusType::Permanent)];
        let out = emit(&rules);
        assert!(out.contains("RewriteCond %{QUERY_STRING} ^a=b$"));
        assert!(out.contains("RewriteRule ^$ /new [R=301,L,QSD]"));
    }

    #[test]
    fn keeps_input_order_and_duplicates() {
        let rules = vec![
            RedirectRule::new(RuleId(1), "/b", "/x", StatusType::Permanent),
            RedirectRule::new(RuleId(2), "/a", "/y", StatusType::Permanent),
            RedirectRule::new(RuleId(3), "/b", "/z", StatusType::Permanent),
        ];
        let out = emit(&rules);
        let directives: Vec<&str> = out.lines().filter(|l| l.starts_with("Redirect ")).collect();
        assert_eq!(
            directives,
            vec!["Redirect 301 /b /x", "Redirect 301 /a /y", "Redirect 301 /b /z"]
        );
    }

    #[test]
    fn quotes_paths_with_spaces() {
        let rules = vec![RedirectRule::new(RuleId(1), "/old page", "/new", StatusType::Permanent)];
        assert!(emit(&rules).contains("Redirect 301 \"/old page\" /new"));
    }

    #[test]
    fn escape_regex_literals() {
        assert_eq!(escape_regex("a.b?c"), "a\\.b\\?c");
        assert_eq!(escape_regex("x y"), "x\\ y");
    }
}
