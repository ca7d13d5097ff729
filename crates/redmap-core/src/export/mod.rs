//! Configuration emitters.
//!
//! Each emitter turns the same ordered rule snapshot into one complete
//! document. Emitters never sort, deduplicate or consult validation results;
//! a rule set with open issues still exports. Output has no trailing newline.

pub mod apache;
pub mod cloudflare;
pub mod csv;
mod format;
pub mod json;
pub mod nginx;

pub use format::{ExportFormat, UnknownFormat};

use std::borrow::Cow;

use crate::rule::RedirectRule;
use crate::url_model::normalize;

/// Placeholder for comment-capable formats when there is nothing to export.
pub const EMPTY_PLACEHOLDER: &str = "# No redirects to export yet.\n# Add redirect rules first.";

/// Output tweaks shared by the emitters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmitOptions {
    /// Leading "generated by" comment in htaccess and nginx output.
    pub header: bool,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self { header: true }
    }
}

/// Renders `rules` in `format` with default options.
pub fn emit(format: ExportFormat, rules: &[RedirectRule]) -> String {
    emit_with(format, rules, &EmitOptions::default())
}

pub fn emit_with(format: ExportFormat, rules: &[RedirectRule], opts: &EmitOptions) -> String {
    let out = match format {
        ExportFormat::Htaccess => apache::emit_with(rules, opts),
        ExportFormat::Nginx => nginx::emit_with(rules, opts),
        ExportFormat::Cloudflare => cloudflare::emit(rules),
        ExportFormat::Csv => csv::emit(rules),
        ExportFormat::Json => json::emit(rules),
    };
    tracing::debug!(
        format = format.id(),
        rules = rules.len(),
        bytes = out.len(),
        "emitted redirect config"
    );
    out
}

fn header_line(rules: &[RedirectRule]) -> String {
    let noun = if rules.len() == 1 { "rule" } else { "rules" };
    format!("# Redirects generated by redmap ({} {noun})", rules.len())
}

/// What a web server can match a source against: the request path, plus the
/// query string when the source carries one.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ServerMatch {
    path: String,
    query: Option<String>,
}

impl ServerMatch {
    /// Splits the normalized source at the first `?`. An empty path (a
    /// hostful URL such as `foo://host`) matches the site root.
    fn of(raw_from: &str) -> Self {
        let key = normalize(raw_from);
        let (path, query) = match key.split_once('?') {
            Some((path, query)) => (path, Some(query).filter(|q| !q.is_empty())),
            None => (key.as_str(), None),
        };
        Self {
            path: if path.is_empty() { "/".to_string() } else { path.to_string() },
            query: query.map(String::from),
        }
    }

    /// Path and query as they appear in the request line.
    fn request_uri(&self) -> String {
        match &self.query {
            Some(q) => format!("{}?{}", self.path, q),
            None => self.path.clone(),
        }
    }
}

/// Wraps a directive argument in double quotes when it contains whitespace,
/// a quote, or one of `specials`.
fn quote_arg<'a>(value: &'a str, specials: &[char]) -> Cow<'a, str> {
    let needs_quotes = value
        .chars()
        .any(|c| c.is_whitespace() || c == '"' || specials.contains(&c));
    if !needs_quotes {
        return Cow::Borrowed(value);
    }
    Cow::Owned(quote_always(value))
}

fn quote_always(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
}

/// Serializes to JSON. Rule documents hold only strings and booleans, so the
/// error branch is unreachable in practice; it degrades to an empty array.
fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> String {
    let result = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    result.unwrap_or_else(|err| {
        tracing::error!(error = %err, "failed to serialize redirect rules");
        "[]".to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::{RuleId, StatusType};

    fn sample() -> Vec<RedirectRule> {
        vec![
            RedirectRule::new(RuleId(1), "/old", "/new", StatusType::Permanent),
            RedirectRule::new(RuleId(2), "/promo", "/sale", StatusType::Found),
            RedirectRule::new(RuleId(3), "/tmp", "/elsewhere", StatusType::Temporary),
        ]
    }

    #[test]
    fn every_format_is_deterministic() {
        let rules = sample();
        for format in ExportFormat::ALL {
            assert_eq!(emit(format, &rules), emit(format, &rules), "{format}");
        }
    }

    #[test]
    fn every_format_has_placeholder_for_empty_input() {
        for format in ExportFormat::ALL {
            let out = emit(format, &[]);
            assert!(!out.is_empty(), "{format}");
            if matches!(format, ExportFormat::Cloudflare | ExportFormat::Json) {
                assert_eq!(out, "[]");
            } else {
                assert!(out.lines().all(|l| l.starts_with('#')), "{format}: {out}");
            }
        }
    }

    #[test]
    fn no_trailing_newline() {
        let rules = sample();
        for format in ExportFormat::ALL {
            assert!(!emit(format, &rules).ends_with('\n'), "{format}");
        }
    }

    #[test]
    fn status_mapping_across_formats() {
        let rules = sample();

        let htaccess = emit(ExportFormat::Htaccess, &rules);
        assert!(htaccess.contains("Redirect 301 /old /new"));
        assert!(htaccess.contains("Redirect 302 /promo /sale"));
        assert!(htaccess.contains("Redirect 307 /tmp /elsewhere"));

        let nginx = emit(ExportFormat::Nginx, &rules);
        assert!(nginx.contains("return 301 /new;"));
        assert!(nginx.contains("return 302 /sale;"));
        assert!(nginx.contains("return 307 /elsewhere;"));

        let cf: serde_json::Value =
            serde_json::from_str(&emit(ExportFormat::Cloudflare, &rules)).unwrap();
        assert_eq!(cf[0]["permanent"], true);
        assert_eq!(cf[1]["permanent"], false);
        assert_eq!(cf[2]["permanent"], false);

        let csv = emit(ExportFormat::Csv, &rules);
        assert!(csv.contains("/old,/new,301"));
        assert!(csv.contains("/promo,/sale,302"));
        assert!(csv.contains("/tmp,/elsewhere,307"));

        let json: serde_json::Value = serde_json::from_str(&emit(ExportFormat::Json, &rules)).unwrap();
        assert_eq!(json[0]["type"], "301");
        assert_eq!(json[1]["type"], "302");
        assert_eq!(json[2]["type"], "307");
    }

    #[test]
    fn header_can_be_disabled() {
        let rules = sample();
        let opts = EmitOptions { header: false };
        let out = emit_with(ExportFormat::Htaccess, &rules, &opts);
        assert!(!out.contains("generated by"));
        let out = emit_with(ExportFormat::Nginx, &rules, &opts);
        assert!(!out.contains("generated by"));
    }

    #[test]
    fn server_match_splits_query() {
        let m = ServerMatch::of("https://example.com/old?x=1#frag");
        assert_eq!(m.path, "/old");
        assert_eq!(m.query.as_deref(), Some("x=1"));
        assert_eq!(m.request_uri(), "/old?x=1");

        let plain = ServerMatch::of("/old");
        assert_eq!(plain.query, None);
        assert_eq!(plain.request_uri(), "/old");
    }

    #[test]
    fn server_match_empty_path_is_root() {
        assert_eq!(ServerMatch::of("foo://host").path, "/");
        assert_eq!(ServerMatch::of("foo://host?a=b").request_uri(), "/?a=b");
        assert_eq!(ServerMatch::of("/x?").query, None);
    }

    #[test]
    fn quote_arg_only_when_needed() {
        assert_eq!(quote_arg("/plain", &[]), "/plain");
        assert_eq!(quote_arg("/with space", &[]), "\"/with space\"");
        assert_eq!(quote_arg("/a\"b", &[]), "\"/a\\\"b\"");
        assert_eq!(quote_arg("/semi;colon", &[';']), "\"/semi;colon\"");
    }
}
