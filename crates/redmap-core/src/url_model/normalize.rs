//! Endpoint normalization.

use url::Url;

/// Parses `raw` as an absolute URL that carries a host.
///
/// Returns `None` for bare paths (`/old-page`) and for scheme-only strings
/// such as `mailto:` or `localhost:8080/x`, which have no host.
pub fn parse_absolute(raw: &str) -> Option<Url> {
    let parsed = Url::parse(raw.trim()).ok()?;
    parsed.host_str()?;
    Some(parsed)
}

/// Canonical comparison key for a redirect endpoint.
///
/// An absolute URL becomes `path + ?query` (an empty query is dropped),
/// discarding scheme, host, port and fragment. Anything that does not parse is returned trimmed, unchanged.
/// No case folding, trailing-slash or percent-decoding is applied.
pub fn normalize(raw: &str) -> String {
    match parse_absolute(raw) {
        Some(url) => match url.query() {
            Some(query) if !query.is_empty() => format!("{}?{}", url.path(), query),
            _ => url.path().to_string(),
        },
        None => raw.trim().to_string(),
    }
}
