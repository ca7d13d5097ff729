//! Line-oriented rule lists: CSV, TSV or whitespace separated.

use super::SkippedLine;
use crate::rule::RawRow;

/// Splits one trimmed line the way a pasted list usually looks: tabs win over
/// commas, commas over whitespace. Empty fields are dropped.
fn split_fields(line: &str) -> Vec<&str> {
    let parts: Vec<&str> = if line.contains('\t') {
        line.split('\t').collect()
    } else if line.contains(',') {
        line.split(',').collect()
    } else {
        line.split_whitespace().collect()
    };
    parts
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

fn is_header(fields: &[&str]) -> bool {
    matches!(fields, [from, to, ..] if from.eq_ignore_ascii_case("from") && to.eq_ignore_ascii_case("to"))
}

/// Returns rows keyed by 1-based line number plus the lines that had fewer
/// than two fields.
pub(super) fn parse_lines(text: &str) -> (Vec<RawRow>, Vec<SkippedLine>) {
    let mut rows = Vec::new();
    let mut skipped = Vec::new();
    let mut seen_data = false;

    for (idx, raw_line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let fields = split_fields(line);
        let first_data = !seen_data;
        seen_data = true;
        if first_data && is_header(&fields) {
            continue;
        }
        match fields.as_slice() {
            [from, to, rest @ ..] => rows.push(RawRow {
                id: line_no,
                from: from.to_string(),
                to: to.to_string(),
                status: rest.first().map(|s| s.to_string()),
            }),
            _ => {
                tracing::warn!(line = line_no, "skipping rule line without a destination");
                skipped.push(SkippedLine {
                    line: line_no,
                    text: line.to_string(),
                });
            }
        }
    }

    (rows, skipped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_by_tab_comma_or_space() {
        assert_eq!(split_fields("/a\t/b\t302"), vec!["/a", "/b", "302"]);
        assert_eq!(split_fields("/a, /b ,307"), vec!["/a", "/b", "307"]);
        assert_eq!(split_fields("/a   /b"), vec!["/a", "/b"]);
        assert_eq!(split_fields("/a,,/b"), vec!["/a", "/b"]);
    }

    #[test]
    fn tab_takes_precedence_over_comma() {
        assert_eq!(split_fields("/a,x\t/b"), vec!["/a,x", "/b"]);
    }

    #[test]
    fn ids_are_line_numbers() {
        let (rows, skipped) = parse_lines("# comment\n/a /b\n\n/c,/d,302\n");
        assert!(skipped.is_empty());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, 2);
        assert_eq!(rows[1].id, 4);
        assert_eq!(rows[1].status.as_deref(), Some("302"));
    }

    #[test]
    fn header_skipped_only_on_first_data_line() {
        let (rows, _) = parse_lines("from,to,type\n/a,/b,301\nfrom,to\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].from, "/a");
        assert_eq!(rows[1].from, "from");
    }

    #[test]
    fn single_field_lines_are_reported() {
        let (rows, skipped) = parse_lines("/lonely\n/a /b");
        assert_eq!(rows.len(), 1);
        assert_eq!(skipped, vec![SkippedLine { line: 1, text: "/lonely".into() }]);
    }
}
