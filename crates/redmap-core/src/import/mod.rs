//! Rules-file import.
//!
//! Accepts either the generic JSON export (`[{"from","to","type"}]`) or a
//! line list where each line is `from to [status]`, separated by tabs, commas
//! or whitespace. Blank lines and `#` comments are ignored, and a leading
//! `from,to,type` header is skipped so CSV exports import cleanly.

mod error;
mod lines;

pub use error::ImportError;

use std::fs;
use std::path::Path;

use crate::export::json;
use crate::rule::{collect_rules, RedirectRule};

/// A line that could not be turned into a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub line: usize,
    pub text: String,
}

/// Rules read from one input, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportOutcome {
    pub rules: Vec<RedirectRule>,
    pub skipped: Vec<SkippedLine>,
}

/// Parses rules from text, detecting JSON by a leading `[`.
pub fn parse_rules(text: &str) -> Result<ImportOutcome, ImportError> {
    if text.trim_start().starts_with('[') {
        let rules = json::parse(text)?;
        tracing::debug!(rules = rules.len(), "parsed JSON rule list");
        return Ok(ImportOutcome {
            rules,
            skipped: Vec::new(),
        });
    }

    let (rows, skipped) = lines::parse_lines(text);
    let rows_seen = rows.len();
    let rules = collect_rules(rows);
    tracing::debug!(
        rules = rules.len(),
        dropped = rows_seen - rules.len(),
        skipped = skipped.len(),
        "parsed line rule list"
    );
    Ok(ImportOutcome { rules, skipped })
}

/// Reads and parses a rules file.
pub fn load_rules(path: &Path) -> Result<ImportOutcome, ImportError> {
    let text = fs::read_to_string(path).map_err(|source| ImportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_rules(&text)
}
