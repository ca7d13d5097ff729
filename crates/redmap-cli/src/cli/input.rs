//! Reading rules from a file or stdin.

use anyhow::{Context, Result};
use redmap_core::import::{self, ImportOutcome};
use std::io::Read;
use std::path::Path;

/// Loads rules from `path`, or from stdin when `path` is `-`.
/// Lines that could not be parsed are reported on stderr.
pub fn read_rules(path: &Path) -> Result<ImportOutcome> {
    let outcome = if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("read rules from stdin")?;
        import::parse_rules(&text).context("parse rules from stdin")?
    } else {
        import::load_rules(path).with_context(|| format!("load rules: {}", path.display()))?
    };

    for skipped in &outcome.skipped {
        eprintln!(
            "warning: line {}: expected `from to [status]`, skipped: {}",
            skipped.line, skipped.text
        );
    }
    tracing::info!(
        rules = outcome.rules.len(),
        skipped = outcome.skipped.len(),
        "read rules from {}",
        path.display()
    );
    Ok(outcome)
}
