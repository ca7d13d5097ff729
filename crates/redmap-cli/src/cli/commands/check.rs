//! `redmap check <rules>` – report duplicate sources, chains and loops.

use anyhow::Result;
use redmap_core::config::RedmapConfig;
use redmap_core::summary::RuleSetSummary;
use redmap_core::validate::{validate_with, Issue, Severity};
use std::path::Path;

use crate::cli::input::read_rules;

pub fn run_check(
    cfg: &RedmapConfig,
    rules_path: &Path,
    json: bool,
    fail_on: Option<Severity>,
) -> Result<()> {
    let outcome = read_rules(rules_path)?;
    let issues = validate_with(&outcome.rules, &cfg.validate_options());
    let summary = RuleSetSummary::new(&outcome.rules, &issues);
    tracing::info!("check {}: {}", rules_path.display(), summary);

    if json {
        println!("{}", serde_json::to_string_pretty(&issues)?);
    } else {
        println!("{summary}");
        for issue in &issues {
            println!("{issue}");
        }
    }

    if let Some(threshold) = fail_on {
        if summary.worst().is_some_and(|worst| worst >= threshold) {
            let failing = count_at_or_above(&issues, threshold);
            anyhow::bail!("{failing} issue(s) at or above {threshold} severity");
        }
    }
    Ok(())
}

fn count_at_or_above(issues: &[Issue], threshold: Severity) -> usize {
    issues.iter().filter(|i| i.severity >= threshold).count()
}
