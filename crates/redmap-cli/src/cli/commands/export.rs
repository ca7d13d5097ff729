//! `redmap export <rules>` – render rules as server or platform config.

use anyhow::{Context, Result};
use redmap_core::config::RedmapConfig;
use redmap_core::export::{emit_with, ExportFormat};
use redmap_core::validate::validate_with;
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::input::read_rules;

/// Where the rendered document goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportTarget {
    Stdout,
    File(PathBuf),
    /// Directory; the file is named after the format's default filename.
    Dir(PathBuf),
}

impl ExportTarget {
    pub fn from_args(output: Option<PathBuf>, out_dir: Option<PathBuf>) -> Self {
        match (output, out_dir) {
            (Some(path), _) => ExportTarget::File(path),
            (None, Some(dir)) => ExportTarget::Dir(dir),
            (None, None) => ExportTarget::Stdout,
        }
    }

    fn path_for(&self, format: ExportFormat) -> Option<PathBuf> {
        match self {
            ExportTarget::Stdout => None,
            ExportTarget::File(path) => Some(path.clone()),
            ExportTarget::Dir(dir) => Some(dir.join(format.filename())),
        }
    }
}

pub fn run_export(
    cfg: &RedmapConfig,
    rules_path: &Path,
    format: ExportFormat,
    target: &ExportTarget,
) -> Result<()> {
    let outcome = read_rules(rules_path)?;

    // Export proceeds regardless; issues are only surfaced.
    let issues = validate_with(&outcome.rules, &cfg.validate_options());
    if !issues.is_empty() {
        eprintln!(
            "note: {} issue(s) found; run `redmap check {}` for details",
            issues.len(),
            rules_path.display()
        );
    }

    let doc = emit_with(format, &outcome.rules, &cfg.emit_options());
    write_document(target, format, &doc)?;
    Ok(())
}

/// Writes `doc` plus a final newline. Returns the file path, if any.
fn write_document(target: &ExportTarget, format: ExportFormat, doc: &str) -> Result<Option<PathBuf>> {
    let Some(path) = target.path_for(format) else {
        println!("{doc}");
        return Ok(None);
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create output dir: {}", parent.display()))?;
    }
    fs::write(&path, format!("{doc}\n"))
        .with_context(|| format!("write {}: {}", format.label(), path.display()))?;
    tracing::info!(format = format.id(), "wrote {}", path.display());
    eprintln!("Wrote {} ({})", path.display(), format.mime_type());
    Ok(Some(path))
}
