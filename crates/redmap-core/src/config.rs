use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::export::{EmitOptions, ExportFormat};
use crate::validate::{LoopDetection, Severity, ValidateOptions};

/// Global configuration loaded from `~/.config/redmap/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedmapConfig {
    /// Format used by `redmap export` when `--format` is not given.
    pub default_format: ExportFormat,
    /// "cycles" (any length) or "pairs" (mutual pairs and self-redirects only).
    pub loop_detection: LoopDetection,
    /// Write the "generated by" comment at the top of htaccess and nginx output.
    pub emit_header: bool,
    /// Lowest severity that makes `redmap check` exit non-zero; unset means never.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fail_on: Option<Severity>,
}

impl Default for RedmapConfig {
    fn default() -> Self {
        Self {
            default_format: ExportFormat::Htaccess,
            loop_detection: LoopDetection::Cycles,
            emit_header: true,
            fail_on: None,
        }
    }
}

impl RedmapConfig {
    pub fn validate_options(&self) -> ValidateOptions {
        ValidateOptions {
            loop_detection: self.loop_detection,
        }
    }

    pub fn emit_options(&self) -> EmitOptions {
        EmitOptions {
            header: self.emit_header,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("redmap")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RedmapConfig> {
    load_or_init_at(&config_path()?)
}

pub fn load_or_init_at(path: &Path) -> Result<RedmapConfig> {
    if !path.exists() {
        let default_cfg = RedmapConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)
            .with_context(|| format!("write default config: {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: RedmapConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
