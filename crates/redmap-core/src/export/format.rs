//! Export format catalog: ids, default filenames and MIME types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Apache `.htaccess` with mod_alias `Redirect` directives.
    #[default]
    Htaccess,
    /// Nginx exact-match `location` blocks.
    Nginx,
    /// Cloudflare-style `{source, destination, permanent}` list.
    Cloudflare,
    Csv,
    /// Lossless `{from, to, type}` list.
    Json,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 5] = [
        ExportFormat::Htaccess,
        ExportFormat::Nginx,
        ExportFormat::Cloudflare,
        ExportFormat::Csv,
        ExportFormat::Json,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ExportFormat::Htaccess => "htaccess",
            ExportFormat::Nginx => "nginx",
            ExportFormat::Cloudflare => "cloudflare",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Htaccess => ".htaccess",
            ExportFormat::Nginx => "Nginx",
            ExportFormat::Cloudflare => "Cloudflare",
            ExportFormat::Csv => "CSV",
            ExportFormat::Json => "JSON",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ExportFormat::Htaccess => "Apache web server",
            ExportFormat::Nginx => "Nginx server config",
            ExportFormat::Cloudflare => "Cloudflare Workers / Pages rules",
            ExportFormat::Csv => "Spreadsheet / import",
            ExportFormat::Json => "Generic / custom integration",
        }
    }

    /// Filename used when the document is written into a directory.
    pub fn filename(self) -> &'static str {
        match self {
            ExportFormat::Htaccess => ".htaccess",
            ExportFormat::Nginx => "redirects.conf",
            ExportFormat::Cloudflare | ExportFormat::Json => "redirects.json",
            ExportFormat::Csv => "redirects.csv",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Htaccess | ExportFormat::Nginx => "text/plain",
            ExportFormat::Cloudflare | ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown export format {0:?} (expected one of: htaccess, nginx, cloudflare, csv, json)")]
pub struct UnknownFormat(pub String);

impl FromStr for ExportFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().trim_start_matches('.').to_ascii_lowercase();
        ExportFormat::ALL
            .into_iter()
            .find(|f| f.id() == wanted)
            .ok_or_else(|| UnknownFormat(s.to_string()))
    }
}
