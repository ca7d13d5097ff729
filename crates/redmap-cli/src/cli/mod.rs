//! CLI for redmap, the redirect map builder.

mod commands;
mod input;

use anyhow::Result;
use clap::{Parser, Subcommand};
use redmap_core::config;
use redmap_core::export::ExportFormat;
use redmap_core::validate::Severity;
use std::path::PathBuf;

use commands::{run_check, run_completions, run_export, run_formats, run_man, ExportTarget};

/// Top-level CLI for redmap.
#[derive(Debug, Parser)]
#[command(name = "redmap")]
#[command(about = "redmap: validate redirect maps and export server configs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Check a rules file for duplicate sources, chains and loops.
    Check {
        /// Rules file (JSON list or `from to [status]` lines); `-` reads stdin.
        rules: PathBuf,

        /// Print issues as JSON instead of text.
        #[arg(long)]
        json: bool,

        /// Exit non-zero when an issue of this severity (or worse) is found.
        #[arg(long, value_name = "SEVERITY")]
        fail_on: Option<Severity>,
    },

    /// Render a rules file as server or platform configuration.
    Export {
        /// Rules file (JSON list or `from to [status]` lines); `-` reads stdin.
        rules: PathBuf,

        /// Output format: htaccess, nginx, cloudflare, csv or json (default from config).
        #[arg(long, short)]
        format: Option<ExportFormat>,

        /// Write to this file instead of stdout.
        #[arg(long, short, value_name = "PATH", conflicts_with = "out_dir")]
        output: Option<PathBuf>,

        /// Write into this directory using the format's default filename.
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },

    /// List export formats with their default filenames and MIME types.
    Formats,

    /// Print shell completions.
    Completions {
        /// Target shell.
        shell: clap_complete::Shell,
    },

    /// Print the man page (roff).
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Check {
                rules,
                json,
                fail_on,
            } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_check(&cfg, &rules, json, fail_on.or(cfg.fail_on))?;
            }
            CliCommand::Export {
                rules,
                format,
                output,
                out_dir,
            } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                let format = format.unwrap_or(cfg.default_format);
                let target = ExportTarget::from_args(output, out_dir);
                run_export(&cfg, &rules, format, &target)?;
            }
            CliCommand::Formats => run_formats(),
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
