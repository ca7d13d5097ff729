//! CLI command handlers, one file per command.

mod check;
mod completions;
mod export;
mod formats;
mod man;

pub use check::run_check;
pub use completions::run_completions;
pub use export::{run_export, ExportTarget};
pub use formats::run_formats;
pub use man::run_man;
