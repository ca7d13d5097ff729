pub mod config;
pub mod logging;

pub mod export;
pub mod import;
pub mod rule;
pub mod summary;
pub mod url_model;
pub mod validate;

pub use export::{emit, ExportFormat};
pub use rule::{RedirectRule, RuleId, StatusType};
pub use validate::{validate, Issue, IssueKind, Severity};
