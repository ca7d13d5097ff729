//! Shared fixtures for integration tests.

use std::io::Write;
use tempfile::NamedTempFile;

/// Writes `contents` to a temp rules file that lives as long as the handle.
pub fn rules_file(contents: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(contents.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}
