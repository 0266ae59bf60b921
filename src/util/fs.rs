//! Filesystem utilities.

use std::fs;
use std::path::Path;

use super::errors::{GenerateError, Result};

/// Write a string to a file, truncating any previous content.
///
/// The parent directory must already exist; nothing is created on the way.
pub fn overwrite_string(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Join a relative directory and an entry name with `/`, whatever the host
/// separator is. An empty parent yields the bare name.
pub fn join_relative(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", parent, name)
    }
}

/// UTF-8 basename of a path, if it has one.
pub fn basename(path: &Path) -> Option<&str> {
    path.file_name().and_then(|n| n.to_str())
}
