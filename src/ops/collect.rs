//! Source collection.
//!
//! Each directory is matched on its own (`<dir>/*.<ext>`, never recursive) and
//! kept as a separate group so every selection can be traced back to the
//! directory it came from.

use std::path::Path;

use glob::{glob, Pattern};

use crate::core::descriptor::{SourceEntry, ROOT_DIR};
use crate::core::SourceFilter;
use crate::util::errors::{GenerateError, Result};
use crate::util::fs::basename;

/// Select the accepted sources directly inside `dir` (relative to `root`).
///
/// Returns basenames in the order `glob` yields them (sorted).
pub fn collect_group(root: &Path, dir: &str, filter: &SourceFilter) -> Result<Vec<String>> {
    let base = if dir == ROOT_DIR {
        root.to_path_buf()
    } else {
        root.join(dir)
    };
    let pattern = format!(
        "{}/*.{}",
        Pattern::escape(&base.to_string_lossy()),
        filter.extension()
    );

    let paths = glob(&pattern).map_err(|source| GenerateError::Pattern {
        pattern: pattern.clone(),
        source,
    })?;

    let mut accepted = Vec::new();
    let mut rejected = 0usize;
    for entry in paths {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!("glob error: {}", e);
                continue;
            }
        };

        if !path.is_file() {
            continue;
        }

        let Some(name) = basename(&path) else {
            tracing::warn!("Skipping non UTF-8 file: {}", path.display());
            continue;
        };

        match filter.rejection(name) {
            None => accepted.push(name.to_string()),
            Some(reason) => {
                tracing::trace!("Rejected {}/{}: {}", dir, name, reason);
                rejected += 1;
            }
        }
    }

    tracing::debug!(
        "{}: {} accepted, {} rejected",
        dir,
        accepted.len(),
        rejected
    );
    Ok(accepted)
}

/// Collect one group for the root and one per scanned directory, then append
/// the extras unconditionally.
pub fn collect_sources(
    root: &Path,
    dirs: &[String],
    filter: &SourceFilter,
    extras: &[String],
) -> Result<Vec<SourceEntry>> {
    let mut entries = Vec::with_capacity(dirs.len() + 1 + extras.len());

    for dir in std::iter::once(ROOT_DIR).chain(dirs.iter().map(String::as_str)) {
        let files = collect_group(root, dir, filter)?;
        entries.push(SourceEntry::group(dir, files));
    }

    entries.extend(extras.iter().map(|name| SourceEntry::extra(name.as_str())));
    Ok(entries)
}
