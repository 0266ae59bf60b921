//! Directory scanning.
//!
//! The scan is a pure recursive function: every level lists one directory,
//! recurses into each accepted child, and returns a freshly built sequence that
//! the caller splices in right after the child itself (pre-order).
//!
//! Symlinks to directories are scanned like directories. A link that resolves
//! to the directory it sits in, or to any directory above it, is skipped so the
//! walk always terminates.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::util::config::ScanOrder;
use crate::util::errors::{GenerateError, Result};
use crate::util::fs::join_relative;

/// Settings for [`scan_directories`].
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Directory basenames skipped together with their subtrees.
    pub excluded_dirs: HashSet<String>,
    /// Listing order at every level.
    pub order: ScanOrder,
}

impl ScanOptions {
    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded_dirs.contains(name)
    }
}

impl Default for ScanOptions {
    fn default() -> Self {
        crate::util::Config::default().scan_options()
    }
}

/// List every directory below `root`, excluding the root itself.
///
/// Paths are relative to `root`, `/`-separated, without a leading `./`.
pub fn scan_directories(root: &Path, options: &ScanOptions) -> Result<Vec<String>> {
    if !root.is_dir() {
        return Err(GenerateError::ReadDir {
            path: root.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "not a directory"),
        });
    }

    tracing::info!("Scanning {}", root.display());
    let dirs = scan_level(root, "", &[], options)?;
    tracing::debug!("Found {} directories", dirs.len());
    Ok(dirs)
}

fn canonical(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).map_err(|source| GenerateError::ReadDir {
        path: path.to_path_buf(),
        source,
    })
}

fn scan_level(
    root: &Path,
    rel: &str,
    ancestors: &[PathBuf],
    options: &ScanOptions,
) -> Result<Vec<String>> {
    let dir = if rel.is_empty() {
        root.to_path_buf()
    } else {
        root.join(rel)
    };

    let mut lineage = ancestors.to_vec();
    lineage.push(canonical(&dir)?);

    let mut walker = WalkDir::new(&dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false);
    if options.order == ScanOrder::Sorted {
        walker = walker.sort_by_file_name();
    }

    let mut dirs = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| GenerateError::ReadDir {
            path: dir.clone(),
            source: e.into(),
        })?;

        // Resolves symlinks; dangling links are not directories.
        if !entry.path().is_dir() {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            tracing::warn!("Skipping non UTF-8 directory: {}", entry.path().display());
            continue;
        };

        let child = join_relative(rel, name);
        if options.is_excluded(name) {
            tracing::debug!("Skipping excluded directory {}", child);
            continue;
        }

        if entry.path_is_symlink() && lineage.contains(&canonical(entry.path())?) {
            tracing::warn!("Skipping symlink cycle at {}", child);
            continue;
        }

        let descendants = scan_level(root, &child, &lineage, options)?;
        dirs.push(child);
        dirs.extend(descendants);
    }

    Ok(dirs)
}
