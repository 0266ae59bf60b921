//! Implementation of `scsubgen generate`.
//!
//! One linear pass: scan, derive include paths, collect sources, write.

use std::path::{Path, PathBuf};

use crate::core::BuildDescriptor;
use crate::ops::collect::collect_sources;
use crate::ops::paths::include_paths;
use crate::ops::scan::scan_directories;
use crate::ops::write::{render, write_descriptor};
use crate::util::errors::Result;
use crate::util::Config;

/// Scan `root` and assemble the descriptor in memory.
pub fn build_descriptor(root: &Path, config: &Config) -> Result<BuildDescriptor> {
    let filter = config.source_filter();
    let dirs = scan_directories(root, &config.scan_options())?;

    let include_paths = include_paths(&config.output.build_dir, &dirs);
    let sources = collect_sources(root, &dirs, &filter, &config.output.extra_sources)?;

    Ok(BuildDescriptor {
        filter,
        include_paths,
        sources,
        target: config.output.target.clone(),
    })
}

/// Generate the descriptor and overwrite it under `root`.
pub fn generate(root: &Path, config: &Config) -> Result<PathBuf> {
    let descriptor = build_descriptor(root, config)?;
    write_descriptor(root, &descriptor, &config.output)
}

/// Generate the descriptor text without touching the filesystem.
pub fn render_descriptor(root: &Path, config: &Config) -> Result<String> {
    let descriptor = build_descriptor(root, config)?;
    Ok(render(&descriptor, &config.output))
}
