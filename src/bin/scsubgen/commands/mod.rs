//! Command implementations

pub mod completions;
pub mod dirs;
pub mod generate;
pub mod list;

use std::path::PathBuf;

use anyhow::{Context, Result};

use scsubgen::util::config::ScanOrder;
use scsubgen::Config;

use crate::cli::ScanArgs;

/// Resolve the source root and its configuration from shared arguments.
pub fn prepare(args: ScanArgs) -> Result<(PathBuf, Config)> {
    let root = match args.root {
        Some(root) => root,
        None => std::env::current_dir().context("failed to determine current directory")?,
    };

    let mut config = Config::for_root(&root, args.config.as_deref())?;
    if args.fs_order {
        config.scan.order = ScanOrder::Filesystem;
    }

    Ok((root, config))
}
