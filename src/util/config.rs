//! Configuration file support for scsubgen.
//!
//! Configuration is optional. When present it lives next to the scanned tree:
//! - Project: `<root>/.scsubgen.toml`
//! - Explicit: any file passed with `--config`
//!
//! Every key defaults to the built-in catalogues, so an empty file (or no file)
//! reproduces the stock descriptor.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::catalogue::{EXCLUDED_DIR_NAMES, EXCLUDED_FILE_NAMES};
use crate::core::filter::{CATEGORY_PREFIXES, GENERATED_SUFFIX, SOURCE_EXTENSION, TEST_PREFIX};
use crate::core::{ExclusionSet, SourceFilter};
use crate::ops::scan::ScanOptions;

/// Name of the project config file looked up in the scan root.
pub const CONFIG_FILE_NAME: &str = ".scsubgen.toml";

/// Generator configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Directory scanning
    pub scan: ScanConfig,

    /// Source selection rules
    pub filter: FilterConfig,

    /// Descriptor output
    pub output: OutputConfig,
}

/// Order in which directory listings are walked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanOrder {
    /// Sort each listing by file name (deterministic output)
    #[default]
    Sorted,
    /// Keep whatever order the OS enumeration returns
    Filesystem,
}

/// Directory scanning settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScanConfig {
    /// Directory basenames never descended into
    pub excluded_dirs: Vec<String>,

    /// Listing order
    pub order: ScanOrder,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            excluded_dirs: to_strings(EXCLUDED_DIR_NAMES),
            order: ScanOrder::default(),
        }
    }
}

/// Source selection settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FilterConfig {
    /// Compilable-source extension, without the dot
    pub extension: String,

    /// Suffix of generated units
    pub generated_suffix: String,

    /// Basenames never compiled on their own
    pub excluded_files: Vec<String>,

    /// Prefixes of demo and pass-category files
    pub category_prefixes: Vec<String>,

    /// Prefix of test drivers
    pub test_prefix: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig {
            extension: SOURCE_EXTENSION.to_string(),
            generated_suffix: GENERATED_SUFFIX.to_string(),
            excluded_files: to_strings(EXCLUDED_FILE_NAMES),
            category_prefixes: to_strings(CATEGORY_PREFIXES),
            test_prefix: TEST_PREFIX.to_string(),
        }
    }
}

/// Descriptor output settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Descriptor file name, relative to the root
    pub file_name: String,

    /// Build output directory added to the search path
    pub build_dir: String,

    /// Units appended after every directory group
    pub extra_sources: Vec<String>,

    /// Name of the imported build environment
    pub env_name: String,

    /// Alias the module binds the environment to
    pub module_env: String,

    /// Target list the sources are registered under
    pub target: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            file_name: "SCsub".to_string(),
            build_dir: "build/".to_string(),
            extra_sources: vec!["godot_gsl.cpp".to_string(), "register_types.cpp".to_string()],
            env_name: "env".to_string(),
            module_env: "env_godot_gsl".to_string(),
            target: "env.modules_sources".to_string(),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Resolve the configuration for a scan root.
    ///
    /// The project file is optional, but any file that is used must parse.
    pub fn for_root(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                tracing::debug!("Using config {}", path.display());
                Self::load(path)
            }
            None => {
                let path = project_config_path(root);
                if path.exists() {
                    tracing::debug!("Using config {}", path.display());
                    Self::load(&path)
                } else {
                    tracing::debug!("No config file, using built-in catalogues");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Filter rules described by this configuration.
    pub fn source_filter(&self) -> SourceFilter {
        SourceFilter::new(
            self.filter.extension.clone(),
            self.filter.generated_suffix.clone(),
            ExclusionSet::new(self.filter.excluded_files.iter().cloned()),
            self.filter.category_prefixes.clone(),
            self.filter.test_prefix.clone(),
        )
    }

    /// Scanner settings described by this configuration.
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            excluded_dirs: self.scan.excluded_dirs.iter().cloned().collect(),
            order: self.scan.order,
        }
    }
}

/// Get the project config path (`<root>/.scsubgen.toml`).
pub fn project_config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE_NAME)
}
