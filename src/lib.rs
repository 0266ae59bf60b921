//! scsubgen - SCons build descriptor generator for vendored C libraries
//!
//! Scans a module source tree and writes an `SCsub` file that lists the
//! include paths, one filtered source selection per directory, and the
//! module's entry points, then registers them with the parent build.

pub mod core;
pub mod ops;
pub mod util;

/// Test utilities for scsubgen unit tests.
///
/// Only compiled for tests. Provides on-disk source tree fixtures.
#[cfg(test)]
pub mod test_support;

pub use crate::core::{BuildDescriptor, BuildEnvironment, ExclusionSet, SourceEntry, SourceFilter};
pub use ops::scan::{scan_directories, ScanOptions};
pub use util::{Config, GenerateError};
