//! High-level operations: the scan, collect and write stages, and the
//! pipeline that runs them.

pub mod collect;
pub mod generate;
pub mod paths;
pub mod scan;
pub mod write;

pub use generate::{build_descriptor, generate, render_descriptor};
