//! Core data types: catalogues, filter rules, the descriptor model and the
//! build environment seam.

pub mod catalogue;
pub mod descriptor;
pub mod environment;
pub mod filter;

pub use catalogue::ExclusionSet;
pub use descriptor::{BuildDescriptor, SourceEntry};
pub use environment::{BuildEnvironment, RecordingEnvironment};
pub use filter::{Rejection, SourceFilter};
