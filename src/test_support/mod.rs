//! Test utilities for scsubgen unit tests.
//!
//! Provides a small builder for on-disk source trees so scanning and
//! collection can be tested against real directories.
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::test_support::TreeFixture;
//!
//! let tree = TreeFixture::new()
//!     .dir("build")
//!     .file("linalg/lu.c", "")
//!     .create();
//! ```

pub mod fixtures;

pub use fixtures::*;
