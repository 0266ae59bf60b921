//! Source filter rules.
//!
//! A [`SourceFilter`] decides, from a basename alone, whether a file is an
//! independent compilation unit. The same rule data drives both the in-process
//! selection and the filter expression written into the descriptor, so the two
//! can never disagree.

use std::fmt;

use super::catalogue::ExclusionSet;

/// Default compilable-source extension (without the dot).
pub const SOURCE_EXTENSION: &str = "c";

/// Suffix marking sources that are generated from templates and `#include`d.
pub const GENERATED_SUFFIX: &str = "_source.c";

/// Prefixes for demo programs and per-radix FFT pass files.
pub const CATEGORY_PREFIXES: &[&str] = &["demo", "c_pass_", "hc_pass_", "fp-", "real_pass_"];

/// Prefix for test drivers.
pub const TEST_PREFIX: &str = "test_";

/// Why a file was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Not a compilable source at all.
    WrongExtension,
    /// Ends with the generated-unit suffix.
    Generated,
    /// Listed in the exclusion set.
    Excluded,
    /// Starts with one of the category prefixes.
    Category(String),
    /// Starts with the test-marker prefix.
    TestMarker,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::WrongExtension => write!(f, "not a source file"),
            Rejection::Generated => write!(f, "generated unit"),
            Rejection::Excluded => write!(f, "in exclusion set"),
            Rejection::Category(prefix) => write!(f, "category prefix `{}`", prefix),
            Rejection::TestMarker => write!(f, "test driver"),
        }
    }
}

/// Immutable filter rules applied to every candidate basename.
#[derive(Debug, Clone)]
pub struct SourceFilter {
    extension: String,
    generated_suffix: String,
    exclusions: ExclusionSet,
    category_prefixes: Vec<String>,
    test_prefix: String,
}

impl SourceFilter {
    /// Create a filter from explicit rule data.
    pub fn new(
        extension: impl Into<String>,
        generated_suffix: impl Into<String>,
        exclusions: ExclusionSet,
        category_prefixes: Vec<String>,
        test_prefix: impl Into<String>,
    ) -> Self {
        SourceFilter {
            extension: extension.into(),
            generated_suffix: generated_suffix.into(),
            exclusions,
            category_prefixes,
            test_prefix: test_prefix.into(),
        }
    }

    /// The built-in rules.
    pub fn builtin() -> Self {
        Self::new(
            SOURCE_EXTENSION,
            GENERATED_SUFFIX,
            ExclusionSet::builtin(),
            CATEGORY_PREFIXES.iter().map(|p| p.to_string()).collect(),
            TEST_PREFIX,
        )
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn generated_suffix(&self) -> &str {
        &self.generated_suffix
    }

    pub fn exclusions(&self) -> &ExclusionSet {
        &self.exclusions
    }

    pub fn category_prefixes(&self) -> &[String] {
        &self.category_prefixes
    }

    pub fn test_prefix(&self) -> &str {
        &self.test_prefix
    }

    /// Glob pattern selecting candidate files inside `dir`.
    pub fn glob_for(&self, dir: &str) -> String {
        format!("{}/*.{}", dir, self.extension)
    }

    /// Check a basename against every rule, returning the first that rejects it.
    pub fn rejection(&self, basename: &str) -> Option<Rejection> {
        let has_extension = basename
            .strip_suffix(self.extension.as_str())
            .is_some_and(|stem| stem.ends_with('.'));
        if !has_extension {
            return Some(Rejection::WrongExtension);
        }

        if basename.ends_with(self.generated_suffix.as_str()) {
            return Some(Rejection::Generated);
        }

        if self.exclusions.contains(basename) {
            return Some(Rejection::Excluded);
        }

        if let Some(prefix) = self
            .category_prefixes
            .iter()
            .find(|p| basename.starts_with(p.as_str()))
        {
            return Some(Rejection::Category(prefix.clone()));
        }

        if basename.starts_with(self.test_prefix.as_str()) {
            return Some(Rejection::TestMarker);
        }

        None
    }

    /// Check whether a basename is an independent compilation unit.
    pub fn accepts(&self, basename: &str) -> bool {
        self.rejection(basename).is_none()
    }
}

impl Default for SourceFilter {
    fn default() -> Self {
        Self::builtin()
    }
}
