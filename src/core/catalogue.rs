//! Fixed catalogues of names the generator never compiles or descends into.
//!
//! The excluded files are implementation units that an umbrella source file
//! already `#include`s (so compiling them separately would produce duplicate
//! symbols), plus test and benchmark drivers shipped alongside the library.

use std::collections::HashSet;

/// Directory basenames that are never scanned, together with their subtrees.
pub const EXCLUDED_DIR_NAMES: &[&str] = &[
    "autom4te.cache",
    "build",
    "doc",
    "doc_texinfo",
    "test",
    ".git",
];

/// Built-in excluded filenames, in emission order.
///
/// `bitreverse.c` is listed twice; the duplicate is harmless and kept so the
/// emitted list matches the catalogue verbatim.
pub const EXCLUDED_FILE_NAMES: &[&str] = &[
    "common.c",
    "apply_givens.c",
    "cholesky_common.c",
    "svdstep.c",
    "lmiterate.c",
    "lmmisc.c",
    "lmpar.c",
    "lmset.c",
    "linear_common.c",
    "qrsolv.c",
    "hypot.c",
    "tests.c",
    "urand.c",
    "c_init.c",
    "c_main.c",
    "bitreverse.c",
    "c_radix2.c",
    "bitreverse.c",
    "factorize.c",
    "hc_init.c",
    "hc_main.c",
    "hc_radix2.c",
    "hc_unpack.c",
    "real_init.c",
    "real_main.c",
    "real_radix2.c",
    "real_unpack.c",
    "linear_minimize.c",
    "linear_wrapper.c",
    "directional_minimize.c",
    "find.c",
    "find2d.c",
    "qrstep.c",
    "beta_inc.c",
    "testint.c",
    "ringbuf.c",
    "deque.c",
    "cquad_const.c",
    "initialise.c",
    "append.c",
    "set_initial.c",
    "qpsrt.c",
    "util.c",
    "qc25s.c",
    "qc25c.c",
    "qelg.c",
    "err.c",
    "reset.c",
    "qpsrt2.c",
    "positivity.c",
    "qc25f.c",
    "ptsort.c",
    "companion.c",
    "balance.c",
    "qr.c",
    "demof.c",
    "nielsen.c",
    "step_utils.c",
    "control_utils.c",
    "rksubs.c",
    "modnewton1.c",
    "cheb_eval.c",
    "cheb_eval_mode.c",
    "enorm.c",
    "dogleg.c",
    "test.c",
    "endian.c",
    "standardize.c",
    "lmutil.c",
    "hess.c",
    "wigner.c",
    "benchmark.c",
    "errs.c",
    "poly.c",
    "testgen.c",
    "norm.c",
];

/// Read-only set of basenames excluded from every directory.
///
/// Keeps both the ordered entry list (for emission) and a hash set (for
/// membership tests).
#[derive(Debug, Clone)]
pub struct ExclusionSet {
    entries: Vec<String>,
    lookup: HashSet<String>,
}

impl ExclusionSet {
    /// Create a set from arbitrary names. Duplicates are kept in `entries()`.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries: Vec<String> = names.into_iter().map(Into::into).collect();
        let lookup = entries.iter().cloned().collect();
        ExclusionSet { entries, lookup }
    }

    /// The built-in catalogue.
    pub fn builtin() -> Self {
        Self::new(EXCLUDED_FILE_NAMES.iter().copied())
    }

    /// Check whether a basename is excluded.
    pub fn contains(&self, basename: &str) -> bool {
        self.lookup.contains(basename)
    }

    /// Entries in declaration order, duplicates included.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Number of declared entries, duplicates included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ExclusionSet {
    fn default() -> Self {
        Self::builtin()
    }
}
