//! Source tree fixtures.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Builder for a temporary source tree.
#[derive(Debug, Clone, Default)]
pub struct TreeFixture {
    dirs: Vec<PathBuf>,
    files: Vec<(PathBuf, String)>,
}

impl TreeFixture {
    /// Create an empty fixture.
    pub fn new() -> Self {
        TreeFixture::default()
    }

    /// Add a directory (parents are created too).
    pub fn dir(mut self, path: &str) -> Self {
        self.dirs.push(PathBuf::from(path));
        self
    }

    /// Add a file with the given content (parents are created too).
    pub fn file(mut self, path: &str, content: &str) -> Self {
        self.files.push((PathBuf::from(path), content.to_string()));
        self
    }

    /// Materialize the tree in a fresh temporary directory.
    pub fn create(self) -> TempDir {
        let tmp = TempDir::new().unwrap();

        for dir in &self.dirs {
            fs::create_dir_all(tmp.path().join(dir)).unwrap();
        }

        for (path, content) in &self.files {
            let full = tmp.path().join(path);
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(full, content).unwrap();
        }

        tmp
    }

    /// The tree used throughout the scan/collect tests: subdirectories `a`,
    /// `build`, `test`, `b` with a mix of accepted and rejected sources.
    pub fn sample() -> Self {
        TreeFixture::new()
            .file("build/generated.c", "")
            .file("test/inside.c", "")
            .file("a/common.c", "")
            .file("a/foo.c", "")
            .file("b/demo1.c", "")
            .file("b/bar.c", "")
    }
}
