//! Include search paths.

use crate::core::descriptor::ROOT_DIR;

/// Build the compiler search path list: the root, the build output directory,
/// then every scanned directory in scan order.
///
/// Independent of source filtering, so headers in directories whose sources
/// were all rejected stay visible.
pub fn include_paths(build_dir: &str, dirs: &[String]) -> Vec<String> {
    let mut paths = Vec::with_capacity(dirs.len() + 2);
    paths.push(ROOT_DIR.to_string());
    paths.push(build_dir.to_string());
    paths.extend(dirs.iter().map(|d| format!("{}/", d)));
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_include_paths_order() {
        let dirs = vec!["a".to_string(), "a/x".to_string(), "b".to_string()];
        assert_eq!(
            include_paths("build/", &dirs),
            vec![".", "build/", "a/", "a/x/", "b/"]
        );
    }

    #[test]
    fn test_include_paths_empty_tree() {
        assert_eq!(include_paths("build/", &[]), vec![".", "build/"]);
    }
}
