//! In-memory build descriptor.

use super::environment::BuildEnvironment;
use super::filter::SourceFilter;

/// Relative path used for the scan root.
pub const ROOT_DIR: &str = ".";

/// One entry of the source list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceEntry {
    /// Filtered selection from a single directory (non-recursive).
    Group {
        /// Directory relative to the root, `.` for the root itself.
        dir: String,
        /// Accepted basenames, in listing order.
        files: Vec<String>,
    },
    /// A mandatory unit appended after all directory groups.
    Extra { name: String },
}

impl SourceEntry {
    pub fn group(dir: impl Into<String>, files: Vec<String>) -> Self {
        SourceEntry::Group {
            dir: dir.into(),
            files,
        }
    }

    pub fn extra(name: impl Into<String>) -> Self {
        SourceEntry::Extra { name: name.into() }
    }

    /// Paths of the files this entry contributes, relative to the root.
    pub fn paths(&self) -> Vec<String> {
        match self {
            SourceEntry::Group { dir, files } if dir == ROOT_DIR => files.clone(),
            SourceEntry::Group { dir, files } => {
                files.iter().map(|f| format!("{}/{}", dir, f)).collect()
            }
            SourceEntry::Extra { name } => vec![name.clone()],
        }
    }
}

/// Everything the descriptor declares, assembled once per run.
#[derive(Debug, Clone)]
pub struct BuildDescriptor {
    /// Rules used to select sources; also emitted as the filter expression.
    pub filter: SourceFilter,
    /// Compiler search paths.
    pub include_paths: Vec<String>,
    /// Directory groups followed by the extras.
    pub sources: Vec<SourceEntry>,
    /// Name of the target the sources are registered under.
    pub target: String,
}

impl BuildDescriptor {
    /// Directory groups, in scan order.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.sources.iter().filter_map(|entry| match entry {
            SourceEntry::Group { dir, files } => Some((dir.as_str(), files.as_slice())),
            SourceEntry::Extra { .. } => None,
        })
    }

    /// Extra units, in declaration order.
    pub fn extras(&self) -> impl Iterator<Item = &str> {
        self.sources.iter().filter_map(|entry| match entry {
            SourceEntry::Extra { name } => Some(name.as_str()),
            SourceEntry::Group { .. } => None,
        })
    }

    /// Hand the descriptor to a build environment.
    pub fn apply(&self, env: &mut dyn BuildEnvironment) {
        env.extend_search_paths(&self.include_paths);
        env.register_sources(&self.target, &self.sources);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::environment::RecordingEnvironment;

    fn descriptor() -> BuildDescriptor {
        BuildDescriptor {
            filter: SourceFilter::builtin(),
            include_paths: vec![".".into(), "build/".into(), "a/".into()],
            sources: vec![
                SourceEntry::group(".", vec!["top.c".into()]),
                SourceEntry::group("a", vec!["foo.c".into()]),
                SourceEntry::extra("godot_gsl.cpp"),
                SourceEntry::extra("register_types.cpp"),
            ],
            target: "env.modules_sources".into(),
        }
    }

    #[test]
    fn test_entry_paths() {
        assert_eq!(
            SourceEntry::group(".", vec!["x.c".into()]).paths(),
            vec!["x.c"]
        );
        assert_eq!(
            SourceEntry::group("a/b", vec!["x.c".into()]).paths(),
            vec!["a/b/x.c"]
        );
        assert_eq!(SourceEntry::extra("m.cpp").paths(), vec!["m.cpp"]);
    }

    #[test]
    fn test_groups_and_extras() {
        let desc = descriptor();
        let dirs: Vec<_> = desc.groups().map(|(d, _)| d).collect();
        assert_eq!(dirs, vec![".", "a"]);
        let extras: Vec<_> = desc.extras().collect();
        assert_eq!(extras, vec!["godot_gsl.cpp", "register_types.cpp"]);
    }

    #[test]
    fn test_apply_uses_both_capabilities() {
        let desc = descriptor();
        let mut env = RecordingEnvironment::default();
        desc.apply(&mut env);

        assert_eq!(env.search_paths, desc.include_paths);
        assert_eq!(
            env.sources_for("env.modules_sources"),
            Some(
                &[
                    "top.c".to_string(),
                    "a/foo.c".to_string(),
                    "godot_gsl.cpp".to_string(),
                    "register_types.cpp".to_string(),
                ][..]
            )
        );
    }
}
