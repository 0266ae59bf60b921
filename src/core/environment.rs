//! The build environment a descriptor is handed to.
//!
//! The generator never owns a real build environment; it only talks to one
//! through [`BuildEnvironment`]. The SCons stanza writer and the in-memory
//! [`RecordingEnvironment`] are the two implementations.

use std::collections::BTreeMap;

use serde::Serialize;

use super::descriptor::SourceEntry;

/// Capabilities the descriptor needs from an external build environment.
pub trait BuildEnvironment {
    /// Add directories to the compiler search path.
    fn extend_search_paths(&mut self, paths: &[String]);

    /// Register source inputs under a named module target.
    fn register_sources(&mut self, target: &str, sources: &[SourceEntry]);
}

/// Environment that records what it is given, resolving groups to file paths.
///
/// Backs `scsubgen list`: it shows what the build would actually receive.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RecordingEnvironment {
    pub search_paths: Vec<String>,
    pub targets: BTreeMap<String, Vec<String>>,
}

impl RecordingEnvironment {
    /// Files registered under `target`, relative to the root.
    pub fn sources_for(&self, target: &str) -> Option<&[String]> {
        self.targets.get(target).map(Vec::as_slice)
    }
}

impl BuildEnvironment for RecordingEnvironment {
    fn extend_search_paths(&mut self, paths: &[String]) {
        self.search_paths.extend(paths.iter().cloned());
    }

    fn register_sources(&mut self, target: &str, sources: &[SourceEntry]) {
        let files = self.targets.entry(target.to_string()).or_default();
        for entry in sources {
            files.extend(entry.paths());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_accumulates() {
        let mut env = RecordingEnvironment::default();
        env.extend_search_paths(&[".".to_string()]);
        env.extend_search_paths(&["a/".to_string()]);
        env.register_sources("t", &[SourceEntry::group("a", vec!["x.c".into()])]);
        env.register_sources("t", &[SourceEntry::extra("m.cpp")]);

        assert_eq!(env.search_paths, vec![".", "a/"]);
        assert_eq!(
            env.sources_for("t"),
            Some(&["a/x.c".to_string(), "m.cpp".to_string()][..])
        );
        assert_eq!(env.sources_for("other"), None);
    }
}
