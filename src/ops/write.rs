//! Descriptor rendering and output.
//!
//! The descriptor is an SCons `SCsub` script: three list declarations followed
//! by a stanza that hands them to the environment imported from the parent
//! build. Group filters are emitted as list comprehensions over `Glob`, built
//! from the same [`SourceFilter`] rules used for in-process selection.

use std::path::{Path, PathBuf};

use crate::core::descriptor::{BuildDescriptor, SourceEntry, ROOT_DIR};
use crate::core::{BuildEnvironment, SourceFilter};
use crate::util::config::OutputConfig;
use crate::util::errors::Result;
use crate::util::fs::overwrite_string;

const EXCLUDED_VAR: &str = "excluded_files";
const PATHS_VAR: &str = "scons_paths";
const SOURCES_VAR: &str = "scons_sources";

/// Quote a string as a single-quoted Python literal.
///
/// Control characters are escaped so a literal never spans lines.
fn py_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Render `name = [ ... ]` with one element per line, comma-first.
fn write_list<I, S>(out: &mut String, name: &str, items: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    out.push_str(&format!("{} = [\n", name));
    for (i, item) in items.into_iter().enumerate() {
        let sep = if i == 0 { "" } else { ", " };
        out.push_str(&format!("    {}{}\n", sep, item.as_ref()));
    }
    out.push_str("]\n\n");
}

/// Render the filter expression selecting sources in one directory.
pub fn group_expression(dir: &str, filter: &SourceFilter) -> String {
    let glob_dir = if dir == ROOT_DIR { "." } else { dir };
    let base = "os.path.basename(str(x))";

    let mut conditions = vec![
        format!("not {}.endswith({})", base, py_str(filter.generated_suffix())),
        format!("{} not in {}", base, EXCLUDED_VAR),
    ];
    conditions.extend(
        filter
            .category_prefixes()
            .iter()
            .map(|p| format!("not {}.startswith({})", base, py_str(p))),
    );
    conditions.push(format!(
        "not {}.startswith({})",
        base,
        py_str(filter.test_prefix())
    ));

    format!(
        "[x for x in Glob({}) if {}]",
        py_str(&filter.glob_for(glob_dir)),
        conditions.join(" and ")
    )
}

/// Closing stanza: binds the module alias and registers everything with the
/// imported environment.
#[derive(Debug, Clone)]
pub struct SconsStanza {
    module_env: String,
    lines: Vec<String>,
}

impl SconsStanza {
    pub fn new(env_name: &str, module_env: &str) -> Self {
        SconsStanza {
            module_env: module_env.to_string(),
            lines: vec![format!("{} = {}", module_env, env_name)],
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

/// The paths and sources themselves are already declared as `scons_paths` and
/// `scons_sources` above the stanza, so each call only emits the statement that
/// hands the corresponding variable to the environment.
impl BuildEnvironment for SconsStanza {
    fn extend_search_paths(&mut self, _paths: &[String]) {
        self.lines
            .push(format!("{}.Append(CPPPATH={})", self.module_env, PATHS_VAR));
    }

    fn register_sources(&mut self, target: &str, _sources: &[SourceEntry]) {
        self.lines.push(format!(
            "{}.add_source_files({}, {})",
            self.module_env, target, SOURCES_VAR
        ));
    }
}

/// Render the complete descriptor text.
pub fn render(descriptor: &BuildDescriptor, output: &OutputConfig) -> String {
    let mut out = String::new();

    out.push_str("#!/usr/bin/env python\n");
    out.push_str(&format!("# {}\n", output.file_name));
    out.push_str("import re\n");
    out.push_str("import os\n");
    out.push_str(&format!("Import({})\n\n", py_str(&output.env_name)));

    write_list(
        &mut out,
        EXCLUDED_VAR,
        descriptor.filter.exclusions().entries().map(py_str),
    );
    write_list(
        &mut out,
        PATHS_VAR,
        descriptor.include_paths.iter().map(|p| py_str(p)),
    );
    write_list(
        &mut out,
        SOURCES_VAR,
        descriptor.sources.iter().map(|entry| match entry {
            SourceEntry::Group { dir, .. } => group_expression(dir, &descriptor.filter),
            SourceEntry::Extra { name } => py_str(name),
        }),
    );

    let mut stanza = SconsStanza::new(&output.env_name, &output.module_env);
    descriptor.apply(&mut stanza);
    for line in stanza.lines() {
        out.push_str(line);
        out.push('\n');
    }

    out
}

/// Render the descriptor and overwrite `<root>/<file_name>`.
pub fn write_descriptor(
    root: &Path,
    descriptor: &BuildDescriptor,
    output: &OutputConfig,
) -> Result<PathBuf> {
    let path = root.join(&output.file_name);
    overwrite_string(&path, &render(descriptor, output))?;
    tracing::info!("Wrote {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ExclusionSet;
    use tempfile::TempDir;

    fn small_filter() -> SourceFilter {
        SourceFilter::new(
            "c",
            "_source.c",
            ExclusionSet::new(["common.c", "util.c"]),
            vec!["demo".to_string()],
            "test_",
        )
    }

    fn descriptor() -> BuildDescriptor {
        BuildDescriptor {
            filter: small_filter(),
            include_paths: vec![".".into(), "build/".into(), "a/".into()],
            sources: vec![
                SourceEntry::group(".", vec![]),
                SourceEntry::group("a", vec!["foo.c".into()]),
                SourceEntry::extra("godot_gsl.cpp"),
                SourceEntry::extra("register_types.cpp"),
            ],
            target: "env.modules_sources".into(),
        }
    }

    #[test]
    fn test_py_str_escapes() {
        assert_eq!(py_str("a.c"), "'a.c'");
        assert_eq!(py_str("it's"), "'it\\'s'");
        assert_eq!(py_str("a\\b"), "'a\\\\b'");
    }

    #[test]
    fn test_py_str_escapes_control_characters() {
        assert_eq!(py_str("a\nb"), "'a\\nb'");
        assert_eq!(py_str("a\r\tb"), "'a\\r\\tb'");
        assert_eq!(py_str("a\u{1}b"), "'a\\u0001b'");
        assert!(!py_str("line\nbreak").contains('\n'));
    }

    #[test]
    fn test_directory_with_newline_stays_on_one_line() {
        let expr = group_expression("odd\ndir", &small_filter());
        assert!(expr.starts_with("[x for x in Glob('odd\\ndir/*.c') if "));
        assert!(!expr.contains('\n'));
    }

    #[test]
    fn test_group_expression() {
        let expr = group_expression("a", &small_filter());
        assert_eq!(
            expr,
            "[x for x in Glob('a/*.c') if \
             not os.path.basename(str(x)).endswith('_source.c') \
             and os.path.basename(str(x)) not in excluded_files \
             and not os.path.basename(str(x)).startswith('demo') \
             and not os.path.basename(str(x)).startswith('test_')]"
        );
    }

    #[test]
    fn test_root_expression_globs_current_dir() {
        let expr = group_expression(".", &small_filter());
        assert!(expr.starts_with("[x for x in Glob('./*.c') if "));
    }

    #[test]
    fn test_render_full_descriptor() {
        let text = render(&descriptor(), &OutputConfig::default());
        let a = group_expression("a", &small_filter());
        let root = group_expression(".", &small_filter());

        let expected = format!(
            "#!/usr/bin/env python\n\
             # SCsub\n\
             import re\n\
             import os\n\
             Import('env')\n\
             \n\
             excluded_files = [\n    'common.c'\n    , 'util.c'\n]\n\n\
             scons_paths = [\n    '.'\n    , 'build/'\n    , 'a/'\n]\n\n\
             scons_sources = [\n    {root}\n    , {a}\n    , 'godot_gsl.cpp'\n    , 'register_types.cpp'\n]\n\n\
             env_godot_gsl = env\n\
             env_godot_gsl.Append(CPPPATH=scons_paths)\n\
             env_godot_gsl.add_source_files(env.modules_sources, scons_sources)\n"
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_empty_list_renders_brackets_only() {
        let mut out = String::new();
        write_list(&mut out, "xs", Vec::<String>::new());
        assert_eq!(out, "xs = [\n]\n\n");
    }

    #[test]
    fn test_stanza_uses_configured_names() {
        let mut stanza = SconsStanza::new("base_env", "mod_env");
        descriptor().apply(&mut stanza);
        assert_eq!(
            stanza.lines(),
            &[
                "mod_env = base_env".to_string(),
                "mod_env.Append(CPPPATH=scons_paths)".to_string(),
                "mod_env.add_source_files(env.modules_sources, scons_sources)".to_string(),
            ]
        );
    }

    #[test]
    fn test_write_overwrites_existing_descriptor() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("SCsub"), "stale").unwrap();

        let path = write_descriptor(tmp.path(), &descriptor(), &OutputConfig::default()).unwrap();

        let text = std::fs::read_to_string(path).unwrap();
        assert!(!text.contains("stale"));
        assert!(text.starts_with("#!/usr/bin/env python\n"));
    }
}
