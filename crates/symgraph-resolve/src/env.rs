//! Environment configuration: where the analyzed code, its installed
//! dependencies and the standard library live inside the analysis sandbox.

use serde::{Deserialize, Serialize};
use symgraph_core::{SourceUnit, normalize_path};

use crate::lookup::LookupStrategy;

/// A bare builtin-module prefix and its canonical stdlib-relative path.
///
/// Interpreter builtins have no file on disk; the analyzer reports them as
/// bare dotted-module paths (`sys/argv`, `path/join`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuiltinPrefix {
    pub prefix: String,
    pub path: String,
}

impl BuiltinPrefix {
    pub fn new(prefix: &str, path: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            path: path.to_string(),
        }
    }
}

/// Immutable environment configuration consumed by the classifier and resolver.
///
/// Example config.toml:
/// ```toml
/// [environment]
/// source_root = "/src"
/// stdlib_root = "/usr/lib/python2.7"
/// site_packages_root = "/venv/lib/python2.7/site-packages"
/// lookup = "trie"
///
/// [[environment.builtin_prefixes]]
/// prefix = "sys"
/// path = "sys"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Environment {
    /// Mount point of the repository; unit directories are relative to it.
    pub source_root: String,
    /// Standard library root.
    pub stdlib_root: String,
    /// Dependency install root (site-packages).
    pub site_packages_root: String,
    /// Suffix of a source file, appended to standalone module names.
    pub source_suffix: String,
    /// File name that marks a directory as a package.
    pub package_init_file: String,
    /// Pseudo-repository owning the standard library and builtins.
    pub stdlib_repo: String,
    /// Pseudo-unit owning the standard library and builtins.
    pub stdlib_unit: String,
    pub stdlib_unit_type: String,
    /// Unit type given to installable dependency packages.
    pub dependency_unit_type: String,
    /// Builtin prefixes, tried in order.
    pub builtin_prefixes: Vec<BuiltinPrefix>,
    /// Requirement lookup strategy.
    pub lookup: LookupStrategy,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            source_root: "/src".to_string(),
            stdlib_root: "/usr/lib/python2.7".to_string(),
            site_packages_root: "/venv/lib/python2.7/site-packages".to_string(),
            source_suffix: ".py".to_string(),
            package_init_file: "__init__.py".to_string(),
            stdlib_repo: "hg.python.org/cpython".to_string(),
            stdlib_unit: "Python".to_string(),
            stdlib_unit_type: "PipPackage".to_string(),
            dependency_unit_type: "PipPackage".to_string(),
            builtin_prefixes: vec![
                BuiltinPrefix::new("sys", "sys"),
                BuiltinPrefix::new("os", "os"),
                BuiltinPrefix::new("path", "os/path"),
            ],
            lookup: LookupStrategy::default(),
        }
    }
}

impl Environment {
    /// Absolute root directory of a unit inside the sandbox.
    pub fn unit_root(&self, unit: &SourceUnit) -> String {
        normalize_path(&format!("{}/{}", self.source_root, unit.dir))
    }

    /// Whether `file` is a package initializer (`pkg/__init__.py`).
    pub fn is_package_init(&self, file: &str) -> bool {
        let file = normalize_path(file);
        file.rsplit('/').next() == Some(self.package_init_file.as_str())
    }
}
