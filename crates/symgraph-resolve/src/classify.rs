//! Path classification against the known roots.

use symgraph_core::normalize_path;

use crate::Environment;

/// Where an analyzer path lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    /// Inside the unit being analyzed.
    Current,
    /// Under the dependency install root.
    Dependency,
    /// Under the standard-library root.
    Stdlib,
    /// An interpreter builtin with no file on disk.
    Builtin,
}

impl Origin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Origin::Current => "current",
            Origin::Dependency => "dependency",
            Origin::Stdlib => "stdlib",
            Origin::Builtin => "builtin",
        }
    }
}

/// A classified path and its path relative to the matched root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub origin: Origin,
    pub relative: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassifyError {
    #[error("path cannot be classified: {path} (unit root: {unit_root}, stdlib: {stdlib_root}, site-packages: {site_packages_root})")]
    Unclassified {
        path: String,
        unit_root: String,
        stdlib_root: String,
        site_packages_root: String,
    },
}

/// Strip `root` from `path` on a segment boundary.
///
/// Both arguments must already be normalized.
pub fn strip_root<'a>(path: &'a str, root: &str) -> Option<&'a str> {
    if root.is_empty() {
        return None;
    }
    if root == "/" {
        return path.strip_prefix('/');
    }
    let rest = path.strip_prefix(root)?;
    if rest.is_empty() {
        Some(rest)
    } else {
        rest.strip_prefix('/')
    }
}

/// Classify `path` against the unit root and the environment's roots.
///
/// The unit root is checked before the dependency root: some build layouts
/// nest the unit's own installed copy under site-packages, and ownership by
/// the current unit must win.
pub fn classify(
    path: &str,
    unit_root: &str,
    env: &Environment,
) -> Result<Classification, ClassifyError> {
    let path = normalize_path(path);
    let unit_root = normalize_path(unit_root);

    let roots = [
        (Origin::Current, unit_root.clone()),
        (Origin::Dependency, normalize_path(&env.site_packages_root)),
        (Origin::Stdlib, normalize_path(&env.stdlib_root)),
    ];
    for (origin, root) in &roots {
        if let Some(rel) = strip_root(&path, root) {
            return Ok(Classification {
                origin: *origin,
                relative: rel.to_string(),
            });
        }
    }

    for builtin in &env.builtin_prefixes {
        if let Some(rest) = strip_root(&path, &builtin.prefix) {
            let relative = if rest.is_empty() {
                builtin.path.clone()
            } else {
                format!("{}/{}", builtin.path, rest)
            };
            return Ok(Classification {
                origin: Origin::Builtin,
                relative,
            });
        }
    }

    Err(ClassifyError::Unclassified {
        path,
        unit_root,
        stdlib_root: env.stdlib_root.clone(),
        site_packages_root: env.site_packages_root.clone(),
    })
}
