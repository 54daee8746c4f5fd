//! Slash-path helpers shared by def paths, tree paths and file paths.

/// Normalize an analyzer path to forward slashes with no empty or `.` segments.
///
/// A leading `/` is preserved so absolute paths stay absolute; the trailing
/// separator is always dropped.
pub fn normalize_path(path: &str) -> String {
    let unix = path.replace('\\', "/");
    let absolute = unix.starts_with('/');
    let joined = unix
        .split('/')
        .filter(|seg| !seg.is_empty() && *seg != ".")
        .collect::<Vec<_>>()
        .join("/");
    if absolute {
        format!("/{}", joined)
    } else {
        joined
    }
}

/// A tree path is a non-empty, relative, slash-separated path with no empty segments.
pub fn is_valid_tree_path(path: &str) -> bool {
    !path.is_empty() && path.split('/').all(|seg| !seg.is_empty())
}
