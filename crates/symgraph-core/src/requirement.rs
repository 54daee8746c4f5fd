//! Declared dependency requirements.

use serde::{Deserialize, Serialize};

use crate::null_as_default;

/// A declared dependency of a source unit, as reported by the requirement resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Requirement {
    /// Project name as published (e.g. `Flask`).
    pub project_name: String,
    pub unsafe_name: String,
    /// Normalized key (lowercased project name).
    pub key: String,
    /// Version constraints as `(operator, version)` pairs.
    #[serde(deserialize_with = "null_as_default")]
    pub specs: Vec<(String, String)>,
    #[serde(deserialize_with = "null_as_default")]
    pub extras: Vec<String>,
    /// Resolved repository location; empty when unresolved.
    pub repo_url: String,
    /// Installable packages this requirement provides (dotted names).
    #[serde(deserialize_with = "null_as_default")]
    pub packages: Vec<String>,
    /// Standalone modules this requirement provides (dotted names).
    #[serde(deserialize_with = "null_as_default")]
    pub modules: Vec<String>,
    pub resolved: bool,
    #[serde(rename = "type")]
    pub req_type: String,
}

impl Requirement {
    /// A requirement without a repository location cannot be turned into a def key.
    pub fn is_resolvable(&self) -> bool {
        !self.repo_url.trim().is_empty()
    }

    /// Repository identifier derived from `repo_url`.
    pub fn repo(&self) -> String {
        repo_uri(&self.repo_url)
    }

    /// Human-readable name for diagnostics: the key if present, else the project name.
    pub fn display_name(&self) -> &str {
        if self.key.is_empty() {
            &self.project_name
        } else {
            &self.key
        }
    }
}

/// Turn a clone URL into a repository identifier.
///
/// Strips the scheme, user info, a trailing `.git` and trailing slashes;
/// scp-style `git@host:owner/repo` becomes `host/owner/repo`.
pub fn repo_uri(url: &str) -> String {
    let mut s = url.trim();
    if let Some(idx) = s.find("://") {
        s = &s[idx + 3..];
    }
    let scp_style = !url.contains("://") && s.contains('@') && s.contains(':');
    if let Some(idx) = s.find('@') {
        s = &s[idx + 1..];
    }
    let s = s.trim_end_matches('/');
    let s = s.strip_suffix(".git").unwrap_or(s);
    if scp_style {
        s.replacen(':', "/", 1)
    } else {
        s.to_string()
    }
}
