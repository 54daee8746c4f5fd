//! Requirement pruning and match failures.

use std::fmt;

use symgraph_core::Requirement;

/// Maximum number of candidate names carried by a match failure.
pub const MAX_CANDIDATES: usize = 7;

/// Split requirements into those that can be resolved to a repository and
/// those that cannot. Order is preserved in both halves.
pub fn prune_requirements(reqs: Vec<Requirement>) -> (Vec<Requirement>, Vec<Requirement>) {
    reqs.into_iter().partition(Requirement::is_resolvable)
}

/// Prune requirements with no repository location, logging the ignored keys.
pub fn prune_and_log(reqs: Vec<Requirement>) -> Vec<Requirement> {
    let (kept, ignored) = prune_requirements(reqs);
    if !ignored.is_empty() {
        let keys: Vec<&str> = ignored.iter().map(Requirement::display_name).collect();
        tracing::warn!(
            ignored = ?keys,
            "ignoring dependencies because repo URL absent"
        );
    }
    kept
}

/// Names a failed match was checked against, for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidates {
    pub names: Vec<String>,
    /// More names existed than were kept.
    pub truncated: bool,
}

impl Candidates {
    /// Collect declared package and module names in scan order, capped at [`MAX_CANDIDATES`].
    pub fn from_requirements(reqs: &[Requirement]) -> Self {
        let mut candidates = Candidates::default();
        for name in reqs
            .iter()
            .flat_map(|req| req.packages.iter().chain(req.modules.iter()))
        {
            if candidates.names.len() < MAX_CANDIDATES {
                candidates.names.push(name.clone());
            } else {
                candidates.truncated = true;
                break;
            }
        }
        candidates
    }
}

impl fmt::Display for Candidates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}", self.names.join(", "))?;
        if self.truncated {
            write!(f, ", and more...")?;
        }
        write!(f, "]")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    #[error("no requirement provides `{relative}` (candidates: {candidates})")]
    NoMatch {
        relative: String,
        candidates: Candidates,
    },
}

impl MatchError {
    pub fn candidates(&self) -> &Candidates {
        match self {
            MatchError::NoMatch { candidates, .. } => candidates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(name: &str, repo: &str, packages: &[&str]) -> Requirement {
        Requirement {
            project_name: name.to_string(),
            key: name.to_lowercase(),
            repo_url: repo.to_string(),
            packages: packages.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn prune_drops_unresolved() {
        let reqs = vec![
            req("A", "g.com/o/a", &["a"]),
            req("B", "", &["b"]),
            req("C", "g.com/o/c", &["c"]),
        ];
        let (kept, ignored) = prune_requirements(reqs);
        let kept: Vec<_> = kept.iter().map(|r| r.project_name.as_str()).collect();
        assert_eq!(kept, vec!["A", "C"]);
        assert_eq!(ignored.len(), 1);
        assert_eq!(ignored[0].project_name, "B");
    }

    #[test]
    fn prune_is_idempotent() {
        let reqs = vec![
            req("A", "g.com/o/a", &["a"]),
            req("B", "", &["b"]),
            req("C", " ", &["c"]),
            req("D", "g.com/o/d", &["d"]),
        ];
        let once = prune_and_log(reqs);
        let twice = prune_and_log(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn candidates_are_capped() {
        let packages: Vec<String> = (0..10).map(|i| format!("p{}", i)).collect();
        let refs: Vec<&str> = packages.iter().map(String::as_str).collect();
        let reqs = vec![req("Big", "g.com/o/big", &refs)];
        let c = Candidates::from_requirements(&reqs);
        assert_eq!(c.names.len(), MAX_CANDIDATES);
        assert!(c.truncated);
        assert!(c.to_string().ends_with(", and more...]"));
    }

    #[test]
    fn candidates_include_modules() {
        let mut r = req("Six", "g.com/o/six", &[]);
        r.modules = vec!["six".into()];
        let c = Candidates::from_requirements(&[r]);
        assert_eq!(c.names, vec!["six".to_string()]);
        assert!(!c.truncated);
        assert_eq!(c.to_string(), "[six]");
    }
}
