//! Requirement lookup strategies.
//!
//! Given a path relative to the dependency install root, find the declared
//! requirement that owns it. The first requirement in declaration order that
//! owns the path wins. A requirement owns a path when:
//! - one of its packages (`a.b` as `a/b`) is the path or an ancestor of it, or
//! - one of its modules (`m`) equals the path with the source suffix
//!   appended (`m.py`), or is the path or an ancestor of it (analyzer def
//!   paths omit the suffix).
//!
//! [`LinearScan`] checks every requirement in order; [`PrefixTrie`] indexes
//! path segments up front and answers in time proportional to path depth.
//! Both give identical answers.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use symgraph_core::Requirement;

use crate::requirements::{Candidates, MatchError};

/// Which lookup implementation to build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupStrategy {
    #[default]
    Linear,
    Trie,
}

/// Finds the requirement owning a dependency-relative path.
pub trait RequirementLookup: Send + Sync {
    /// Requirements this lookup was built from, in declaration order.
    fn requirements(&self) -> &[Requirement];

    /// Index (into [`requirements`](Self::requirements)) of the owning requirement.
    fn find_index(&self, relative: &str) -> Option<usize>;

    /// Names reported when nothing matches.
    fn candidates(&self) -> &Candidates;

    /// Owning requirement, or a match failure carrying candidate names.
    fn find(&self, relative: &str) -> Result<&Requirement, MatchError> {
        match self.find_index(relative) {
            Some(idx) => Ok(&self.requirements()[idx]),
            None => Err(MatchError::NoMatch {
                relative: relative.to_string(),
                candidates: self.candidates().clone(),
            }),
        }
    }
}

/// Build a lookup over already-pruned requirements.
pub fn build_lookup(
    strategy: LookupStrategy,
    reqs: Vec<Requirement>,
    source_suffix: &str,
) -> Box<dyn RequirementLookup> {
    match strategy {
        LookupStrategy::Linear => Box::new(LinearScan::new(reqs, source_suffix)),
        LookupStrategy::Trie => Box::new(PrefixTrie::new(reqs, source_suffix)),
    }
}

fn dotted_to_path(name: &str) -> String {
    name.replace('.', "/")
}

fn is_ancestor_or_self(ancestor: &str, path: &str) -> bool {
    match path.strip_prefix(ancestor) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// Scan requirements in declaration order: packages first, then modules.
#[derive(Debug, Clone)]
pub struct LinearScan {
    reqs: Vec<Requirement>,
    source_suffix: String,
    candidates: Candidates,
}

impl LinearScan {
    pub fn new(reqs: Vec<Requirement>, source_suffix: &str) -> Self {
        let candidates = Candidates::from_requirements(&reqs);
        Self {
            reqs,
            source_suffix: source_suffix.to_string(),
            candidates,
        }
    }

    fn owns(&self, req: &Requirement, relative: &str) -> bool {
        let by_package = req
            .packages
            .iter()
            .any(|pkg| is_ancestor_or_self(&dotted_to_path(pkg), relative));
        if by_package {
            return true;
        }
        req.modules.iter().any(|module| {
            let mod_path = dotted_to_path(module);
            relative == format!("{}{}", mod_path, self.source_suffix)
                || is_ancestor_or_self(&mod_path, relative)
        })
    }
}

impl RequirementLookup for LinearScan {
    fn requirements(&self) -> &[Requirement] {
        &self.reqs
    }

    fn find_index(&self, relative: &str) -> Option<usize> {
        self.reqs.iter().position(|req| self.owns(req, relative))
    }

    fn candidates(&self) -> &Candidates {
        &self.candidates
    }
}

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: HashMap<String, usize>,
    /// Lowest declaration index owning this node and everything below it.
    owner: Option<usize>,
}

/// Segment trie over package and module paths.
#[derive(Debug, Clone)]
pub struct PrefixTrie {
    reqs: Vec<Requirement>,
    nodes: Vec<TrieNode>,
    /// Exact module file paths (`six.py`) to their lowest owner.
    module_files: HashMap<String, usize>,
    candidates: Candidates,
}

impl PrefixTrie {
    pub fn new(reqs: Vec<Requirement>, source_suffix: &str) -> Self {
        let mut trie = Self {
            nodes: vec![TrieNode::default()],
            module_files: HashMap::new(),
            candidates: Candidates::from_requirements(&reqs),
            reqs: Vec::new(),
        };
        for (idx, req) in reqs.iter().enumerate() {
            for pkg in &req.packages {
                trie.insert(&dotted_to_path(pkg), idx);
            }
            for module in &req.modules {
                let mod_path = dotted_to_path(module);
                trie.module_files
                    .entry(format!("{}{}", mod_path, source_suffix))
                    .or_insert(idx);
                trie.insert(&mod_path, idx);
            }
        }
        trie.reqs = reqs;
        trie
    }

    fn insert(&mut self, path: &str, idx: usize) {
        let mut node = 0;
        for seg in path.split('/') {
            node = match self.nodes[node].children.get(seg) {
                Some(&child) => child,
                None => {
                    self.nodes.push(TrieNode::default());
                    let child = self.nodes.len() - 1;
                    self.nodes[node].children.insert(seg.to_string(), child);
                    child
                }
            };
        }
        let owner = &mut self.nodes[node].owner;
        *owner = Some(owner.map_or(idx, |existing| existing.min(idx)));
    }
}

impl RequirementLookup for PrefixTrie {
    fn requirements(&self) -> &[Requirement] {
        &self.reqs
    }

    fn find_index(&self, relative: &str) -> Option<usize> {
        let mut best = self.module_files.get(relative).copied();
        let mut node = 0;
        for seg in relative.split('/') {
            let Some(&child) = self.nodes[node].children.get(seg) else {
                break;
            };
            node = child;
            if let Some(owner) = self.nodes[node].owner {
                best = Some(best.map_or(owner, |b| b.min(owner)));
            }
        }
        best
    }

    fn candidates(&self) -> &Candidates {
        &self.candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(name: &str, packages: &[&str], modules: &[&str]) -> Requirement {
        Requirement {
            project_name: name.to_string(),
            repo_url: format!("g.com/o/{}", name.to_lowercase()),
            packages: packages.iter().map(|s| s.to_string()).collect(),
            modules: modules.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn fixture() -> Vec<Requirement> {
        vec![
            req("Dep1", &["dep1"], &[]),
            req("Nested", &["ns.inner"], &[]),
            req("Six", &[], &["six"]),
            req("Shadow", &["dep1.sub"], &[]),
            req("Late", &["dep1"], &[]),
        ]
    }

    fn both() -> Vec<Box<dyn RequirementLookup>> {
        vec![
            build_lookup(LookupStrategy::Linear, fixture(), ".py"),
            build_lookup(LookupStrategy::Trie, fixture(), ".py"),
        ]
    }

    fn owner<'a>(lookup: &'a dyn RequirementLookup, path: &str) -> Option<&'a str> {
        lookup.find(path).ok().map(|r| r.project_name.as_str())
    }

    #[test]
    fn package_is_ancestor() {
        for lookup in both() {
            assert_eq!(owner(lookup.as_ref(), "dep1/module"), Some("Dep1"));
            assert_eq!(owner(lookup.as_ref(), "dep1"), Some("Dep1"));
            assert_eq!(owner(lookup.as_ref(), "dep10/module"), None);
        }
    }

    #[test]
    fn dotted_package_becomes_directories() {
        for lookup in both() {
            assert_eq!(owner(lookup.as_ref(), "ns/inner/mod/f"), Some("Nested"));
            assert_eq!(owner(lookup.as_ref(), "ns/other"), None);
        }
    }

    #[test]
    fn module_matches_file_and_scope() {
        for lookup in both() {
            assert_eq!(owner(lookup.as_ref(), "six.py"), Some("Six"));
            assert_eq!(owner(lookup.as_ref(), "six/moves"), Some("Six"));
            assert_eq!(owner(lookup.as_ref(), "six.pyc"), None);
        }
    }

    #[test]
    fn first_declared_wins() {
        for lookup in both() {
            // Both Dep1 and Shadow own dep1/sub; Dep1 is declared first.
            assert_eq!(owner(lookup.as_ref(), "dep1/sub/x"), Some("Dep1"));
        }
    }

    #[test]
    fn failure_carries_candidates() {
        for lookup in both() {
            let err = lookup.find("nothing/here").unwrap_err();
            let names = &err.candidates().names;
            assert_eq!(names, &["dep1", "ns.inner", "six", "dep1.sub", "dep1"]);
            assert!(err.to_string().contains("nothing/here"));
        }
    }

    #[test]
    fn empty_requirement_list_never_matches() {
        let lookup = build_lookup(LookupStrategy::Trie, Vec::new(), ".py");
        assert!(lookup.find("dep1/module").is_err());
        assert!(lookup.find("").is_err());
    }
}
