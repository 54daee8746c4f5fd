//! Raw analyzer kind strings to canonical def kinds.

use std::collections::{HashMap, HashSet};

use symgraph_core::DefKind;

/// Case-insensitive table from raw kind strings to [`DefKind`], plus the set
/// of raw kinds that denote callables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindMap {
    kinds: HashMap<String, DefKind>,
    callable: HashSet<String>,
}

/// Result of mapping one raw kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappedKind {
    pub kind: Option<DefKind>,
    pub callable: bool,
}

impl KindMap {
    /// An empty table; every raw kind maps to nothing.
    pub fn empty() -> Self {
        Self {
            kinds: HashMap::new(),
            callable: HashSet::new(),
        }
    }

    /// Add or replace one entry.
    pub fn with(mut self, raw: &str, kind: DefKind, callable: bool) -> Self {
        let raw = raw.to_ascii_uppercase();
        if callable {
            self.callable.insert(raw.clone());
        } else {
            self.callable.remove(&raw);
        }
        self.kinds.insert(raw, kind);
        self
    }

    pub fn map(&self, raw: &str) -> MappedKind {
        let raw = raw.to_ascii_uppercase();
        MappedKind {
            kind: self.kinds.get(&raw).copied(),
            callable: self.callable.contains(&raw),
        }
    }
}

impl Default for KindMap {
    fn default() -> Self {
        Self::empty()
            .with("ATTRIBUTE", DefKind::Field, false)
            .with("CLASS", DefKind::Type, false)
            .with("CONSTRUCTOR", DefKind::Function, true)
            .with("FUNCTION", DefKind::Function, true)
            .with("METHOD", DefKind::Function, true)
            .with("MODULE", DefKind::Module, false)
            .with("PACKAGE", DefKind::Package, false)
            .with("PARAMETER", DefKind::Variable, false)
            .with("SCOPE", DefKind::Variable, false)
            .with("VARIABLE", DefKind::Variable, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn callables() {
        let map = KindMap::default();
        for raw in ["CONSTRUCTOR", "function", "Method"] {
            let mapped = map.map(raw);
            assert_eq!(mapped.kind, Some(DefKind::Function));
            assert!(mapped.callable, "{raw} should be callable");
        }
    }

    #[test]
    fn non_callables() {
        let map = KindMap::default();
        assert_eq!(
            map.map("class"),
            MappedKind {
                kind: Some(DefKind::Type),
                callable: false
            }
        );
        assert_eq!(map.map("ATTRIBUTE").kind, Some(DefKind::Field));
        assert_eq!(map.map("scope").kind, Some(DefKind::Variable));
        assert_eq!(map.map("Parameter").kind, Some(DefKind::Variable));
        assert_eq!(map.map("module").kind, Some(DefKind::Module));
    }

    #[test]
    fn unknown_kind_maps_to_nothing() {
        let mapped = KindMap::default().map("LAMBDA");
        assert_eq!(mapped.kind, None);
        assert!(!mapped.callable);
    }

    #[test]
    fn entries_can_be_overridden() {
        let map = KindMap::default().with("method", DefKind::Field, false);
        assert_eq!(map.map("METHOD").kind, Some(DefKind::Field));
        assert!(!map.map("METHOD").callable);
    }
}
