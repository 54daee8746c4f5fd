//! Canonical graph records keyed by `DefKey`.

use serde::{Deserialize, Serialize};

use crate::null_as_default;

/// Doc format tag for analyzer docstrings.
pub const PLAIN_TEXT_FORMAT: &str = "text/plain";

/// Cross-repository identity of a definition.
///
/// An empty `repo` means the repository currently being analyzed. `path` is
/// unit-relative and slash-delimited with no leading or trailing separator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DefKey {
    #[serde(default)]
    pub repo: String,
    pub unit_type: String,
    pub unit: String,
    pub path: String,
}

impl DefKey {
    pub fn new(
        repo: impl Into<String>,
        unit_type: impl Into<String>,
        unit: impl Into<String>,
        path: &str,
    ) -> Self {
        Self {
            repo: repo.into(),
            unit_type: unit_type.into(),
            unit: unit.into(),
            path: crate::normalize_path(path).trim_start_matches('/').to_string(),
        }
    }
}

/// Closed set of definition kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefKind {
    Field,
    Type,
    Function,
    Module,
    Package,
    Variable,
}

impl DefKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DefKind::Field => "field",
            DefKind::Type => "type",
            DefKind::Function => "function",
            DefKind::Module => "module",
            DefKind::Package => "package",
            DefKind::Variable => "variable",
        }
    }
}

/// A canonical definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Def {
    #[serde(flatten)]
    pub key: DefKey,
    pub tree_path: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub file: String,
    #[serde(default)]
    pub def_start: usize,
    #[serde(default)]
    pub def_end: usize,
    #[serde(default)]
    pub exported: bool,
    #[serde(default)]
    pub callable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<DefKind>,
    /// Opaque per-def metadata.
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub data: serde_json::Value,
}

/// A canonical reference from a span in this unit to a definition anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Ref {
    #[serde(default)]
    pub def_repo: String,
    pub def_unit_type: String,
    pub def_unit: String,
    pub def_path: String,
    /// True when this reference marks the definition site itself.
    #[serde(default)]
    pub def: bool,
    #[serde(default)]
    pub repo: String,
    pub unit_type: String,
    pub unit: String,
    pub file: String,
    pub start: usize,
    pub end: usize,
    #[serde(default)]
    pub to_builtin: bool,
}

/// The (file, target, span) slot a reference occupies; used for deduplication.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RefSlot {
    pub file: String,
    pub target: DefKey,
    pub start: usize,
    pub end: usize,
}

impl Ref {
    pub fn target(&self) -> DefKey {
        DefKey {
            repo: self.def_repo.clone(),
            unit_type: self.def_unit_type.clone(),
            unit: self.def_unit.clone(),
            path: self.def_path.clone(),
        }
    }

    pub fn slot(&self) -> RefSlot {
        RefSlot {
            file: self.file.clone(),
            target: self.target(),
            start: self.start,
            end: self.end,
        }
    }
}

/// Documentation attached to a definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Doc {
    #[serde(flatten)]
    pub key: DefKey,
    pub format: String,
    pub data: String,
    #[serde(default)]
    pub file: String,
    #[serde(default)]
    pub start: usize,
    #[serde(default)]
    pub end: usize,
}

/// Canonical graph for one source unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GraphOutput {
    #[serde(default, deserialize_with = "null_as_default")]
    pub defs: Vec<Def>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub refs: Vec<Ref>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub docs: Vec<Doc>,
}

impl GraphOutput {
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty() && self.refs.is_empty() && self.docs.is_empty()
    }

    /// Append another fragment verbatim.
    pub fn append(&mut self, other: GraphOutput) {
        self.defs.extend(other.defs);
        self.refs.extend(other.refs);
        self.docs.extend(other.docs);
    }
}
