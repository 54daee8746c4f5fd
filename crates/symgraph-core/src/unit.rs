//! Source unit types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::Requirement;
use crate::null_as_default;

/// A package/module grouping of source files forming one analysis boundary.
///
/// Produced by the external discovery step and treated as immutable input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SourceUnit {
    pub name: String,
    #[serde(rename = "Type")]
    pub unit_type: String,
    /// Owning repository; empty means "this repository".
    #[serde(default)]
    pub repo: String,
    /// Root directory relative to the repository root.
    #[serde(default)]
    pub dir: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub files: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dependencies: Vec<Requirement>,
    /// Supported operations (e.g. `graph`, `depresolve`) and their tool references.
    #[serde(default, deserialize_with = "null_as_default")]
    pub ops: BTreeMap<String, serde_json::Value>,
}

impl SourceUnit {
    pub fn new(
        name: impl Into<String>,
        unit_type: impl Into<String>,
        dir: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            unit_type: unit_type.into(),
            dir: dir.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_discovery_record() {
        let json = r#"{
            "Name": "Flask",
            "Type": "PipPackage",
            "Repo": "github.com/mitsuhiko/flask",
            "Dir": ".",
            "Files": ["flask/__init__.py", "flask/app.py"],
            "Dependencies": null,
            "Ops": {"depresolve": null, "graph": null}
        }"#;
        let unit: SourceUnit = serde_json::from_str(json).unwrap();
        assert_eq!(unit.name, "Flask");
        assert_eq!(unit.unit_type, "PipPackage");
        assert_eq!(unit.files.len(), 2);
        assert!(unit.dependencies.is_empty());
        assert!(unit.ops.contains_key("graph"));
    }

    #[test]
    fn missing_optional_fields_default() {
        let unit: SourceUnit =
            serde_json::from_str(r#"{"Name": "Pkg", "Type": "PipPackage"}"#).unwrap();
        assert_eq!(unit, SourceUnit::new("Pkg", "PipPackage", ""));
        assert_eq!(unit.repo, "");
    }
}
