//! Analyzer-native records.
//!
//! The analyzer reports every definition, reference target and documented
//! symbol as an absolute filesystem-rooted path. Field names follow the
//! analyzer's JSON dump.

use serde::{Deserialize, Serialize};

use crate::null_as_default;
use crate::{GraphOutput, Requirement};

/// A definition as emitted by the analyzer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RawDef {
    /// Absolute nested-scope path (`/src/pkg/module1/class/method1`).
    pub path: String,
    pub name: String,
    /// Absolute path of the file holding the definition.
    pub file: String,
    pub ident_start: usize,
    pub ident_end: usize,
    pub def_start: usize,
    pub def_end: usize,
    pub exported: bool,
    /// Raw kind string (`CLASS`, `method`, ...).
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub func_data: Option<FuncData>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FuncData {
    pub signature: String,
}

/// A reference as emitted by the analyzer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RawRef {
    /// Absolute path of the referenced definition.
    pub def: String,
    /// Absolute path of the referencing file.
    pub file: String,
    pub start: usize,
    pub end: usize,
    pub builtin: bool,
}

/// A docstring as emitted by the analyzer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RawDoc {
    /// Absolute path of the documented definition.
    pub def: String,
    pub file: String,
    pub body: String,
    pub start: usize,
    pub end: usize,
}

/// The analyzer's graph dump.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawGraph {
    #[serde(default, deserialize_with = "null_as_default")]
    pub defs: Vec<RawDef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub refs: Vec<RawRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub docs: Vec<RawDoc>,
}

/// Everything one analyzer run hands to the converter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerOutput {
    #[serde(default, alias = "Graph")]
    pub graph: RawGraph,
    /// Resolved, not yet pruned, requirements of the unit.
    #[serde(default, alias = "Reqs", deserialize_with = "null_as_default")]
    pub reqs: Vec<Requirement>,
    /// Precomputed canonical fragment for compiled extension modules.
    #[serde(default, alias = "Extensions")]
    pub extensions: Option<GraphOutput>,
}

impl AnalyzerOutput {
    /// Parse the analyzer's stdout.
    pub fn from_json(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pipeline_payload() {
        let json = r#"{
            "graph": {
                "Defs": [{
                    "Path": "/src/pkg/mod/f",
                    "Name": "f",
                    "File": "/src/pkg/mod.py",
                    "IdentStart": 4, "IdentEnd": 5,
                    "DefStart": 0, "DefEnd": 20,
                    "Exported": true,
                    "Kind": "FUNCTION",
                    "FuncData": {"Signature": "(a, b)"}
                }],
                "Refs": [{"Def": "/src/pkg/mod/f", "File": "/src/pkg/b.py", "Start": 1, "End": 2, "Builtin": false}],
                "Docs": null
            },
            "reqs": null,
            "extensions": null
        }"#;
        let out = AnalyzerOutput::from_json(json).unwrap();
        assert_eq!(out.graph.defs.len(), 1);
        assert_eq!(out.graph.defs[0].func_data.as_ref().unwrap().signature, "(a, b)");
        assert_eq!(out.graph.refs[0].def, "/src/pkg/mod/f");
        assert!(out.graph.docs.is_empty());
        assert!(out.reqs.is_empty());
        assert!(out.extensions.is_none());
    }

    #[test]
    fn accepts_capitalized_top_level_keys() {
        let json = r#"{"Graph": {"Defs": []}, "Reqs": [{"project_name": "A", "repo_url": "x/y"}], "Extensions": {"Defs": []}}"#;
        let out = AnalyzerOutput::from_json(json).unwrap();
        assert_eq!(out.reqs.len(), 1);
        assert!(out.extensions.unwrap().is_empty());
    }

    #[test]
    fn malformed_payload_is_an_error() {
        assert!(AnalyzerOutput::from_json("not json").is_err());
        assert!(AnalyzerOutput::from_json(r#"{"graph": {"Defs": 3}}"#).is_err());
    }
}
