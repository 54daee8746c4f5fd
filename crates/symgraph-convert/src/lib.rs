//! Conversion of analyzer output into the canonical symgraph graph.
//!
//! This crate provides:
//! - [`Converter`] for per-record conversion of defs, refs and docs
//! - [`graph_unit`] and friends for whole-unit aggregation
//! - [`KindMap`], the raw-kind to [`DefKind`] table
//! - [`format_doc_body`] for docstring cleanup
//!
//! [`DefKind`]: symgraph_core::DefKind

mod aggregate;
mod convert;
mod docs;
mod error;
mod kinds;

pub use aggregate::{graph_unit, graph_unit_json, graph_unit_with};
pub use convert::{ConvertedDef, Converter};
pub use docs::format_doc_body;
pub use error::ConvertError;
pub use kinds::{KindMap, MappedKind};

// Re-export core types for convenience
pub use symgraph_core::{AnalyzerOutput, GraphOutput, SourceUnit};
pub use symgraph_resolve::Environment;
