//! Core data types for symgraph.
//!
//! This crate defines the vocabulary shared by the resolution and conversion
//! layers:
//! - source units and the requirements they declare
//! - `DefKey`, the cross-repository identity of a definition
//! - canonical graph records (defs, refs, docs) and the per-unit output
//! - analyzer-native records as they arrive from the external analyzer
//!
//! These types are used by:
//! - `symgraph-resolve` for path classification and requirement matching
//! - `symgraph-convert` for turning raw records into graph records
//! - `symgraph` for the JSON process boundary

mod path;
mod raw;
mod requirement;
mod symbol;
mod unit;

pub use path::{is_valid_tree_path, normalize_path};
pub use raw::{AnalyzerOutput, FuncData, RawDef, RawDoc, RawGraph, RawRef};
pub use requirement::{Requirement, repo_uri};
pub use symbol::{Def, DefKey, DefKind, Doc, GraphOutput, PLAIN_TEXT_FORMAT, Ref, RefSlot};
pub use unit::SourceUnit;

use serde::{Deserialize, Deserializer};

/// Deserialize `null` as the type's default.
///
/// The analyzer and the requirement resolver emit `null` for empty lists.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
