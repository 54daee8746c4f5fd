//! symgraph: resolve analyzer symbol paths into a cross-repository code graph.
//!
//! The heavy lifting lives in `symgraph-resolve` and `symgraph-convert`; this
//! crate adds the configuration file, batch runner and CLI commands.

pub mod batch;
pub mod commands;
pub mod config;

pub use symgraph_convert::{ConvertError, graph_unit, graph_unit_json};
pub use symgraph_core::{GraphOutput, SourceUnit};
pub use symgraph_resolve::Environment;
