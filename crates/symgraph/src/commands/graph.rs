//! `symgraph graph`: convert one unit's analyzer output.

use std::path::Path;

use anyhow::Context;
use symgraph_convert::graph_unit_json;
use symgraph_core::SourceUnit;

use super::{emit, read_input, read_json};
use crate::config::SymgraphConfig;

pub fn run(
    config: &SymgraphConfig,
    unit: &Path,
    input: Option<&Path>,
    pretty: bool,
) -> anyhow::Result<()> {
    let unit: SourceUnit = read_json(unit)?;
    let payload = read_input(input)?;
    let graph = graph_unit_json(&payload, &unit, &config.environment)
        .with_context(|| format!("failed to graph unit {}", unit.name))?;
    tracing::info!(
        unit = %unit.name,
        defs = graph.defs.len(),
        refs = graph.refs.len(),
        docs = graph.docs.len(),
        "graphed unit"
    );
    emit(&graph, pretty || config.output.pretty)
}
