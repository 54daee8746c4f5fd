//! Per-unit aggregation of converted records.

use std::collections::HashSet;

use symgraph_core::{AnalyzerOutput, GraphOutput, RefSlot, SourceUnit};
use symgraph_resolve::{DefKeyResolver, Environment, prune_and_log};

use crate::{ConvertError, Converter, KindMap};

/// Convert one unit's analyzer output using the standard kind table.
pub fn graph_unit(
    output: AnalyzerOutput,
    unit: &SourceUnit,
    env: &Environment,
) -> Result<GraphOutput, ConvertError> {
    graph_unit_with(output, unit, env, &KindMap::default())
}

/// Parse the analyzer's JSON output and convert it.
pub fn graph_unit_json(
    input: &str,
    unit: &SourceUnit,
    env: &Environment,
) -> Result<GraphOutput, ConvertError> {
    let output = AnalyzerOutput::from_json(input)?;
    graph_unit(output, unit, env)
}

/// Convert one unit's analyzer output.
///
/// Defs are converted first so that self-references claim their slots before
/// analyzer references are considered. Unresolvable references are logged
/// and skipped; any other failure aborts the whole unit.
pub fn graph_unit_with(
    output: AnalyzerOutput,
    unit: &SourceUnit,
    env: &Environment,
    kinds: &KindMap,
) -> Result<GraphOutput, ConvertError> {
    let _span = tracing::info_span!("graph_unit", unit = %unit.name).entered();
    let AnalyzerOutput {
        graph,
        reqs,
        extensions,
    } = output;

    let reqs = prune_and_log(reqs);
    let converter = Converter::new(DefKeyResolver::new(env, unit, reqs), kinds);

    let mut out = GraphOutput::default();
    let mut self_slots: HashSet<RefSlot> = HashSet::new();

    for raw in &graph.defs {
        let Some(converted) = converter.convert_def(raw)? else {
            continue;
        };
        out.defs.push(converted.def);
        if let Some(self_ref) = converted.self_ref
            && self_slots.insert(self_ref.slot())
        {
            out.refs.push(self_ref);
        }
    }

    let mut dropped = 0usize;
    for raw in &graph.refs {
        match converter.convert_ref(raw) {
            Ok(Some(r)) => {
                if !self_slots.contains(&r.slot()) {
                    out.refs.push(r);
                }
            }
            Ok(None) => {}
            Err(err) => {
                dropped += 1;
                tracing::warn!(
                    def_path = %raw.def,
                    file = %raw.file,
                    error = %err,
                    "skipping reference"
                );
            }
        }
    }
    if dropped > 0 {
        tracing::info!(dropped, "dropped unresolvable references");
    }

    for raw in &graph.docs {
        if let Some(doc) = converter.convert_doc(raw)? {
            out.docs.push(doc);
        }
    }

    if let Some(extensions) = extensions {
        tracing::info!(
            defs = extensions.defs.len(),
            refs = extensions.refs.len(),
            docs = extensions.docs.len(),
            "merging extension module graph"
        );
        out.append(extensions);
    }

    tracing::debug!(
        defs = out.defs.len(),
        refs = out.refs.len(),
        docs = out.docs.len(),
        "unit converted"
    );
    Ok(out)
}
