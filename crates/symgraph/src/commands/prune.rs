//! `symgraph prune`: drop requirements without a resolved repository.

use std::path::Path;

use anyhow::Context;
use symgraph_core::Requirement;
use symgraph_resolve::prune_and_log;

use super::{emit, read_input};
use crate::config::SymgraphConfig;

pub fn run(config: &SymgraphConfig, input: Option<&Path>, pretty: bool) -> anyhow::Result<()> {
    let content = read_input(input)?;
    let reqs: Vec<Requirement> =
        serde_json::from_str(&content).context("invalid requirement list")?;
    let kept = prune_and_log(reqs);
    emit(&kept, pretty || config.output.pretty)
}
