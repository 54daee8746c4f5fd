//! `symgraph batch`: convert many units in parallel.

use std::path::Path;

use anyhow::Context;

use super::{emit, read_json};
use crate::batch::{BatchReport, Job};
use crate::config::SymgraphConfig;

/// Run every job in `jobs_file` and print the report. Returns true if any
/// unit failed.
pub fn run(config: &SymgraphConfig, jobs_file: &Path, pretty: bool) -> anyhow::Result<bool> {
    let jobs: Vec<Job> = read_json(jobs_file)?;
    let base = jobs_file.parent().unwrap_or_else(|| Path::new("."));
    let env = &config.environment;

    let report = if config.batch.threads > 0 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.batch.threads)
            .build()
            .context("failed to build batch thread pool")?;
        pool.install(|| BatchReport::run(&jobs, env, base))
    } else {
        BatchReport::run(&jobs, env, base)
    };

    let failed = report.has_errors();
    tracing::info!(units = report.units.len(), failed, "batch finished");
    emit(&report, pretty || config.output.pretty)?;
    Ok(failed)
}
