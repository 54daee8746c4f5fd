//! Batch runner: convert many units in parallel and aggregate results.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use symgraph_convert::graph_unit_json;
use symgraph_core::{GraphOutput, SourceUnit};
use symgraph_resolve::Environment;

/// One unit to convert: its description and the analyzer output file.
#[derive(Debug, Clone, Deserialize)]
pub struct Job {
    pub unit: SourceUnit,
    pub input: PathBuf,
}

/// Outcome of converting a single unit.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum UnitOutcome {
    Ok { graph: GraphOutput },
    Error { message: String },
}

/// Result for a single unit in a batch run.
#[derive(Debug, Serialize)]
pub struct UnitResult {
    pub unit: String,
    #[serde(flatten)]
    pub result: UnitOutcome,
}

/// Aggregated report across all units of a batch.
#[derive(Debug, Serialize)]
pub struct BatchReport {
    pub units: Vec<UnitResult>,
}

impl BatchReport {
    /// Convert every job in parallel. Relative input paths resolve against `base`.
    ///
    /// Jobs share nothing; one failing unit does not affect the others.
    pub fn run(jobs: &[Job], env: &Environment, base: &Path) -> Self {
        let units = jobs
            .par_iter()
            .map(|job| {
                let result = match convert_job(job, env, base) {
                    Ok(graph) => UnitOutcome::Ok { graph },
                    Err(message) => {
                        tracing::warn!(unit = %job.unit.name, %message, "unit failed");
                        UnitOutcome::Error { message }
                    }
                };
                UnitResult {
                    unit: job.unit.name.clone(),
                    result,
                }
            })
            .collect();
        Self { units }
    }

    /// Returns true if any unit errored.
    pub fn has_errors(&self) -> bool {
        self.units
            .iter()
            .any(|u| matches!(u.result, UnitOutcome::Error { .. }))
    }
}

fn convert_job(job: &Job, env: &Environment, base: &Path) -> Result<GraphOutput, String> {
    let path = base.join(&job.input);
    let input = std::fs::read_to_string(&path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    graph_unit_json(&input, &job.unit, env).map_err(|e| e.to_string())
}
