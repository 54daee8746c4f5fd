//! Def key resolution: classification plus requirement matching.

use symgraph_core::{DefKey, Requirement, SourceUnit, is_valid_tree_path};

use crate::classify::{Classification, ClassifyError, Origin, classify};
use crate::lookup::{RequirementLookup, build_lookup};
use crate::requirements::MatchError;
use crate::Environment;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error(transparent)]
    Classify(#[from] ClassifyError),

    #[error("could not find requirement matching path {path}: {source}")]
    Match {
        path: String,
        #[source]
        source: MatchError,
    },

    /// The path is a root itself, leaving nothing to name a definition by.
    #[error("path {path} resolves to invalid def path '{def_path}'")]
    InvalidDefPath { path: String, def_path: String },
}

/// A resolved def key and the classification it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub key: DefKey,
    pub origin: Origin,
}

/// Resolves absolute analyzer paths to def keys for one source unit.
///
/// Holds only immutable data; one resolver per unit, no state between calls.
pub struct DefKeyResolver<'a> {
    env: &'a Environment,
    unit: &'a SourceUnit,
    unit_root: String,
    lookup: Box<dyn RequirementLookup>,
}

impl<'a> DefKeyResolver<'a> {
    /// Build a resolver over requirements that have already been pruned.
    pub fn new(env: &'a Environment, unit: &'a SourceUnit, reqs: Vec<Requirement>) -> Self {
        let lookup = build_lookup(env.lookup, reqs, &env.source_suffix);
        Self::with_lookup(env, unit, lookup)
    }

    /// Build a resolver with a caller-supplied lookup strategy.
    pub fn with_lookup(
        env: &'a Environment,
        unit: &'a SourceUnit,
        lookup: Box<dyn RequirementLookup>,
    ) -> Self {
        Self {
            env,
            unit,
            unit_root: env.unit_root(unit),
            lookup,
        }
    }

    pub fn env(&self) -> &Environment {
        self.env
    }

    pub fn unit(&self) -> &SourceUnit {
        self.unit
    }

    /// Absolute root directory of the unit.
    pub fn unit_root(&self) -> &str {
        &self.unit_root
    }

    pub fn classify(&self, path: &str) -> Result<Classification, ClassifyError> {
        classify(path, &self.unit_root, self.env)
    }

    /// Resolve an absolute analyzer path to a def key.
    pub fn resolve(&self, path: &str) -> Result<Resolved, ResolveError> {
        let classification = self.classify(path)?;
        self.resolve_classified(path, classification)
    }

    /// Turn an existing classification into a def key. `path` is only used
    /// for error reporting.
    pub fn resolve_classified(
        &self,
        path: &str,
        classification: Classification,
    ) -> Result<Resolved, ResolveError> {
        let Classification { origin, relative } = classification;
        let key = match origin {
            Origin::Current => DefKey::new("", &self.unit.unit_type, &self.unit.name, &relative),
            Origin::Dependency => {
                let req = self
                    .lookup
                    .find(&relative)
                    .map_err(|source| ResolveError::Match {
                        path: path.to_string(),
                        source,
                    })?;
                DefKey::new(
                    req.repo(),
                    &self.env.dependency_unit_type,
                    &req.project_name,
                    &relative,
                )
            }
            Origin::Stdlib | Origin::Builtin => DefKey::new(
                &self.env.stdlib_repo,
                &self.env.stdlib_unit_type,
                &self.env.stdlib_unit,
                &relative,
            ),
        };
        if !is_valid_tree_path(&key.path) {
            return Err(ResolveError::InvalidDefPath {
                path: path.to_string(),
                def_path: key.path,
            });
        }
        Ok(Resolved { key, origin })
    }
}
