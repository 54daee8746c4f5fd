//! Symbol path resolution for symgraph.
//!
//! The analyzer reports every symbol as an absolute path inside its sandbox.
//! This crate answers "who owns this path?":
//! - [`classify`] sorts a path into the current unit, an installed
//!   dependency, the standard library, or an interpreter builtin
//! - [`RequirementLookup`] finds which declared requirement owns a
//!   dependency path
//! - [`DefKeyResolver`] composes both into a cross-repository [`DefKey`]
//!
//! All lookup tables live in [`Environment`], which is plain data passed in
//! by the caller.
//!
//! [`DefKey`]: symgraph_core::DefKey

pub mod classify;
pub mod env;
pub mod lookup;
pub mod requirements;
pub mod resolver;

pub use classify::{Classification, ClassifyError, Origin, classify, strip_root};
pub use env::{BuiltinPrefix, Environment};
pub use lookup::{LinearScan, LookupStrategy, PrefixTrie, RequirementLookup, build_lookup};
pub use requirements::{Candidates, MAX_CANDIDATES, MatchError, prune_and_log, prune_requirements};
pub use resolver::{DefKeyResolver, ResolveError, Resolved};
