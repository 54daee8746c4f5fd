use symgraph_resolve::ResolveError;

/// Error that terminates conversion of a unit.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("could not parse analyzer output as JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("could not convert def {path}: {source}")]
    Def {
        path: String,
        #[source]
        source: ResolveError,
    },

    #[error("could not convert doc for {path}: {source}")]
    Doc {
        path: String,
        #[source]
        source: ResolveError,
    },

    #[error("'{tree_path}' is not a valid tree-path (def {path})")]
    InvalidTreePath { path: String, tree_path: String },

    /// A record's file lies outside the unit. Conversion skips such records.
    #[error("file {file} is outside unit root {unit_root}")]
    FileOutsideUnit { file: String, unit_root: String },
}
