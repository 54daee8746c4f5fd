//! Configuration file for the symgraph CLI.
//!
//! Example `.symgraph/config.toml`:
//! ```toml
//! [environment]
//! stdlib_root = "/usr/lib/python3.12"
//! site_packages_root = "/venv/lib/python3.12/site-packages"
//!
//! [output]
//! pretty = true
//!
//! [batch]
//! threads = 4
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use symgraph_resolve::Environment;

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "SYMGRAPH_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SymgraphConfig {
    pub environment: Environment,
    pub output: OutputConfig,
    pub batch: BatchConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON output.
    pub pretty: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Worker threads for batch mode. 0 uses one per CPU.
    pub threads: usize,
}

impl SymgraphConfig {
    /// Load configuration from the given path.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Find and load the active configuration.
    ///
    /// Resolution order:
    /// 1. `explicit` (from `--config`)
    /// 2. `$SYMGRAPH_CONFIG`
    /// 3. `.symgraph/config.toml` under the current directory, if present
    /// 4. built-in defaults
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR)
            && !path.is_empty()
        {
            return Self::load(Path::new(&path));
        }
        let path = Self::default_path();
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Default config path: `.symgraph/config.toml`.
    pub fn default_path() -> PathBuf {
        PathBuf::from(".symgraph").join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // set_var/remove_var are unsafe in edition 2024; serialize the tests that use them.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn partial_config_uses_defaults() {
        let config: SymgraphConfig = toml::from_str(
            r#"
[environment]
stdlib_root = "/usr/lib/python3.12"

[output]
pretty = true
"#,
        )
        .unwrap();
        assert_eq!(config.environment.stdlib_root, "/usr/lib/python3.12");
        assert_eq!(config.environment.source_root, "/src");
        assert!(config.output.pretty);
        assert_eq!(config.batch.threads, 0);
    }

    #[test]
    fn empty_config_is_default() {
        let config: SymgraphConfig = toml::from_str("").unwrap();
        assert_eq!(config, SymgraphConfig::default());
    }

    #[test]
    fn explicit_path_wins() {
        let _guard = ENV_LOCK.lock().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let explicit = dir.path().join("explicit.toml");
        let from_env = dir.path().join("env.toml");
        std::fs::write(&explicit, "[batch]\nthreads = 2\n").unwrap();
        std::fs::write(&from_env, "[batch]\nthreads = 9\n").unwrap();

        unsafe { env::set_var(CONFIG_ENV_VAR, &from_env) };
        let config = SymgraphConfig::discover(Some(&explicit)).unwrap();
        assert_eq!(config.batch.threads, 2);

        let config = SymgraphConfig::discover(None).unwrap();
        assert_eq!(config.batch.threads, 9);
        unsafe { env::remove_var(CONFIG_ENV_VAR) };
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SymgraphConfig::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[batch\nthreads = ").unwrap();
        let err = SymgraphConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }
}
