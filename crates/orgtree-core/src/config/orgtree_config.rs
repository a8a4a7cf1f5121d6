//! Top-level orgtree configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{BuildConfig, LookupConfig, OutputConfig};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`ORGTREE_*`)
/// 3. Project config (`orgtree.toml` in the working root)
/// 4. User config (`~/.orgtree/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct OrgtreeConfig {
    pub build: BuildConfig,
    pub lookup: LookupConfig,
    pub output: OutputConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub parallel: Option<bool>,
    pub threads: Option<usize>,
    pub canonical_prefix: Option<String>,
    pub output_dir: Option<String>,
    pub pretty: Option<bool>,
}

impl OrgtreeConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(err @ ConfigError::ParseError { .. }) => return Err(err),
                    Err(err) => {
                        ::tracing::warn!(error = %err, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config)?;

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &OrgtreeConfig) -> Result<(), ConfigError> {
        if let Some(ref prefix) = config.lookup.canonical_prefix {
            if prefix.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "lookup.canonical_prefix".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if let Some(ref dir) = config.output.dir {
            if dir.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "output.dir".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if config.build.parallel_threshold == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "build.parallel_threshold".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the user config path: `~/.orgtree/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".orgtree").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut OrgtreeConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: OrgtreeConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut OrgtreeConfig, other: &OrgtreeConfig) {
        // Build
        if other.build.parallel.is_some() {
            base.build.parallel = other.build.parallel;
        }
        if other.build.threads.is_some() {
            base.build.threads = other.build.threads;
        }
        if other.build.parallel_threshold.is_some() {
            base.build.parallel_threshold = other.build.parallel_threshold;
        }
        if other.build.track_known_ids.is_some() {
            base.build.track_known_ids = other.build.track_known_ids;
        }

        // Lookup
        if other.lookup.canonical_prefix.is_some() {
            base.lookup.canonical_prefix = other.lookup.canonical_prefix.clone();
        }

        // Output
        if other.output.dir.is_some() {
            base.output.dir = other.output.dir.clone();
        }
        if other.output.pretty.is_some() {
            base.output.pretty = other.output.pretty;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `ORGTREE_BUILD_THREADS`, `ORGTREE_LOOKUP_CANONICAL_PREFIX`, etc.
    fn apply_env_overrides(config: &mut OrgtreeConfig) -> Result<(), ConfigError> {
        if let Some(v) = env_parse::<bool>("ORGTREE_BUILD_PARALLEL")? {
            config.build.parallel = Some(v);
        }
        if let Some(v) = env_parse::<usize>("ORGTREE_BUILD_THREADS")? {
            config.build.threads = Some(v);
        }
        if let Some(v) = env_parse::<usize>("ORGTREE_BUILD_PARALLEL_THRESHOLD")? {
            config.build.parallel_threshold = Some(v);
        }
        if let Some(v) = env_parse::<bool>("ORGTREE_BUILD_TRACK_KNOWN_IDS")? {
            config.build.track_known_ids = Some(v);
        }
        if let Ok(val) = std::env::var("ORGTREE_LOOKUP_CANONICAL_PREFIX") {
            config.lookup.canonical_prefix = Some(val);
        }
        if let Ok(val) = std::env::var("ORGTREE_OUTPUT_DIR") {
            config.output.dir = Some(val);
        }
        if let Some(v) = env_parse::<bool>("ORGTREE_OUTPUT_PRETTY")? {
            config.output.pretty = Some(v);
        }
        Ok(())
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut OrgtreeConfig, cli: &CliOverrides) {
        if let Some(v) = cli.parallel {
            config.build.parallel = Some(v);
        }
        if let Some(v) = cli.threads {
            config.build.threads = Some(v);
        }
        if let Some(ref v) = cli.canonical_prefix {
            config.lookup.canonical_prefix = Some(v.clone());
        }
        if let Some(ref v) = cli.output_dir {
            config.output.dir = Some(v.clone());
        }
        if let Some(v) = cli.pretty {
            config.output.pretty = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Read and parse an environment variable. Unset is `None`; set but
/// unparsable is an error rather than a silent fallback.
fn env_parse<T: std::str::FromStr>(name: &str) -> Result<Option<T>, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(val) => val
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::InvalidValue {
                field: name.to_string(),
                message: format!("{val:?}: {e}"),
            }),
        Err(_) => Ok(None),
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
