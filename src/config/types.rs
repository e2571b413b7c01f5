//! Configuration types and structures.

use crate::format::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable holding the prefix list unless configured otherwise.
pub const AMENT_PREFIX_PATH_ENV_VAR: &str = "AMENT_PREFIX_PATH";

/// Location of the resource index relative to each prefix.
pub const RESOURCE_INDEX_SUBFOLDER: &str = "share/ament_index/resource_index";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub index: IndexConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Where the resolver looks for prefixes and resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Name of the environment variable holding the prefix list.
    #[serde(default = "default_env_var")]
    pub env_var: String,

    /// Index subfolder below every prefix.
    #[serde(default = "default_subfolder")]
    pub subfolder: PathBuf,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            env_var: default_env_var(),
            subfolder: default_subfolder(),
        }
    }
}

impl IndexConfig {
    /// Default layout, reading prefixes from `env_var`.
    pub fn with_env_var(env_var: impl Into<String>) -> Self {
        Self {
            env_var: env_var.into(),
            ..Self::default()
        }
    }
}

fn default_env_var() -> String {
    AMENT_PREFIX_PATH_ENV_VAR.to_string()
}

fn default_subfolder() -> PathBuf {
    RESOURCE_INDEX_SUBFOLDER.split('/').collect()
}

/// CLI output preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format when `--format` is not given.
    #[serde(default)]
    pub format: OutputFormat,
}
