//! Configuration loader with tier-based merging.
//!
//! Tiers are overlaid key by key onto the serialized defaults, so a file
//! only needs the fields it changes. `AMENT_INDEX_*` variables apply last.

use super::types::Config;
use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Explicit configuration file, loaded above the user file.
pub const CONFIG_PATH_ENV_VAR: &str = "AMENT_INDEX_CONFIG_PATH";
/// Overrides `index.env_var`.
pub const ENV_VAR_OVERRIDE: &str = "AMENT_INDEX_ENV_VAR";
/// Overrides `index.subfolder`.
pub const SUBFOLDER_OVERRIDE: &str = "AMENT_INDEX_SUBFOLDER";

/// Config file tier, lowest priority first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConfigTier {
    /// `<config_dir>/ament-index/config.yaml`
    User,
    /// File named by `AMENT_INDEX_CONFIG_PATH` or `--config`
    Explicit,
}

impl std::fmt::Display for ConfigTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigTier::User => write!(f, "user"),
            ConfigTier::Explicit => write!(f, "explicit"),
        }
    }
}

/// Config file locations for each tier.
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// User-level config file
    pub user_file: Option<PathBuf>,
    /// Explicitly requested config file
    pub explicit_file: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover configuration paths from environment and defaults.
    pub fn discover() -> Self {
        let user_file = dirs::config_dir().map(|d| d.join("ament-index").join("config.yaml"));
        let explicit_file = std::env::var_os(CONFIG_PATH_ENV_VAR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Self {
            user_file,
            explicit_file,
        }
    }

    /// Create paths with explicit files.
    pub fn with_files(user_file: Option<PathBuf>, explicit_file: Option<PathBuf>) -> Self {
        Self {
            user_file,
            explicit_file,
        }
    }

    /// Replace the explicit file if one is given.
    pub fn with_explicit_file(mut self, explicit_file: Option<PathBuf>) -> Self {
        if explicit_file.is_some() {
            self.explicit_file = explicit_file;
        }
        self
    }
}

/// Configuration loader that handles tier-based merging.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Loaded configuration
    config: Config,
    /// Files that contributed to the configuration, lowest tier first
    sources: Vec<(ConfigTier, PathBuf)>,
}

impl ConfigLoader {
    /// Load configuration with explicit paths.
    ///
    /// An unreadable user file is skipped with a warning; an unreadable
    /// explicit file is an error since the caller asked for it.
    pub fn load_with_paths(paths: ConfigPaths) -> Result<Self> {
        let mut merged = serde_json::to_value(Config::default())?;
        let mut sources = Vec::new();

        if let Some(ref user_file) = paths.user_file
            && user_file.is_file()
        {
            match read_yaml(user_file) {
                Ok(value) => {
                    merge_layer(&mut merged, value);
                    sources.push((ConfigTier::User, user_file.clone()));
                }
                Err(err) => warn!(
                    path = %user_file.display(),
                    "Ignoring unreadable user config: {:#}", err
                ),
            }
        }

        if let Some(ref explicit_file) = paths.explicit_file {
            let value = read_yaml(explicit_file).with_context(|| {
                format!("failed to load config file '{}'", explicit_file.display())
            })?;
            merge_layer(&mut merged, value);
            sources.push((ConfigTier::Explicit, explicit_file.clone()));
        }

        merge_layer(&mut merged, env_overrides());

        let config: Config =
            serde_json::from_value(merged).context("invalid ament-index configuration")?;
        debug!(?config, "Loaded configuration");

        Ok(Self {
            config,
            sources,
        })
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get mutable access to the configuration.
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Consume the loader and return the configuration.
    pub fn into_config(self) -> Config {
        self.config
    }

    /// Config files that were merged, lowest tier first.
    pub fn sources(&self) -> &[(ConfigTier, PathBuf)] {
        &self.sources
    }
}

/// Overlay `layer` onto `base`. Objects merge per key; any other value
/// replaces the slot. Nulls (empty documents, `key:` with no value) leave
/// `base` untouched.
fn merge_layer(base: &mut Value, layer: Value) {
    match (base, layer) {
        (_, Value::Null) => {}
        (Value::Object(base_map), Value::Object(layer_map)) => {
            for (key, value) in layer_map {
                if value.is_null() {
                    continue;
                }
                match base_map.get_mut(&key) {
                    Some(slot) => merge_layer(slot, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

fn read_yaml(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    let value = serde_yaml::from_str::<Value>(&content)?;
    Ok(value)
}

/// Collect `AMENT_INDEX_*` overrides as a config fragment.
fn env_overrides() -> Value {
    let mut index = Map::new();

    if let Ok(env_var) = std::env::var(ENV_VAR_OVERRIDE)
        && !env_var.trim().is_empty()
    {
        index.insert("env_var".to_string(), Value::String(env_var));
    }

    if let Some(subfolder) = std::env::var_os(SUBFOLDER_OVERRIDE)
        && !subfolder.is_empty()
    {
        index.insert(
            "subfolder".to_string(),
            Value::String(subfolder.to_string_lossy().into_owned()),
        );
    }

    if index.is_empty() {
        Value::Null
    } else {
        let mut root = Map::new();
        root.insert("index".to_string(), Value::Object(index));
        Value::Object(root)
    }
}
