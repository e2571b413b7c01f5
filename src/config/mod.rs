//! Layered configuration for the resolver and CLI.
//!
//! Tiers are merged field-by-field, lowest to highest:
//! 1. **Defaults** - `AMENT_PREFIX_PATH` and `share/ament_index/resource_index`
//! 2. **User** - `<config_dir>/ament-index/config.yaml`
//! 3. **Explicit** - `AMENT_INDEX_CONFIG_PATH` or `--config`
//! 4. **Environment** - `AMENT_INDEX_ENV_VAR`, `AMENT_INDEX_SUBFOLDER`
//!
//! Command-line flags are applied on top by the binary.

mod loader;
mod types;

pub use loader::{
    CONFIG_PATH_ENV_VAR, ConfigLoader, ConfigPaths, ConfigTier, ENV_VAR_OVERRIDE,
    SUBFOLDER_OVERRIDE,
};
pub use types::*;
