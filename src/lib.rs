//! ament resource index
//!
//! Resolves resources that installed packages register under
//! `<prefix>/share/ament_index/resource_index/<type>/<name>`, scanning the
//! prefixes listed in `AMENT_PREFIX_PATH`. Earlier prefixes overlay later
//! ones.
//!
//! The free functions below use the default layout. Use [`ResourceIndex`]
//! to read a different variable or subfolder.
//!
//! ```no_run
//! let resource = ament_index::get_resource("packages", "rclcpp")?;
//! println!("rclcpp lives in {}", resource.prefix.display());
//! # Ok::<(), ament_index::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod index;
pub mod logging;
pub mod packages;
pub mod resources;
pub mod search_paths;

#[cfg(test)]
mod testing;

use std::collections::BTreeSet;
use std::path::PathBuf;

pub use config::{AMENT_PREFIX_PATH_ENV_VAR, IndexConfig, RESOURCE_INDEX_SUBFOLDER};
pub use error::{Error, ErrorKind, Result};
pub use index::ResourceMap;
pub use packages::PACKAGES_RESOURCE_TYPE;
pub use resources::{Resource, ResourceIndex};

/// Prefixes listed in `AMENT_PREFIX_PATH` that exist as directories.
pub fn get_search_paths() -> Result<Vec<PathBuf>> {
    ResourceIndex::default().search_paths()
}

/// Resources of `resource_type` mapped to their owning prefix.
pub fn get_resources(resource_type: &str) -> Result<ResourceMap> {
    ResourceIndex::default().get_resources(resource_type)
}

/// Content and owning prefix of a resource.
pub fn get_resource(resource_type: &str, resource_name: &str) -> Result<Resource> {
    ResourceIndex::default().get_resource(resource_type, resource_name)
}

/// Owning prefix of a resource, if any prefix defines it.
pub fn has_resource(resource_type: &str, resource_name: &str) -> Result<Option<PathBuf>> {
    ResourceIndex::default().has_resource(resource_type, resource_name)
}

/// All resource types across the active prefixes.
pub fn get_resource_types() -> Result<BTreeSet<String>> {
    ResourceIndex::default().get_resource_types()
}

/// All packages with their installation prefix.
pub fn get_packages_with_prefixes() -> Result<ResourceMap> {
    ResourceIndex::default().get_packages_with_prefixes()
}

/// Installation prefix of `package`.
pub fn get_package_prefix(package: &str) -> Result<PathBuf> {
    ResourceIndex::default().get_package_prefix(package)
}

/// `<prefix>/share/<package>` for an installed package.
pub fn get_package_share_directory(package: &str) -> Result<PathBuf> {
    ResourceIndex::default().get_package_share_directory(package)
}
