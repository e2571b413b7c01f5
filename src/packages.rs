//! Package prefix lookup on top of the `packages` resource type.

use crate::error::{Error, Result};
use crate::index::ResourceMap;
use crate::resources::ResourceIndex;
use std::path::PathBuf;

/// Resource type every installed package registers itself under.
pub const PACKAGES_RESOURCE_TYPE: &str = "packages";

impl ResourceIndex {
    /// All packages with the prefix they are installed in.
    pub fn get_packages_with_prefixes(&self) -> Result<ResourceMap> {
        self.get_resources(PACKAGES_RESOURCE_TYPE)
    }

    /// Installation prefix of `package`.
    ///
    /// For a package `foo` installed into `/home/user/ws/install` this
    /// returns `/home/user/ws/install`.
    pub fn get_package_prefix(&self, package: &str) -> Result<PathBuf> {
        let packages = self.get_packages_with_prefixes()?;
        match packages.get(package) {
            Some(prefix) => Ok(prefix.to_path_buf()),
            None => Err(Error::package_not_found(package, self.search_paths()?)),
        }
    }

    /// Share directory of `package`: `<prefix>/share/<package>`.
    pub fn get_package_share_directory(&self, package: &str) -> Result<PathBuf> {
        let prefix = self.get_package_prefix(package)?;
        Ok(prefix.join("share").join(package))
    }
}
