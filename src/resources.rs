//! Resource resolution across the prefix list.
//!
//! Every prefix contributes `<prefix>/<subfolder>/<type>/<name>` files.
//! Lookups walk prefixes in priority order: fetches stop at the first hit,
//! enumerations keep walking so underlays still contribute names the
//! overlays lack.

use crate::config::IndexConfig;
use crate::error::{Error, Result};
use crate::index::ResourceMap;
use crate::search_paths::search_paths_from_env;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// A fetched resource with its content and owning prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resource {
    /// The file content
    pub content: String,
    /// The first prefix the file was found in
    pub prefix: PathBuf,
}

/// Resolver over the prefixes named by one environment variable.
///
/// Holds only configuration. The prefix list and the filesystem are
/// re-read on every call.
#[derive(Debug, Clone, Default)]
pub struct ResourceIndex {
    config: IndexConfig,
}

impl ResourceIndex {
    pub fn new(config: IndexConfig) -> Self {
        Self { config }
    }

    /// Resolver with the default layout, reading prefixes from `env_var`.
    pub fn with_env_var(env_var: impl Into<String>) -> Self {
        Self::new(IndexConfig::with_env_var(env_var))
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Active prefixes, highest priority first.
    pub fn search_paths(&self) -> Result<Vec<PathBuf>> {
        search_paths_from_env(&self.config.env_var)
    }

    /// `<prefix>/<subfolder>`
    pub fn index_dir(&self, prefix: &Path) -> PathBuf {
        prefix.join(&self.config.subfolder)
    }

    /// `<prefix>/<subfolder>/<type>/<name>`
    pub fn resource_path(&self, prefix: &Path, resource_type: &str, resource_name: &str) -> PathBuf {
        self.index_dir(prefix).join(resource_type).join(resource_name)
    }

    /// All resources of `resource_type`, each bound to its highest-priority prefix.
    ///
    /// # Panics
    ///
    /// Panics if `resource_type` is empty.
    pub fn get_resources(&self, resource_type: &str) -> Result<ResourceMap> {
        assert!(!resource_type.is_empty(), "resource type must not be empty");

        let mut resources = ResourceMap::new();
        for prefix in self.search_paths()? {
            let type_dir = self.index_dir(&prefix).join(resource_type);
            if !type_dir.is_dir() {
                if type_dir.exists() {
                    debug!(path = %type_dir.display(), "Resource type is not a directory, skipping");
                } else {
                    trace!(dir = %type_dir.display(), "No resources of this type under prefix");
                }
                continue;
            }

            for name in list_dir(&type_dir, |path| !path.is_dir())? {
                if name.starts_with('.') {
                    continue;
                }
                if !resources.insert_if_absent(name.as_str(), prefix.as_path()) {
                    trace!(resource = %name, prefix = %prefix.display(), "Shadowed by overlay");
                }
            }
        }

        debug!(resource_type, count = resources.len(), "Enumerated resources");
        Ok(resources)
    }

    /// Content and owning prefix of the first matching resource file.
    ///
    /// A file that exists but cannot be read fails the call instead of
    /// falling through to lower-priority prefixes.
    ///
    /// # Panics
    ///
    /// Panics if `resource_type` or `resource_name` is empty.
    pub fn get_resource(&self, resource_type: &str, resource_name: &str) -> Result<Resource> {
        check_query(resource_type, resource_name);

        for prefix in self.search_paths()? {
            let path = self.resource_path(&prefix, resource_type, resource_name);
            if !path.is_file() {
                continue;
            }

            let content = fs::read_to_string(&path)
                .map_err(|source| Error::read(resource_type, resource_name, &path, source))?;
            debug!(resource_type, resource_name, prefix = %prefix.display(), "Resolved resource");
            return Ok(Resource { content, prefix });
        }

        Err(Error::not_found(resource_type, resource_name))
    }

    /// Owning prefix of a resource, or `None` when no prefix defines it.
    ///
    /// # Panics
    ///
    /// Panics if `resource_type` or `resource_name` is empty.
    pub fn has_resource(&self, resource_type: &str, resource_name: &str) -> Result<Option<PathBuf>> {
        check_query(resource_type, resource_name);

        let found = self
            .search_paths()?
            .into_iter()
            .find(|prefix| self.resource_path(prefix, resource_type, resource_name).is_file());
        Ok(found)
    }

    /// Every resource type known to any prefix.
    ///
    /// Types are a flat namespace: the same type in several prefixes is
    /// reported once.
    pub fn get_resource_types(&self) -> Result<BTreeSet<String>> {
        let mut types = BTreeSet::new();
        for prefix in self.search_paths()? {
            let index_dir = self.index_dir(&prefix);
            if !index_dir.is_dir() {
                continue;
            }
            types.extend(list_dir(&index_dir, Path::is_dir)?);
        }
        Ok(types)
    }
}

fn check_query(resource_type: &str, resource_name: &str) {
    assert!(!resource_type.is_empty(), "resource type must not be empty");
    assert!(!resource_name.is_empty(), "resource name must not be empty");
}

/// Sorted UTF-8 names of the entries in `dir` whose path passes `keep`.
///
/// A directory that disappears between the existence check and the listing
/// counts as empty. Any other failure, including one on a single entry, is
/// a [`Error::ResourceList`].
fn list_dir(dir: &Path, keep: impl Fn(&Path) -> bool) -> Result<Vec<String>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(dir = %dir.display(), "Directory vanished before listing");
            return Ok(Vec::new());
        }
        Err(err) => return Err(Error::list(dir, err)),
    };

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| Error::list(dir, err))?;
        if !keep(&entry.path()) {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => debug!(name = ?raw, "Skipping non UTF-8 entry"),
        }
    }
    names.sort();
    Ok(names)
}
