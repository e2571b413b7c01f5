//! Prefix discovery.
//!
//! The prefix list is re-read from the environment on every call. Order is
//! priority: earlier prefixes shadow later ones.

use crate::error::{Error, Result};
use std::env;
use std::ffi::OsStr;
use std::path::PathBuf;
use tracing::debug;

/// Read the prefix list from `var`.
///
/// Fails with [`Error::Configuration`] when the variable is unset or blank.
/// A configured value that names no existing directory yields an empty list.
pub fn search_paths_from_env(var: &str) -> Result<Vec<PathBuf>> {
    let value = match env::var_os(var) {
        Some(value) if !is_blank(&value) => value,
        _ => return Err(Error::configuration(var)),
    };
    Ok(split_search_paths(&value))
}

/// Split a path list on the platform separator, keeping existing directories.
///
/// Order and duplicates are preserved.
pub fn split_search_paths(value: &OsStr) -> Vec<PathBuf> {
    env::split_paths(value)
        .filter(|path| {
            if path.as_os_str().is_empty() {
                return false;
            }
            let keep = path.is_dir();
            if !keep {
                debug!(prefix = %path.display(), "Skipping missing prefix");
            }
            keep
        })
        .collect()
}

fn is_blank(value: &OsStr) -> bool {
    value.to_string_lossy().trim().is_empty()
}
