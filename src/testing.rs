//! Shared helpers for unit tests.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::RESOURCE_INDEX_SUBFOLDER;

/// Restores an environment variable to its previous value on drop.
pub struct EnvVarGuard {
    key: String,
    original: Option<OsString>,
}

impl EnvVarGuard {
    pub fn set<K: Into<String>, V: AsRef<OsStr>>(key: K, value: V) -> Self {
        let key = key.into();
        let original = std::env::var_os(&key);
        unsafe { std::env::set_var(&key, value) };
        Self { key, original }
    }

    pub fn remove<K: Into<String>>(key: K) -> Self {
        let key = key.into();
        let original = std::env::var_os(&key);
        unsafe { std::env::remove_var(&key) };
        Self { key, original }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        if let Some(original) = self.original.as_ref() {
            unsafe { std::env::set_var(&self.key, original) };
        } else {
            unsafe { std::env::remove_var(&self.key) };
        }
    }
}

/// Write `<prefix>/<index subfolder>/<resource_type>/<name>` with `content`.
pub fn write_resource(prefix: &Path, resource_type: &str, name: &str, content: &str) -> PathBuf {
    let dir = prefix.join(RESOURCE_INDEX_SUBFOLDER).join(resource_type);
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Join prefixes the way the platform separates them in `AMENT_PREFIX_PATH`.
pub fn join_prefixes<P: AsRef<Path>>(prefixes: &[P]) -> OsString {
    std::env::join_paths(prefixes.iter().map(|p| p.as_ref())).unwrap()
}
