//! Shared fixtures for ament-index integration tests.

use assert_cmd::Command;
use std::env;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const INDEX_SUBFOLDER: &str = "share/ament_index/resource_index";

/// Two install prefixes with overlapping resources.
///
/// `prefix1` overlays `prefix2`:
/// - `resource_type1`: foo, bar in prefix1
/// - `resource_type2`: foo in prefix1; foo, bar in prefix2
/// - `resource_type3`: bar in prefix2
/// - `resource_type4`: foo ("foo") in prefix1
/// - `resource_type5`: foo ("foo1") in prefix1, foo ("foo2") in prefix2
#[allow(dead_code)]
pub struct Fixture {
    root: TempDir,
}

#[allow(dead_code)]
impl Fixture {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let fixture = Self { root };

        let prefix1 = fixture.prefix("prefix1");
        let prefix2 = fixture.prefix("prefix2");
        write_resource(&prefix1, "resource_type1", "foo", "");
        write_resource(&prefix1, "resource_type1", "bar", "");
        write_resource(&prefix1, "resource_type2", "foo", "");
        write_resource(&prefix2, "resource_type2", "foo", "");
        write_resource(&prefix2, "resource_type2", "bar", "");
        write_resource(&prefix2, "resource_type3", "bar", "");
        write_resource(&prefix1, "resource_type4", "foo", "foo");
        write_resource(&prefix1, "resource_type5", "foo", "foo1");
        write_resource(&prefix2, "resource_type5", "foo", "foo2");

        fs::create_dir_all(fixture.home()).expect("Failed to create test home");
        fixture
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Path of a prefix below the fixture root. May not exist.
    pub fn prefix(&self, name: &str) -> PathBuf {
        self.root.path().join(name)
    }

    /// Emulated `$HOME`, kept free of user config.
    pub fn home(&self) -> PathBuf {
        self.root.path().join("home")
    }

    /// `AMENT_PREFIX_PATH` value listing the named prefixes in order.
    pub fn prefix_path(&self, names: &[&str]) -> OsString {
        env::join_paths(names.iter().map(|name| self.prefix(name)))
            .expect("Failed to join prefix paths")
    }

    /// The `ament-index` binary with an isolated environment.
    pub fn cli(&self, names: &[&str]) -> Command {
        let mut cmd = Command::cargo_bin("ament-index").expect("Failed to locate ament-index binary");
        cmd.env("AMENT_PREFIX_PATH", self.prefix_path(names))
            .env("HOME", self.home())
            .env("XDG_CONFIG_HOME", self.home().join(".config"))
            .env_remove("AMENT_INDEX_CONFIG_PATH")
            .env_remove("AMENT_INDEX_ENV_VAR")
            .env_remove("AMENT_INDEX_SUBFOLDER")
            .env_remove("RUST_LOG");
        cmd
    }
}

pub fn write_resource(prefix: &Path, resource_type: &str, name: &str, content: &str) -> PathBuf {
    let dir = prefix.join(INDEX_SUBFOLDER).join(resource_type);
    fs::create_dir_all(&dir).expect("Failed to create resource type directory");
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write resource");
    path
}

/// Restores an environment variable to its previous value on drop.
#[allow(dead_code)]
pub struct EnvVarGuard {
    key: String,
    original: Option<OsString>,
}

#[allow(dead_code)]
impl EnvVarGuard {
    pub fn set<V: AsRef<OsStr>>(key: &str, value: V) -> Self {
        let original = env::var_os(key);
        unsafe { env::set_var(key, value) };
        Self {
            key: key.to_string(),
            original,
        }
    }

    pub fn remove(key: &str) -> Self {
        let original = env::var_os(key);
        unsafe { env::remove_var(key) };
        Self {
            key: key.to_string(),
            original,
        }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        match self.original.as_ref() {
            Some(original) => unsafe { env::set_var(&self.key, original) },
            None => unsafe { env::remove_var(&self.key) },
        }
    }
}
