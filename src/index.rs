//! Overlay map from resource name to owning prefix.

use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Resource names mapped to the prefix that owns them.
///
/// Entries keep insertion order. A name is only ever bound once: the first
/// prefix to claim it wins, which is the overlay rule when prefixes are fed
/// in priority order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResourceMap {
    entries: IndexMap<String, PathBuf>,
}

impl ResourceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `prefix` unless it is already bound.
    ///
    /// Returns `true` if the entry was inserted.
    pub fn insert_if_absent(&mut self, name: impl Into<String>, prefix: impl Into<PathBuf>) -> bool {
        match self.entries.entry(name.into()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(prefix.into());
                true
            }
        }
    }

    /// Prefix owning `name`, if any.
    pub fn get(&self, name: &str) -> Option<&Path> {
        self.entries.get(name).map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.entries
            .iter()
            .map(|(name, prefix)| (name.as_str(), prefix.as_path()))
    }

    /// Names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Reorder entries by resource name.
    pub fn sort_by_name(&mut self) {
        self.entries.sort_keys();
    }
}

/// Collects with first-wins semantics, like repeated `insert_if_absent`.
impl<N, P> FromIterator<(N, P)> for ResourceMap
where
    N: Into<String>,
    P: Into<PathBuf>,
{
    fn from_iter<I: IntoIterator<Item = (N, P)>>(iter: I) -> Self {
        let mut map = ResourceMap::new();
        for (name, prefix) in iter {
            map.insert_if_absent(name, prefix);
        }
        map
    }
}
