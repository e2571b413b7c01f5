//! Shell completion.
//!
//! Static scripts come from `clap_complete`. Dynamic candidates for the
//! TYPE and NAME arguments are read from the live index, so a shell hook
//! can call `ament-index --complete WORD [TYPE]`.

use super::Cli;
use crate::resources::ResourceIndex;
use clap::CommandFactory;
use clap_complete::{Shell, generate};
use std::io::Write;
use tracing::debug;

/// Resource types starting with `prefix`.
///
/// Lookup failures produce no candidates.
pub fn complete_resource_types(index: &ResourceIndex, prefix: &str) -> Vec<String> {
    match index.get_resource_types() {
        Ok(types) => types.into_iter().filter(|t| t.starts_with(prefix)).collect(),
        Err(err) => {
            debug!("No type completions: {}", err);
            Vec::new()
        }
    }
}

/// Names of `resource_type` resources starting with `prefix`, sorted.
pub fn complete_resource_names(index: &ResourceIndex, resource_type: &str, prefix: &str) -> Vec<String> {
    if resource_type.is_empty() {
        return Vec::new();
    }
    match index.get_resources(resource_type) {
        Ok(resources) => {
            let mut names: Vec<String> = resources
                .names()
                .filter(|name| name.starts_with(prefix))
                .map(str::to_string)
                .collect();
            names.sort();
            names
        }
        Err(err) => {
            debug!(resource_type, "No name completions: {}", err);
            Vec::new()
        }
    }
}

/// Candidates for the argument being completed.
pub fn candidates(index: &ResourceIndex, resource_type: Option<&str>, word: &str) -> Vec<String> {
    match resource_type {
        None => complete_resource_types(index, word),
        Some(resource_type) => complete_resource_names(index, resource_type, word),
    }
}

/// Write the `clap_complete` script for `shell`.
pub fn write_completion_script(shell: Shell, out: &mut dyn Write) {
    let mut command = Cli::command();
    generate(shell, &mut command, "ament-index", out);
}
