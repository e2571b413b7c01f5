//! CLI definition for ament-index
//!
//! `ament-index [TYPE] [NAME]` queries the resource index:
//! - no arguments lists resource types
//! - `TYPE` lists resources of that type with their prefix
//! - `TYPE NAME` prints the owning prefix and content of one resource

pub mod complete;
pub mod query;

use crate::config::{Config, ConfigLoader, ConfigPaths};
use crate::format::OutputFormat;
use crate::resources::ResourceIndex;
use anyhow::Result;
use clap::Parser;
use clap::builder::NonEmptyStringValueParser;
use query::Query;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

/// Query the ament resource index.
#[derive(Parser, Debug)]
#[command(name = "ament-index", author, version, about, long_about = None)]
pub struct Cli {
    /// The type of the resource
    #[arg(value_name = "TYPE", value_parser = NonEmptyStringValueParser::new())]
    pub resource_type: Option<String>,

    /// The name of the resource
    #[arg(value_name = "NAME", value_parser = NonEmptyStringValueParser::new())]
    pub resource_name: Option<String>,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Environment variable holding the prefix list (overrides config)
    #[arg(long, value_name = "VAR", value_parser = NonEmptyStringValueParser::new())]
    pub env_var: Option<String>,

    /// Index subfolder below each prefix (overrides config)
    #[arg(long, value_name = "DIR")]
    pub subfolder: Option<PathBuf>,

    /// Output format (overrides config)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Logging output: 0/off, 1/stdout, 2/stderr (default), or filename
    #[arg(short, long, default_value = "2")]
    pub log: String,

    /// Print a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,

    /// Print completion candidates starting with WORD
    ///
    /// Completes resource types, or resource names when TYPE is given.
    #[arg(long, hide = true, value_name = "WORD")]
    pub complete: Option<String>,
}

impl Cli {
    /// The query selected by the positional arguments.
    pub fn query(&self) -> Query {
        match (&self.resource_type, &self.resource_name) {
            (None, _) => Query::Types,
            (Some(resource_type), None) => Query::Resources {
                resource_type: resource_type.clone(),
            },
            (Some(resource_type), Some(resource_name)) => Query::Resource {
                resource_type: resource_type.clone(),
                resource_name: resource_name.clone(),
            },
        }
    }

    /// Config file locations, with `--config` taking the explicit slot.
    pub fn config_paths(&self) -> ConfigPaths {
        ConfigPaths::discover().with_explicit_file(self.config.clone())
    }

    /// Apply command-line overrides on top of the loaded configuration.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(env_var) = &self.env_var {
            config.index.env_var = env_var.clone();
        }
        if let Some(subfolder) = &self.subfolder {
            config.index.subfolder = subfolder.clone();
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
    }
}

/// Run the CLI, writing results to `out`.
pub fn run(cli: &Cli, out: &mut dyn Write) -> Result<()> {
    if let Some(shell) = cli.completions {
        complete::write_completion_script(shell, out);
        return Ok(());
    }

    let mut loader = ConfigLoader::load_with_paths(cli.config_paths())?;
    for (tier, path) in loader.sources() {
        debug!(%tier, path = %path.display(), "Using config file");
    }
    cli.apply_overrides(loader.config_mut());
    let config = loader.into_config();
    let index = ResourceIndex::new(config.index);

    if let Some(word) = &cli.complete {
        for candidate in complete::candidates(&index, cli.resource_type.as_deref(), word) {
            writeln!(out, "{candidate}")?;
        }
        return Ok(());
    }

    let rendered = query::execute(&index, &cli.query(), config.output.format)?;
    out.write_all(rendered.as_bytes())?;
    Ok(())
}
