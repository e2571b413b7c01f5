//! Query execution for the positional CLI arguments.

use crate::error::Result;
use crate::format::{OutputFormat, format_resource, format_resources, format_types};
use crate::resources::ResourceIndex;

/// What the positional arguments ask for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// All resource types
    Types,
    /// All resources of one type
    Resources { resource_type: String },
    /// One resource
    Resource {
        resource_type: String,
        resource_name: String,
    },
}

/// Resolve `query` against `index` and render the answer.
pub fn execute(index: &ResourceIndex, query: &Query, format: OutputFormat) -> Result<String> {
    match query {
        Query::Types => {
            let types = index.get_resource_types()?;
            Ok(format_types(&types, format))
        }
        Query::Resources { resource_type } => {
            let resources = index.get_resources(resource_type)?;
            Ok(format_resources(&resources, format))
        }
        Query::Resource {
            resource_type,
            resource_name,
        } => {
            let resource = index.get_resource(resource_type, resource_name)?;
            Ok(format_resource(&resource, format))
        }
    }
}
