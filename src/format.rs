//! Output formatting for query results.

use crate::error::{Error, ErrorKind};
use crate::index::ResourceMap;
use crate::resources::Resource;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use std::collections::BTreeSet;

/// Output format for query results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Plain lines, stable for scripts
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Resource types, one per line, sorted.
pub fn format_types(types: &BTreeSet<String>, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => types.iter().map(|t| format!("{t}\n")).collect(),
        OutputFormat::Json => to_json(&json!(types)),
    }
}

/// `name<TAB>prefix` per resource, sorted by name.
pub fn format_resources(resources: &ResourceMap, format: OutputFormat) -> String {
    let mut sorted = resources.clone();
    sorted.sort_by_name();

    match format {
        OutputFormat::Text => sorted
            .iter()
            .map(|(name, prefix)| format!("{}\t{}\n", name, prefix.display()))
            .collect(),
        OutputFormat::Json => {
            let map: Map<String, Value> = sorted
                .iter()
                .map(|(name, prefix)| {
                    (
                        name.to_string(),
                        Value::String(prefix.to_string_lossy().into_owned()),
                    )
                })
                .collect();
            to_json(&Value::Object(map))
        }
    }
}

/// Owning prefix, then the content between `<<<` and `>>>` markers when
/// the content is not empty.
pub fn format_resource(resource: &Resource, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut out = format!("{}\n", resource.prefix.display());
            if !resource.content.is_empty() {
                out.push_str("<<<\n");
                out.push_str(&resource.content);
                out.push_str("\n>>>\n");
            }
            out
        }
        OutputFormat::Json => to_json(&json!({
            "prefix": resource.prefix.to_string_lossy(),
            "content": resource.content,
        })),
    }
}

/// Single-line rendering of a failure.
///
/// Library errors carry their [`ErrorKind`] code in JSON output; anything
/// else (bad config files, I/O on stdout) has a null code.
pub fn format_error(err: &anyhow::Error, format: OutputFormat) -> String {
    let code: Option<ErrorKind> = err.downcast_ref::<Error>().map(Error::kind);
    let message = format!("{err:#}").replace('\n', " ");
    match format {
        OutputFormat::Text => format!("{message}\n"),
        OutputFormat::Json => {
            let value = json!({ "code": code, "message": message });
            format!("{value}\n")
        }
    }
}

fn to_json(value: &Value) -> String {
    let mut out = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample_resources() -> ResourceMap {
        [("foo", "/opt/overlay"), ("bar", "/opt/underlay")]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_types_text_sorted_lines() {
        let types: BTreeSet<String> = ["packages", "messages"].iter().map(|s| s.to_string()).collect();
        assert_eq!(format_types(&types, OutputFormat::Text), "messages\npackages\n");
        assert_eq!(format_types(&BTreeSet::new(), OutputFormat::Text), "");
    }

    #[test]
    fn test_resources_text_sorted_by_name() {
        assert_eq!(
            format_resources(&sample_resources(), OutputFormat::Text),
            "bar\t/opt/underlay\nfoo\t/opt/overlay\n"
        );
    }

    #[test]
    fn test_resources_json() {
        let rendered = format_resources(&sample_resources(), OutputFormat::Json);
        let value: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value, json!({"foo": "/opt/overlay", "bar": "/opt/underlay"}));
    }

    #[test]
    fn test_resource_text_with_content() {
        let resource = Resource {
            content: "foo1".to_string(),
            prefix: PathBuf::from("/opt/prefix1"),
        };
        assert_eq!(
            format_resource(&resource, OutputFormat::Text),
            "/opt/prefix1\n<<<\nfoo1\n>>>\n"
        );
    }

    #[test]
    fn test_resource_text_without_content() {
        let resource = Resource {
            content: String::new(),
            prefix: PathBuf::from("/opt/prefix1"),
        };
        assert_eq!(format_resource(&resource, OutputFormat::Text), "/opt/prefix1\n");
    }

    #[test]
    fn test_resource_json() {
        let resource = Resource {
            content: "a\nb".to_string(),
            prefix: PathBuf::from("/opt/p"),
        };
        let value: Value = serde_json::from_str(&format_resource(&resource, OutputFormat::Json)).unwrap();
        assert_eq!(value, json!({"prefix": "/opt/p", "content": "a\nb"}));
    }

    #[test]
    fn test_error_rendering() {
        let err = anyhow::Error::new(Error::not_found("resource_type4", "bar"));
        assert_eq!(
            format_error(&err, OutputFormat::Text),
            "could not find resource 'bar' of type 'resource_type4'\n"
        );

        let value: Value = serde_json::from_str(&format_error(&err, OutputFormat::Json)).unwrap();
        assert_eq!(value["code"], json!("RESOURCE_NOT_FOUND"));

        let other = anyhow::anyhow!("boom");
        let value: Value = serde_json::from_str(&format_error(&other, OutputFormat::Json)).unwrap();
        assert_eq!(value["code"], Value::Null);
    }
}
