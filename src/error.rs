//! Structured error types for resource index lookups.

use serde::Serialize;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error codes for programmatic error handling.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    // Environment errors
    Configuration,

    // Not found errors
    ResourceNotFound,
    PackageNotFound,

    // I/O errors
    ResourceRead,
    ResourceList,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Configuration => "CONFIGURATION",
            ErrorKind::ResourceNotFound => "RESOURCE_NOT_FOUND",
            ErrorKind::PackageNotFound => "PACKAGE_NOT_FOUND",
            ErrorKind::ResourceRead => "RESOURCE_READ",
            ErrorKind::ResourceList => "RESOURCE_LIST",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while resolving resources.
///
/// Empty resource types or names are caller bugs and panic instead of
/// producing one of these variants.
#[derive(Debug, Error)]
pub enum Error {
    #[error("environment variable '{var}' is not set or empty")]
    Configuration { var: String },

    #[error("could not find resource '{resource_name}' of type '{resource_type}'")]
    ResourceNotFound {
        resource_type: String,
        resource_name: String,
    },

    #[error(
        "could not read resource '{resource_name}' of type '{resource_type}' at '{}'",
        .path.display()
    )]
    ResourceRead {
        resource_type: String,
        resource_name: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not list resource index directory '{}'", .path.display())]
    ResourceList {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("package '{package}' not found, searching: [{}]", display_paths(.search_paths))]
    PackageNotFound {
        package: String,
        search_paths: Vec<PathBuf>,
    },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Configuration { .. } => ErrorKind::Configuration,
            Error::ResourceNotFound { .. } => ErrorKind::ResourceNotFound,
            Error::ResourceRead { .. } => ErrorKind::ResourceRead,
            Error::ResourceList { .. } => ErrorKind::ResourceList,
            Error::PackageNotFound { .. } => ErrorKind::PackageNotFound,
        }
    }

    /// True for the expected "nothing matched" outcomes.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::ResourceNotFound | ErrorKind::PackageNotFound
        )
    }

    // Convenience constructors

    pub fn configuration(var: &str) -> Self {
        Error::Configuration {
            var: var.to_string(),
        }
    }

    pub fn not_found(resource_type: &str, resource_name: &str) -> Self {
        Error::ResourceNotFound {
            resource_type: resource_type.to_string(),
            resource_name: resource_name.to_string(),
        }
    }

    pub fn read(resource_type: &str, resource_name: &str, path: &Path, source: io::Error) -> Self {
        Error::ResourceRead {
            resource_type: resource_type.to_string(),
            resource_name: resource_name.to_string(),
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn list(path: &Path, source: io::Error) -> Self {
        Error::ResourceList {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn package_not_found(package: &str, search_paths: Vec<PathBuf>) -> Self {
        Error::PackageNotFound {
            package: package.to_string(),
            search_paths,
        }
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| format!("'{}'", p.display()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for resource index operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(
            Error::configuration("AMENT_PREFIX_PATH").kind(),
            ErrorKind::Configuration
        );
        assert_eq!(
            Error::not_found("packages", "foo").kind(),
            ErrorKind::ResourceNotFound
        );
        assert_eq!(
            Error::package_not_found("foo", vec![]).kind(),
            ErrorKind::PackageNotFound
        );
        let read = Error::read(
            "packages",
            "foo",
            Path::new("/opt/ws/foo"),
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert_eq!(read.kind(), ErrorKind::ResourceRead);
        let list = Error::list(
            Path::new("/opt/ws/share"),
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert_eq!(list.kind(), ErrorKind::ResourceList);
        assert!(!list.is_not_found());
    }

    #[test]
    fn test_not_found_classification() {
        assert!(Error::not_found("t", "n").is_not_found());
        assert!(Error::package_not_found("p", vec![]).is_not_found());
        assert!(!Error::configuration("X").is_not_found());
    }

    #[test]
    fn test_messages_are_single_line() {
        let err = Error::package_not_found(
            "demo",
            vec![PathBuf::from("/opt/a"), PathBuf::from("/opt/b")],
        );
        let msg = err.to_string();
        assert_eq!(
            msg,
            "package 'demo' not found, searching: ['/opt/a', '/opt/b']"
        );
        assert!(!msg.contains('\n'));

        let err = Error::not_found("resource_type4", "bar");
        assert_eq!(
            err.to_string(),
            "could not find resource 'bar' of type 'resource_type4'"
        );
    }

    #[test]
    fn test_read_error_keeps_source() {
        let err = Error::read(
            "t",
            "n",
            Path::new("/p/t/n"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let source = err.source().expect("read error should carry its cause");
        assert_eq!(source.to_string(), "denied");
        assert!(err.to_string().contains("/p/t/n"));
    }

    #[test]
    fn test_kind_serializes_as_code() {
        let value = serde_json::to_value(ErrorKind::ResourceNotFound).unwrap();
        assert_eq!(value, serde_json::json!("RESOURCE_NOT_FOUND"));
        assert_eq!(ErrorKind::ResourceRead.to_string(), "RESOURCE_READ");
    }
}
