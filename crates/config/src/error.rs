//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for spec-file loading failures.
//!
//! Does NOT handle:
//! - Schema-level validation of the parsed spec (see the compiler crate).
//!
//! Invariants:
//! - All variants carry the offending path so the operator can find the file.
//! - Parse errors preserve the serde_yaml source, which includes line/column.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a dashboard spec file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The spec file could not be read from disk.
    #[error("Failed to read spec file at {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The spec file is not valid YAML or does not match the schema.
    #[error("Failed to parse spec file at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Publish was requested without a complete set of credentials.
    #[error(
        "Publishing requires both a Grafana URL and an API key. \
         Set GRAFANA_URL and GRAFANA_API_KEY or pass --grafana-url and --api-key."
    )]
    IncompletePublishSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_read_error_names_path() {
        let err = ConfigError::FileRead {
            path: PathBuf::from("/tmp/missing.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("/tmp/missing.yaml"));
    }

    #[test]
    fn test_parse_error_names_path() {
        let source = serde_yaml::from_str::<serde_yaml::Value>("{unclosed").unwrap_err();
        let err = ConfigError::Parse {
            path: PathBuf::from("dashboard.yaml"),
            source,
        };
        assert!(err.to_string().contains("dashboard.yaml"));
    }
}
