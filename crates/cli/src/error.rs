//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish
//!   configuration, schema, and publish failures.
//! - Map the workspace error types to exit codes via anyhow downcasting.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit code 0 always means a complete document was produced (and, with
//!   --push, accepted by Grafana). Any non-zero code means no output was
//!   applied anywhere.

use dashforge_client::ClientError;
use dashforge_compiler::SchemaError;
use dashforge_config::ConfigError;

/// Structured exit codes for dashforge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - document generated (and published, if requested).
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Configuration error - spec file missing/unparseable, or publish
    /// credentials incomplete. Fix the input or environment.
    ConfigError = 2,

    /// Schema error - the spec parsed but violates the dashboard schema
    /// (missing gridPos, unsupported panel kind, unknown transformation).
    SchemaError = 3,

    /// Publish error - the Grafana API call failed. The document itself
    /// was valid; check connectivity and credentials.
    PublishError = 4,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns `ExitCode::GeneralError` if no workspace error type is
    /// found in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if cause.downcast_ref::<ConfigError>().is_some() {
                return ExitCode::ConfigError;
            }
            if cause.downcast_ref::<SchemaError>().is_some() {
                return ExitCode::SchemaError;
            }
            if cause.downcast_ref::<ClientError>().is_some() {
                return ExitCode::PublishError;
            }
        }
        ExitCode::GeneralError
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::ConfigError.as_i32(), 2);
        assert_eq!(ExitCode::SchemaError.as_i32(), 3);
        assert_eq!(ExitCode::PublishError.as_i32(), 4);
    }

    #[test]
    fn test_config_error_maps_to_config_exit_code() {
        let err = anyhow::Error::new(ConfigError::FileRead {
            path: PathBuf::from("dashboard.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        });
        assert_eq!(err.exit_code(), ExitCode::ConfigError);
    }

    #[test]
    fn test_schema_error_maps_to_schema_exit_code() {
        let err = anyhow::Error::new(SchemaError::MissingGridPosition {
            panel: "CPU".to_string(),
        });
        assert_eq!(err.exit_code(), ExitCode::SchemaError);
    }

    #[test]
    fn test_client_error_maps_to_publish_exit_code() {
        let err = anyhow::Error::new(ClientError::ApiError {
            status: 500,
            url: "http://localhost:3000/api/dashboards/db".to_string(),
            message: "boom".to_string(),
        });
        assert_eq!(err.exit_code(), ExitCode::PublishError);
    }

    #[test]
    fn test_wrapped_error_found_in_chain() {
        let inner = anyhow::Error::new(SchemaError::UnsupportedPanelKind {
            kind: "piechart".to_string(),
        });
        let err = inner.context("while building dashboard");
        assert_eq!(err.exit_code(), ExitCode::SchemaError);
    }

    #[test]
    fn test_unknown_error_is_general() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
    }
}
