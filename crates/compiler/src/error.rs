//! Error types for the translation layer.
//!
//! Responsibilities:
//! - Define the schema-level failures a spec tree can produce.
//!
//! Does NOT handle:
//! - File or YAML errors (config crate) or HTTP errors (client crate).
//!
//! Invariants:
//! - Every variant names the offending panel, kind, or parameter so the
//!   operator can locate the problem without a stack trace.
//! - Translation is fail-fast: the first schema error aborts the run and
//!   no partial document is ever produced.

use thiserror::Error;

/// Result type alias for translation operations.
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Errors produced while translating a spec tree into a dashboard document.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// A panel is missing its required `gridPos` block.
    #[error("Panel '{panel}' has no 'gridPos' defined")]
    MissingGridPosition { panel: String },

    /// A panel declares a kind outside the supported set.
    #[error("Unsupported panel type '{kind}' (supported: timeseries, stat, gauge)")]
    UnsupportedPanelKind { kind: String },

    /// A transformation declares a kind outside the catalog.
    #[error("Unknown transformation kind '{kind}'")]
    UnknownTransformationKind { kind: String },

    /// A transformation omits a parameter its kind requires.
    #[error("Transformation '{kind}' is missing required parameter '{param}'")]
    MissingTransformParameter {
        kind: &'static str,
        param: &'static str,
    },
}
