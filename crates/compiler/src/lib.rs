//! Dashboard spec → Grafana JSON translation.
//!
//! This crate is the core of dashforge: it maps the parsed spec-file tree
//! (`dashforge-config` types) into the nested JSON object model the
//! Grafana dashboard API expects, including implicit defaults, the closed
//! catalog of panel and transformation kinds, and document-wide invariants
//! such as unique auto-assigned panel ids.
//!
//! Everything here is a pure, synchronous function of its input; I/O and
//! HTTP live in the cli and client crates.

mod dashboard;
mod error;
mod panel;
mod render;
mod transform;

pub use dashboard::build_dashboard;
pub use error::{Result, SchemaError};
pub use panel::{PanelKind, build_panel, resolve_unit};
pub use render::{render_json, wrap_document};
pub use transform::Transformation;
