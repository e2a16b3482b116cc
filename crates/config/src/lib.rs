//! Configuration management for dashforge.
//!
//! This crate provides the types a dashboard spec file deserializes into,
//! the loader that reads such a file from disk, and the settings required
//! to publish a generated dashboard to a Grafana instance.

pub mod constants;
mod error;
mod loader;
mod publish;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_dotenv, load_spec_file};
pub use publish::PublishSettings;
pub use types::{
    DashboardMeta, GridPosSpec, PanelOptions, PanelSpec, SpecFile, TargetSpec, TransformSpec,
    VariableSpec,
};
