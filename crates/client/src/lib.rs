//! Grafana dashboard API client.
//!
//! This crate provides the single outbound HTTP operation dashforge
//! needs: publishing a generated dashboard document to a Grafana
//! instance with API-token authentication. Publishing is one
//! fire-and-wait call with a hard timeout; it is never retried and,
//! thanks to Grafana's overwrite semantics, atomic per call.

mod error;
mod models;
mod publish;

pub use error::{ClientError, Result};
pub use models::PublishReceipt;
pub use publish::{build_http_client, publish_dashboard};
