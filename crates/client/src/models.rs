//! Response models for the Grafana dashboard API.

use serde::Deserialize;

/// The fields of a successful publish response this tool relies on.
///
/// Grafana returns more (id, uid, version, status); only `slug` and
/// `url` are required here, for the operator-facing success message.
#[derive(Debug, Clone, Deserialize)]
pub struct PublishReceipt {
    pub slug: String,
    pub url: String,
}
