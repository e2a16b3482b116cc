//! Dashboard publish endpoint.
//!
//! Responsibilities:
//! - Issue the single authenticated POST to `/api/dashboards/db`.
//! - Turn non-2xx responses into [`ClientError::ApiError`] carrying as
//!   much server-provided detail as the body allows.
//!
//! Does NOT handle:
//! - Building the dashboard document (compiler crate).
//! - Retrying: the call is never retried automatically; the operator
//!   decides whether to re-run.
//!
//! Invariants:
//! - The request timeout comes from [`PublishSettings`], never from
//!   process-wide state.
//! - The API key is sent as a bearer token and never logged.

use secrecy::ExposeSecret;
use serde_json::{Value, json};
use tracing::{debug, info};

use dashforge_config::PublishSettings;

use crate::error::{ClientError, Result};
use crate::models::PublishReceipt;

/// Grafana error body, when it is JSON.
#[derive(serde::Deserialize)]
struct GrafanaErrorBody {
    message: String,
}

/// Build an HTTP client honoring the publish timeout.
pub fn build_http_client(settings: &PublishSettings) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(settings.timeout)
        .build()
        .map_err(ClientError::from)
}

/// Publish a dashboard document to Grafana.
///
/// `dashboard` is the dashboard object itself (the value under the
/// output document's `dashboard` key). The payload targets folderId 0
/// (the "General" folder) and always overwrites, which makes a publish
/// atomic per call from this tool's perspective.
pub async fn publish_dashboard(
    http: &reqwest::Client,
    settings: &PublishSettings,
    dashboard: &Value,
) -> Result<PublishReceipt> {
    let url = format!("{}/api/dashboards/db", settings.base_url);

    let payload = json!({
        "dashboard": dashboard,
        "folderId": 0,
        "overwrite": true,
    });

    info!(url = %url, "Publishing dashboard");

    let response = http
        .post(&url)
        .header(
            "Authorization",
            format!("Bearer {}", settings.api_key.expose_secret()),
        )
        .json(&payload)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Could not read error response body".to_string());

        // Grafana error bodies are usually `{"message": "..."}`; fall back
        // to the raw text when they are not.
        let message = match serde_json::from_str::<GrafanaErrorBody>(&body) {
            Ok(parsed) => parsed.message,
            Err(_) => body,
        };

        return Err(ClientError::ApiError {
            status: status.as_u16(),
            url,
            message,
        });
    }

    let receipt: PublishReceipt = response
        .json()
        .await
        .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;

    debug!(slug = %receipt.slug, "Dashboard published");

    Ok(receipt)
}
