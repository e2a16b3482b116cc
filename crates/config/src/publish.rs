//! Publish settings for the Grafana API.
//!
//! Responsibilities:
//! - Carry the base URL, API key, and request timeout needed to publish.
//! - Validate that URL and key are supplied together.
//!
//! Does NOT handle:
//! - The HTTP call itself (client crate).
//! - Reading process-wide state implicitly; callers pass values in, which
//!   keeps the client crate free of hidden dependencies and testable.
//!
//! Invariants:
//! - The API key is a `SecretString` and never appears in Debug output.
//! - Trailing slashes on the base URL are trimmed once, here, so every
//!   consumer sees the same canonical form.

use std::time::Duration;

use secrecy::SecretString;

use crate::constants::DEFAULT_PUBLISH_TIMEOUT_SECS;
use crate::error::ConfigError;

/// Settings required to publish a dashboard document.
#[derive(Debug, Clone)]
pub struct PublishSettings {
    /// Grafana base URL, without a trailing slash.
    pub base_url: String,
    /// Grafana API key with Editor rights.
    pub api_key: SecretString,
    /// Hard timeout for the publish request.
    pub timeout: Duration,
}

impl PublishSettings {
    /// Create settings from explicit values, canonicalizing the URL.
    pub fn new(base_url: String, api_key: SecretString, timeout: Duration) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            timeout,
        }
    }

    /// Build settings from optional URL and key, requiring both.
    ///
    /// Blank or whitespace-only values count as missing; an env var set
    /// to the empty string must not pass as a credential. Returns
    /// `ConfigError::IncompletePublishSettings` if either is missing.
    pub fn from_options(
        base_url: Option<String>,
        api_key: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, ConfigError> {
        let normalize = |value: Option<String>| {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        match (normalize(base_url), normalize(api_key)) {
            (Some(url), Some(key)) => Ok(Self::new(
                url,
                SecretString::new(key.into()),
                timeout.unwrap_or(Duration::from_secs(DEFAULT_PUBLISH_TIMEOUT_SECS)),
            )),
            _ => Err(ConfigError::IncompletePublishSettings),
        }
    }
}
