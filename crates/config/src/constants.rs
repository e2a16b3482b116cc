//! Shared configuration constants.
//!
//! Responsibilities:
//! - Centralize default values used across the workspace.
//!
//! Invariants:
//! - Defaults here match the documented behavior of the spec-file format;
//!   changing one is a user-visible format change.

/// Hard timeout for the publish request, in seconds.
pub const DEFAULT_PUBLISH_TIMEOUT_SECS: u64 = 10;

/// Default panel grid height when the `gridPos` block omits `h`.
pub const DEFAULT_GRID_HEIGHT: u32 = 8;

/// Default panel grid width when the `gridPos` block omits `w`.
pub const DEFAULT_GRID_WIDTH: u32 = 12;

/// Default dashboard title when the `dashboard` block omits one.
pub const DEFAULT_DASHBOARD_TITLE: &str = "Untitled Dashboard";

/// Default dashboard timezone.
pub const DEFAULT_TIMEZONE: &str = "browser";

/// Default query reference id for a panel target.
pub const DEFAULT_REF_ID: &str = "A";

/// Default template variable kind.
pub const DEFAULT_VARIABLE_KIND: &str = "query";

/// Environment variable holding the Grafana base URL.
pub const ENV_GRAFANA_URL: &str = "GRAFANA_URL";

/// Environment variable holding the Grafana API key.
pub const ENV_GRAFANA_API_KEY: &str = "GRAFANA_API_KEY";
