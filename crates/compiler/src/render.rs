//! Output document framing and deterministic serialization.
//!
//! Responsibilities:
//! - Wrap a dashboard object in the `{dashboard, overwrite}` envelope the
//!   Grafana import format expects.
//! - Render JSON deterministically for reproducible diffs: sorted keys,
//!   2-space indentation, trailing newline.
//!
//! Invariants:
//! - serde_json's default map is a BTreeMap, so every object we build in
//!   this crate already has sorted keys; rendering adds no ordering of
//!   its own. Re-rendering an unchanged spec is byte-identical.

use serde_json::{Value, json};

/// Wrap a dashboard object in the output envelope.
///
/// `overwrite` is always true: a publish replaces any existing dashboard
/// with the same identity, which is what makes it atomic per call.
pub fn wrap_document(dashboard: Value) -> Value {
    json!({
        "dashboard": dashboard,
        "overwrite": true,
    })
}

/// Render a document as pretty-printed JSON with a trailing newline.
pub fn render_json(document: &Value) -> serde_json::Result<String> {
    let mut rendered = serde_json::to_string_pretty(document)?;
    rendered.push('\n');
    Ok(rendered)
}
