//! Panel builder.
//!
//! Responsibilities:
//! - Map one [`PanelSpec`] into a panel JSON fragment, dispatching on the
//!   panel kind to pick the field layout and default styling.
//! - Validate the required `gridPos` block and apply its sub-field
//!   defaults (h=8, w=12, x=0, y=0).
//! - Resolve targets (datasource fallback, refId/legend defaults), the
//!   declared unit, and any transformations.
//!
//! Does NOT handle:
//! - Panel id assignment (assembler, after all panels exist).
//!
//! Invariants:
//! - Pure function of its input; no side effects.
//! - The supported kind set is closed and extended by adding enum
//!   variants, not by generic configuration.

use serde_json::{Value, json};
use tracing::trace;

use dashforge_config::constants::{DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH};
use dashforge_config::{PanelSpec, TargetSpec};

use crate::error::{Result, SchemaError};
use crate::transform::Transformation;

/// Supported panel kinds.
///
/// Each kind has a distinct JSON layout with its own default styling
/// fields, sharing title/datasource/targets/gridPos/unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    Timeseries,
    Stat,
    Gauge,
}

impl PanelKind {
    /// Parse a spec-file `type` value, case-insensitively.
    ///
    /// An absent value defaults to timeseries; an unrecognized one is a
    /// schema error naming the offending string.
    pub fn parse(kind: Option<&str>) -> Result<Self> {
        let Some(kind) = kind else {
            return Ok(Self::Timeseries);
        };
        match kind.to_ascii_lowercase().as_str() {
            "timeseries" => Ok(Self::Timeseries),
            "stat" => Ok(Self::Stat),
            "gauge" => Ok(Self::Gauge),
            _ => Err(SchemaError::UnsupportedPanelKind {
                kind: kind.to_string(),
            }),
        }
    }

    /// The Grafana panel `type` string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Timeseries => "timeseries",
            Self::Stat => "stat",
            Self::Gauge => "gauge",
        }
    }
}

/// Resolve a spec-file unit name to the Grafana unit code.
///
/// Unrecognized names resolve to "none" (no unit) rather than erroring,
/// so a typo degrades the display instead of failing the build.
pub fn resolve_unit(unit: Option<&str>) -> &'static str {
    match unit {
        Some("bytes") => "bytes",
        Some("seconds") => "s",
        Some("percent") => "percent",
        _ => "none",
    }
}

/// Build one target fragment, inheriting the panel datasource if the
/// target does not set its own.
fn build_target(target: &TargetSpec, panel_datasource: Option<&str>) -> Value {
    let datasource = target.datasource.as_deref().or(panel_datasource);
    json!({
        "expr": target.expr,
        "legendFormat": target.legend_format,
        "refId": target.ref_id,
        "datasource": datasource,
    })
}

/// Build a panel JSON fragment from its spec.
///
/// The panel id is NOT assigned here; the assembler adds ids after the
/// full panel list exists.
pub fn build_panel(spec: &PanelSpec) -> Result<Value> {
    let kind = PanelKind::parse(spec.kind.as_deref())?;

    let grid = spec
        .grid_pos
        .ok_or_else(|| SchemaError::MissingGridPosition {
            panel: spec.title.clone(),
        })?;
    let grid_pos = json!({
        "h": grid.h.unwrap_or(DEFAULT_GRID_HEIGHT),
        "w": grid.w.unwrap_or(DEFAULT_GRID_WIDTH),
        "x": grid.x.unwrap_or(0),
        "y": grid.y.unwrap_or(0),
    });

    let targets: Vec<Value> = spec
        .targets
        .iter()
        .map(|t| build_target(t, spec.datasource.as_deref()))
        .collect();

    let unit = resolve_unit(spec.options.unit.as_deref());

    let transformations = spec
        .transformations
        .iter()
        .map(|t| Transformation::from_spec(t).map(|t| t.to_json_data()))
        .collect::<Result<Vec<Value>>>()?;

    trace!(title = %spec.title, kind = kind.as_str(), "Building panel");

    let mut panel = match kind {
        PanelKind::Timeseries => json!({
            "fieldConfig": {
                "defaults": {
                    "color": { "mode": "palette-classic" },
                    "custom": {
                        "fillOpacity": 0,
                        "lineWidth": 1,
                        "spanNulls": false,
                    },
                    "unit": unit,
                },
                "overrides": [],
            },
            "options": {
                "legend": { "displayMode": "list", "placement": "bottom" },
                "tooltip": { "mode": "single" },
            },
        }),
        PanelKind::Stat => json!({
            "fieldConfig": {
                "defaults": {
                    "color": { "mode": "thresholds" },
                    "unit": unit,
                },
                "overrides": [],
            },
            "options": {
                "colorMode": "value",
                "graphMode": "area",
                "justifyMode": "auto",
                "orientation": "auto",
                "reduceOptions": {
                    "calcs": ["lastNotNull"],
                    "fields": "",
                    "values": false,
                },
                "textMode": "auto",
            },
        }),
        PanelKind::Gauge => json!({
            "fieldConfig": {
                "defaults": {
                    "max": 100,
                    "min": 0,
                    "thresholds": {
                        "mode": "absolute",
                        "steps": [
                            { "color": "green", "value": null },
                            { "color": "red", "value": 80 },
                        ],
                    },
                    "unit": unit,
                },
                "overrides": [],
            },
            "options": {
                "orientation": "auto",
                "reduceOptions": {
                    "calcs": ["lastNotNull"],
                    "fields": "",
                    "values": false,
                },
                "showThresholdLabels": false,
                "showThresholdMarkers": true,
            },
        }),
    };

    // Shared fields, identical across kinds.
    if let Value::Object(obj) = &mut panel {
        obj.insert("title".to_string(), json!(spec.title));
        obj.insert("type".to_string(), json!(kind.as_str()));
        obj.insert("datasource".to_string(), json!(spec.datasource));
        obj.insert("gridPos".to_string(), grid_pos);
        obj.insert("targets".to_string(), Value::Array(targets));
        if !transformations.is_empty() {
            obj.insert("transformations".to_string(), Value::Array(transformations));
        }
    }

    Ok(panel)
}
