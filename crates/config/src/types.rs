//! Spec-file schema types.
//!
//! Responsibilities:
//! - Define the structures a dashboard spec file (YAML) deserializes into.
//! - Apply per-field defaults at deserialization time where the format
//!   defines one (titles, flags, reference ids).
//!
//! Does NOT handle:
//! - Schema validation that depends on more than one field (missing
//!   `gridPos`, unknown panel kinds, unknown transformation kinds); the
//!   compiler crate reports those with proper context.
//! - Translation into the Grafana JSON object model (compiler crate).
//!
//! Invariants:
//! - Unknown keys anywhere in the file are ignored, matching the original
//!   format. A typo in an option name silently falls back to the default.
//! - All types are plain value objects; nothing here borrows or shares.

use serde::Deserialize;

use crate::constants::{DEFAULT_DASHBOARD_TITLE, DEFAULT_REF_ID, DEFAULT_TIMEZONE};

/// A fully parsed dashboard spec file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpecFile {
    /// Dashboard-level metadata.
    #[serde(default)]
    pub dashboard: DashboardMeta,
    /// Template variables, in declaration order.
    #[serde(default)]
    pub templating: Vec<VariableSpec>,
    /// Panels, in declaration order.
    #[serde(default)]
    pub panels: Vec<PanelSpec>,
}

/// Dashboard-level metadata from the `dashboard` block.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardMeta {
    #[serde(default = "default_dashboard_title")]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Tag order is irrelevant to Grafana but preserved for output determinism.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl Default for DashboardMeta {
    fn default() -> Self {
        Self {
            title: default_dashboard_title(),
            description: String::new(),
            tags: Vec::new(),
            timezone: default_timezone(),
        }
    }
}

fn default_dashboard_title() -> String {
    DEFAULT_DASHBOARD_TITLE.to_string()
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}

/// One template variable from the `templating` list.
///
/// The variable is referenced elsewhere in query strings as `$name`;
/// whether any panel actually does so is the author's responsibility.
#[derive(Debug, Clone, Deserialize)]
pub struct VariableSpec {
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub datasource: Option<String>,
    #[serde(default)]
    pub query: Option<String>,
    /// Variable kind; "query" when absent.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub multi: bool,
    #[serde(rename = "includeAll", default)]
    pub include_all: bool,
}

/// One panel from the `panels` list.
#[derive(Debug, Clone, Deserialize)]
pub struct PanelSpec {
    #[serde(default = "default_panel_title")]
    pub title: String,
    /// Panel kind; the builder defaults this to "timeseries".
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Datasource inherited by targets that do not set their own.
    #[serde(default)]
    pub datasource: Option<String>,
    /// Layout block. Its absence is a hard configuration error, reported
    /// by the builder with the panel title; the sub-fields have defaults.
    #[serde(rename = "gridPos", default)]
    pub grid_pos: Option<GridPosSpec>,
    #[serde(default)]
    pub options: PanelOptions,
    #[serde(default)]
    pub targets: Vec<TargetSpec>,
    #[serde(default)]
    pub transformations: Vec<TransformSpec>,
}

fn default_panel_title() -> String {
    "N/A".to_string()
}

/// Panel layout in grid cells, x/y origin top-left.
///
/// Sub-field defaults (h=8, w=12, x=0, y=0) are applied by the builder so
/// that a present-but-sparse block still produces a full position.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct GridPosSpec {
    #[serde(default)]
    pub h: Option<u32>,
    #[serde(default)]
    pub w: Option<u32>,
    #[serde(default)]
    pub x: Option<u32>,
    #[serde(default)]
    pub y: Option<u32>,
}

/// Recognized panel display options.
///
/// Only `unit` is consumed today. Unrecognized keys in the `options`
/// block are dropped by serde, matching the original format.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PanelOptions {
    #[serde(default)]
    pub unit: Option<String>,
}

/// One data query within a panel.
#[derive(Debug, Clone, Deserialize)]
pub struct TargetSpec {
    /// Query expression, opaque to this tool.
    #[serde(default)]
    pub expr: String,
    #[serde(rename = "legendFormat", default)]
    pub legend_format: String,
    #[serde(rename = "refId", default = "default_ref_id")]
    pub ref_id: String,
    /// Falls back to the owning panel's datasource when absent.
    #[serde(default)]
    pub datasource: Option<String>,
}

fn default_ref_id() -> String {
    DEFAULT_REF_ID.to_string()
}

/// One post-query transformation, as written in the spec file.
///
/// This is a loose parameter bag: `kind` selects the transformation and
/// the remaining fields cover the union of all per-kind parameters. The
/// compiler parses it into a closed enum and rejects unknown kinds and
/// missing required parameters there, where it can name the offender.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformSpec {
    pub kind: String,
    pub include: Option<Vec<String>>,
    pub field: Option<String>,
    pub operator: Option<String>,
    pub value: Option<serde_json::Value>,
    pub ref_ids: Option<Vec<String>>,
    pub mode: Option<String>,
    pub reducer: Option<String>,
    pub expression: Option<String>,
    pub fields: Option<Vec<serde_json::Value>>,
    pub aggregations: Option<Vec<serde_json::Value>>,
    pub rename_by_name: Option<serde_json::Map<String, serde_json::Value>>,
    pub sort_by: Option<serde_json::Value>,
    pub labels: Option<Vec<String>>,
    pub value_label: Option<String>,
    pub target_type: Option<String>,
    pub key: Option<String>,
    pub reverse: Option<bool>,
    pub limit: Option<i64>,
    pub source: Option<String>,
    pub regex: Option<String>,
    pub rename: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_spec_gets_defaults() {
        let spec: SpecFile = serde_yaml::from_str("{}").unwrap();
        assert_eq!(spec.dashboard.title, "Untitled Dashboard");
        assert_eq!(spec.dashboard.timezone, "browser");
        assert!(spec.dashboard.tags.is_empty());
        assert!(spec.templating.is_empty());
        assert!(spec.panels.is_empty());
    }

    #[test]
    fn test_panel_defaults() {
        let yaml = r#"
panels:
  - gridPos: { h: 4 }
    targets:
      - expr: "up"
"#;
        let spec: SpecFile = serde_yaml::from_str(yaml).unwrap();
        let panel = &spec.panels[0];
        assert_eq!(panel.title, "N/A");
        assert!(panel.kind.is_none());
        let grid = panel.grid_pos.unwrap();
        assert_eq!(grid.h, Some(4));
        assert_eq!(grid.w, None);
        let target = &panel.targets[0];
        assert_eq!(target.ref_id, "A");
        assert_eq!(target.legend_format, "");
        assert!(target.datasource.is_none());
    }

    #[test]
    fn test_variable_defaults() {
        let yaml = r#"
templating:
  - name: instance
    query: "label_values(up, instance)"
"#;
        let spec: SpecFile = serde_yaml::from_str(yaml).unwrap();
        let var = &spec.templating[0];
        assert_eq!(var.name, "instance");
        assert!(var.kind.is_none());
        assert!(!var.multi);
        assert!(!var.include_all);
    }

    #[test]
    fn test_unknown_option_keys_are_ignored() {
        let yaml = r#"
panels:
  - title: "CPU"
    gridPos: { h: 8, w: 12, x: 0, y: 0 }
    options:
      unit: percent
      lineWdith: 3
"#;
        let spec: SpecFile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(spec.panels[0].options.unit.as_deref(), Some("percent"));
    }

    #[test]
    fn test_transform_spec_camel_case_keys() {
        let yaml = r#"
kind: filterByQuery
refIds: [A, B]
"#;
        let transform: TransformSpec = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(transform.kind, "filterByQuery");
        assert_eq!(
            transform.ref_ids.as_deref(),
            Some(&["A".to_string(), "B".to_string()][..])
        );
    }

    #[test]
    fn test_tag_order_preserved() {
        let yaml = r#"
dashboard:
  tags: [zeta, alpha, mid]
"#;
        let spec: SpecFile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(spec.dashboard.tags, vec!["zeta", "alpha", "mid"]);
    }
}
