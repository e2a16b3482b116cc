//! Dashboard assembler.
//!
//! Responsibilities:
//! - Compose template variables, panels, and dashboard metadata into the
//!   final document object.
//! - Assign panel ids after the full panel list exists.
//!
//! Does NOT handle:
//! - Per-panel layout (see `panel.rs`) or serialization (see `render.rs`).
//!
//! Invariants:
//! - Panel builds are fail-fast: the first schema error aborts assembly
//!   and no partial document is produced.
//! - Id assignment is a separate second pass over the finished panel
//!   list, so ids are a pure function of final panel count and order.

use serde_json::{Value, json};
use tracing::debug;

use dashforge_config::constants::DEFAULT_VARIABLE_KIND;
use dashforge_config::{SpecFile, VariableSpec};

use crate::error::Result;
use crate::panel::build_panel;

/// First panel id assigned by the assembler.
const PANEL_ID_BASE: u64 = 1;

/// Grafana dashboard schema version emitted in the document framing.
const SCHEMA_VERSION: u64 = 36;

/// Build one template variable fragment with its defaults applied.
fn build_variable(var: &VariableSpec) -> Value {
    json!({
        "name": var.name,
        "label": var.label,
        "datasource": var.datasource,
        "query": var.query,
        "type": var.kind.as_deref().unwrap_or(DEFAULT_VARIABLE_KIND),
        "multi": var.multi,
        "includeAll": var.include_all,
    })
}

/// Build the full dashboard document object from a parsed spec file.
///
/// The result is everything under the output's `dashboard` key; callers
/// wrap it via [`crate::render::wrap_document`].
pub fn build_dashboard(spec: &SpecFile) -> Result<Value> {
    let templating: Vec<Value> = spec.templating.iter().map(build_variable).collect();

    let mut panels = spec
        .panels
        .iter()
        .map(build_panel)
        .collect::<Result<Vec<Value>>>()?;

    // Second pass: ids depend only on final order and count.
    for (index, panel) in panels.iter_mut().enumerate() {
        if let Some(obj) = panel.as_object_mut() {
            obj.insert("id".to_string(), json!(PANEL_ID_BASE + index as u64));
        }
    }

    debug!(
        title = %spec.dashboard.title,
        panels = panels.len(),
        variables = templating.len(),
        "Assembled dashboard"
    );

    Ok(json!({
        "title": spec.dashboard.title,
        "description": spec.dashboard.description,
        "tags": spec.dashboard.tags,
        "timezone": spec.dashboard.timezone,
        "editable": true,
        "schemaVersion": SCHEMA_VERSION,
        "time": { "from": "now-6h", "to": "now" },
        "templating": { "list": templating },
        "panels": panels,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SchemaError;

    fn spec(yaml: &str) -> SpecFile {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_metadata_defaults() {
        let dashboard = build_dashboard(&spec("{}")).unwrap();
        assert_eq!(dashboard["title"], json!("Untitled Dashboard"));
        assert_eq!(dashboard["description"], json!(""));
        assert_eq!(dashboard["tags"], json!([]));
        assert_eq!(dashboard["timezone"], json!("browser"));
        assert_eq!(dashboard["panels"], json!([]));
        assert_eq!(dashboard["templating"]["list"], json!([]));
    }

    #[test]
    fn test_variable_defaults() {
        let dashboard = build_dashboard(&spec(
            r#"
templating:
  - name: instance
    query: "label_values(up, instance)"
"#,
        ))
        .unwrap();
        let var = &dashboard["templating"]["list"][0];
        assert_eq!(var["name"], json!("instance"));
        assert_eq!(var["type"], json!("query"));
        assert_eq!(var["multi"], json!(false));
        assert_eq!(var["includeAll"], json!(false));
        assert_eq!(var["label"], json!(null));
    }

    #[test]
    fn test_variable_order_preserved() {
        let dashboard = build_dashboard(&spec(
            r#"
templating:
  - name: zeta
  - name: alpha
"#,
        ))
        .unwrap();
        let list = dashboard["templating"]["list"].as_array().unwrap();
        assert_eq!(list[0]["name"], json!("zeta"));
        assert_eq!(list[1]["name"], json!("alpha"));
    }

    #[test]
    fn test_panel_ids_sequential_in_input_order() {
        let dashboard = build_dashboard(&spec(
            r#"
panels:
  - title: one
    gridPos: { h: 8 }
  - title: two
    type: stat
    gridPos: { h: 4 }
  - title: three
    type: gauge
    gridPos: { h: 4 }
"#,
        ))
        .unwrap();
        let panels = dashboard["panels"].as_array().unwrap();
        let ids: Vec<u64> = panels.iter().map(|p| p["id"].as_u64().unwrap()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(panels[0]["title"], json!("one"));
        assert_eq!(panels[2]["title"], json!("three"));
    }

    #[test]
    fn test_panel_failure_aborts_assembly() {
        let err = build_dashboard(&spec(
            r#"
panels:
  - title: good
    gridPos: { h: 8 }
  - title: bad
"#,
        ))
        .unwrap_err();
        assert!(matches!(
            err,
            SchemaError::MissingGridPosition { ref panel } if panel == "bad"
        ));
    }

    /// End-to-end example from the format documentation: one stat panel
    /// "Load" with an explicit grid position and a defaulted target.
    #[test]
    fn test_single_stat_panel_document() {
        let dashboard = build_dashboard(&spec(
            r#"
panels:
  - title: Load
    type: stat
    gridPos: { h: 4, w: 6, x: 0, y: 8 }
    targets:
      - expr: node_load5
"#,
        ))
        .unwrap();
        let panel = &dashboard["panels"][0];
        assert_eq!(panel["type"], json!("stat"));
        assert_eq!(panel["gridPos"], json!({ "h": 4, "w": 6, "x": 0, "y": 8 }));
        assert_eq!(panel["id"], json!(1));
        let target = &panel["targets"][0];
        assert_eq!(target["expr"], json!("node_load5"));
        assert_eq!(target["refId"], json!("A"));
        assert_eq!(target["legendFormat"], json!(""));
    }
}
