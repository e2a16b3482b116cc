//! Shared test utilities for dashforge integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Provide a helper for writing spec files into a temp directory.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default:
//!   `DOTENV_DISABLED=1` is set and `GRAFANA_*` host env vars are cleared.

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Returns a hermetic `dashforge` command for integration testing.
pub fn dashforge_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("dashforge");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    // Clear potential host leakage
    cmd.env_remove("GRAFANA_URL").env_remove("GRAFANA_API_KEY");

    cmd
}

/// Write a spec file into `dir` and return its path.
#[allow(dead_code)]
pub fn write_spec(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("dashboard.yaml");
    std::fs::write(&path, contents).expect("write spec file");
    path
}

/// A minimal valid spec exercising all three panel kinds.
#[allow(dead_code)]
pub const SAMPLE_SPEC: &str = r#"
dashboard:
  title: "Server Stats"
  description: "Generated for testing."
  tags: [prometheus, autogen]
templating:
  - name: instance
    label: Instance
    datasource: Prometheus
    query: "label_values(node_uname_info, instance)"
    multi: true
    includeAll: true
panels:
  - title: "CPU Usage"
    type: timeseries
    datasource: Prometheus
    gridPos: { h: 8, w: 12, x: 0, y: 0 }
    options: { unit: percent }
    targets:
      - expr: '100 - cpu_idle{instance=~"$instance"}'
        legendFormat: "{{instance}}"
  - title: "Load"
    type: stat
    datasource: Prometheus
    gridPos: { h: 4, w: 6, x: 0, y: 8 }
    targets:
      - expr: node_load5
  - title: "Disk Used"
    type: gauge
    datasource: Prometheus
    gridPos: { h: 4, w: 6, x: 6, y: 8 }
    options: { unit: percent }
    targets:
      - expr: disk_used_percent
"#;
