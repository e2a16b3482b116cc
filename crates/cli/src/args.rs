//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI surface using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute anything (see the `run` module).
//! - Does not validate publish credentials (see `PublishSettings`).

use clap::Parser;
use std::path::PathBuf;

use dashforge_config::constants::{ENV_GRAFANA_API_KEY, ENV_GRAFANA_URL};

#[derive(Parser)]
#[command(name = "dashforge")]
#[command(about = "Generate and publish Grafana dashboards from YAML spec files", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  dashforge --file dashboard.yaml\n  dashforge --file dashboard.yaml --output my-dashboard.json\n  dashforge --file dashboard.yaml --push\n  GRAFANA_URL=http://localhost:3000 GRAFANA_API_KEY=ey... dashforge -f dashboard.yaml --push\n"
)]
pub struct Cli {
    /// Path to the dashboard spec file (YAML)
    #[arg(short, long, value_name = "FILE")]
    pub file: PathBuf,

    /// Write the generated JSON to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Publish the dashboard directly to the Grafana API
    #[arg(long)]
    pub push: bool,

    /// Grafana base URL (e.g., http://localhost:3000); required with --push
    #[arg(long, env = ENV_GRAFANA_URL)]
    pub grafana_url: Option<String>,

    /// Grafana API key with Editor rights; required with --push
    #[arg(long, env = ENV_GRAFANA_API_KEY, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Publish request timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,
}
