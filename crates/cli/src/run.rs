//! Command execution: load, translate, then write or publish.
//!
//! Responsibilities:
//! - Drive one conversion run end to end.
//! - Route the rendered document to stdout, a file, or the Grafana API.
//!
//! Does NOT handle:
//! - Argument parsing (args module) or exit-code mapping (error module).
//!
//! Invariants:
//! - Status and success messages go to stderr; stdout carries only the
//!   JSON document, so `dashforge -f spec.yaml | jq` works.
//! - `--push` takes precedence over `--output`: publishing is the
//!   explicit action and the file write would be redundant with it.

use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;

use dashforge_client::{build_http_client, publish_dashboard};
use dashforge_compiler::{build_dashboard, render_json, wrap_document};
use dashforge_config::{PublishSettings, load_spec_file};

use crate::args::Cli;

pub async fn run(cli: Cli) -> Result<()> {
    let spec = load_spec_file(&cli.file)?;
    let dashboard = build_dashboard(&spec)?;

    if cli.push {
        let settings = PublishSettings::from_options(
            cli.grafana_url,
            cli.api_key,
            cli.timeout.map(Duration::from_secs),
        )?;
        let http = build_http_client(&settings)?;
        let receipt = publish_dashboard(&http, &settings, &dashboard).await?;

        info!(slug = %receipt.slug, "Publish succeeded");
        eprintln!("Dashboard '{}' published.", receipt.slug);
        eprintln!("  URL: {}{}", settings.base_url, receipt.url);
        return Ok(());
    }

    let rendered = render_json(&wrap_document(dashboard))?;

    match cli.output {
        Some(path) => {
            std::fs::write(&path, &rendered)
                .with_context(|| format!("Failed to write output file '{}'", path.display()))?;
            eprintln!("Dashboard JSON written to '{}'.", path.display());
        }
        None => {
            print!("{rendered}");
        }
    }

    Ok(())
}
