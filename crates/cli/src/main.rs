//! dashforge - Generate and publish Grafana dashboards from YAML specs.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Translate the spec file via the compiler crate and route the result
//!   (stdout, file, or Grafana API).
//!
//! Does NOT handle:
//! - Translation logic (see `crates/compiler`).
//! - The HTTP publish call (see `crates/client`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` values can
//!   provide clap env defaults (GRAFANA_URL, GRAFANA_API_KEY).
//! - Logging goes to stderr; stdout is reserved for the JSON document.

mod args;
mod error;
mod run;

use args::Cli;
use clap::Parser;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    // Load .env before parsing so clap env defaults can read .env values.
    dashforge_config::load_dotenv();

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run::run(cli).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
