//! Spec-file and environment loading.
//!
//! Responsibilities:
//! - Read a dashboard spec file from disk and parse it into [`SpecFile`].
//! - Load `.env` files, gated on `DOTENV_DISABLED` so tests stay hermetic.
//!
//! Does NOT handle:
//! - Building publish settings from flags (see `publish.rs`).
//!
//! Invariants:
//! - A missing file and an unparseable file are distinct errors, both
//!   carrying the path.
//! - `load_dotenv()` must be called explicitly; it is never implicit.

use std::path::Path;

use tracing::debug;

use crate::error::ConfigError;
use crate::types::SpecFile;

/// Read and parse a dashboard spec file.
pub fn load_spec_file(path: &Path) -> Result<SpecFile, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let spec: SpecFile =
        serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(
        path = %path.display(),
        panels = spec.panels.len(),
        variables = spec.templating.len(),
        "Loaded spec file"
    );

    Ok(spec)
}

/// Load a `.env` file from the working directory, if one exists.
///
/// Honors `DOTENV_DISABLED=1` so integration tests are not contaminated
/// by a developer's local `.env`. A missing `.env` file is not an error.
pub fn load_dotenv() {
    if std::env::var("DOTENV_DISABLED").map(|v| v == "1").unwrap_or(false) {
        debug!("Dotenv loading disabled via DOTENV_DISABLED");
        return;
    }
    if dotenvy::dotenv().is_ok() {
        debug!("Loaded environment from .env");
    }
}
