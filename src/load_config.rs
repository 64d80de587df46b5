/// `load_config` module: resolves the [`SyncConfig`] from the process environment.
///
/// `G3_BUCKET` is required and `G3_REMOTE` is optional (defaults to `s3`).
/// `main` loads a `.env` file first, so either can live there.
///
/// # Errors
/// Failures are returned as `anyhow::Error` and surface at the CLI boundary
/// before any file is written or command is run.
use anyhow::Result;
use g3_core::config::SyncConfig;
use tracing::{error, info};

pub fn load_config() -> Result<SyncConfig> {
    info!("Loading configuration from environment");

    match SyncConfig::from_lookup(|name| std::env::var(name).ok()) {
        Ok(config) => {
            config.trace_loaded();
            Ok(config)
        }
        Err(e) => {
            error!(error = %e, "Failed to load configuration");
            Err(e.into())
        }
    }
}
