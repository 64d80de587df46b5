use tracing::{debug, info};

use crate::error::G3Error;

/// Environment variable naming the destination bucket. Required.
pub const BUCKET_VAR: &str = "G3_BUCKET";
/// Environment variable naming the rclone remote. Defaults to [`DEFAULT_REMOTE`].
pub const REMOTE_VAR: &str = "G3_REMOTE";
pub const DEFAULT_REMOTE: &str = "s3";

/// Where synced trees end up: `<remote>:<bucket>/...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    pub bucket: String,
    pub remote: String,
}

impl SyncConfig {
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            remote: DEFAULT_REMOTE.to_owned(),
        }
    }

    /// Resolve the config through `lookup`, which maps a variable name to its value.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, G3Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let bucket = non_empty(BUCKET_VAR).ok_or(G3Error::MissingConfig(BUCKET_VAR))?;
        let remote = non_empty(REMOTE_VAR).unwrap_or_else(|| DEFAULT_REMOTE.to_owned());

        Ok(Self { bucket, remote })
    }

    pub fn trace_loaded(&self) {
        info!(bucket = %self.bucket, remote = %self.remote, "Loaded SyncConfig");
        debug!(?self, "SyncConfig loaded (full debug)");
    }
}
