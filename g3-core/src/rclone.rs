//! Mirroring a directory to the bucket with `rclone sync`.

use std::path::Path;

use tracing::{debug, error, info, instrument};

use crate::config::SyncConfig;
use crate::contract::{CommandRunner, Invocation};
use crate::error::G3Error;
use crate::locate::RepoLocation;
use crate::marker::{IGNORE_FILE, SENTINEL_FILE};

pub const RCLONE: &str = "rclone";

/// `<remote>:<bucket>/<repo name>[/<relative path>]`
pub fn destination(config: &SyncConfig, location: &RepoLocation) -> String {
    let mut dest = format!("{}:{}/{}", config.remote, config.bucket, location.name);
    if !location.relative.is_empty() {
        dest.push('/');
        dest.push_str(&location.relative);
    }
    dest
}

/// The `rclone sync` command mirroring `dir` to its destination, markers excluded.
pub fn sync_invocation(dir: &Path, config: &SyncConfig, location: &RepoLocation) -> Invocation {
    Invocation::new(
        RCLONE,
        [
            "sync".to_owned(),
            "--progress".to_owned(),
            "--checksum".to_owned(),
            format!("--exclude={{{IGNORE_FILE},{SENTINEL_FILE}}}"),
            ".".to_owned(),
            destination(config, location),
        ],
        dir,
    )
}

/// Run `rclone sync` for `dir`. Any nonzero exit is an error.
#[instrument(skip_all, fields(dir = %dir.display()))]
pub async fn push<R>(
    runner: &R,
    dir: &Path,
    config: &SyncConfig,
    location: &RepoLocation,
) -> Result<String, G3Error>
where
    R: CommandRunner + ?Sized,
{
    let invocation = sync_invocation(dir, config, location);
    let dest = destination(config, location);
    info!(destination = %dest, "Starting rclone sync");
    debug!(command = %invocation, "Spawning rclone");

    let status = runner
        .run(&invocation)
        .await
        .map_err(|source| G3Error::Spawn {
            program: RCLONE.to_owned(),
            source,
        })?;

    if !status.is_success() {
        error!(destination = %dest, %status, "rclone sync failed");
        return Err(G3Error::CommandFailed {
            command: invocation.to_string(),
            status,
        });
    }

    info!(destination = %dest, "rclone sync complete");
    Ok(dest)
}
