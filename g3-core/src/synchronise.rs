//! High-level pipeline: the `init` and `push` operations.
//!
//! Both operations take an already resolved [`SyncConfig`], the directory to
//! work in, and a [`CommandRunner`] for everything that leaves the process.
//!
//! # init
//! locate repo → staging area empty → write markers → `rclone sync` →
//! `git add` + `git commit`.
//!
//! # push
//! `.g3` present → locate repo → `rclone sync`.
//!
//! # Error Handling
//! Each step returns immediately on failure and later steps never run.
//! Nothing is rolled back: if sync or commit fails during `init`, the
//! marker files stay on disk and a second `init` will refuse to run until
//! they are removed.

use std::path::Path;

use tracing::{error, info, instrument, warn};

use crate::config::SyncConfig;
use crate::contract::CommandRunner;
use crate::error::G3Error;
use crate::git;
use crate::locate::{locate_repo, RepoLocation};
use crate::marker;
use crate::rclone;

/// What `init` did: where the repository is and where the tree was synced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitReport {
    pub location: RepoLocation,
    pub destination: String,
    pub commit_message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushReport {
    pub location: RepoLocation,
    pub destination: String,
}

/// Mark `dir` as managed, sync it for the first time and commit the markers.
#[instrument(skip_all, fields(dir = %dir.display(), bucket = %config.bucket))]
pub async fn init<R>(runner: &R, config: &SyncConfig, dir: &Path) -> Result<InitReport, G3Error>
where
    R: CommandRunner + ?Sized,
{
    info!("[INIT] Starting");
    let location = locate_repo(dir)?;

    git::ensure_staging_empty(runner, dir).await?;
    marker::write_markers(dir)?;

    let result = sync_and_commit(runner, config, dir, &location).await;
    if let Err(e) = &result {
        error!(error = %e, "[INIT] Failed after writing marker files");
        warn!(
            sentinel = %dir.join(marker::SENTINEL_FILE).display(),
            ignore = %dir.join(marker::IGNORE_FILE).display(),
            "[INIT] Marker files were left in place; remove them before retrying"
        );
    }
    let destination = result?;

    info!(%destination, "[INIT] Complete");
    Ok(InitReport {
        commit_message: git::commit_message(&location),
        location,
        destination,
    })
}

async fn sync_and_commit<R>(
    runner: &R,
    config: &SyncConfig,
    dir: &Path,
    location: &RepoLocation,
) -> Result<String, G3Error>
where
    R: CommandRunner + ?Sized,
{
    let destination = rclone::push(runner, dir, config, location).await?;
    git::commit_markers(runner, dir, location).await?;
    Ok(destination)
}

/// Sync an already initialised `dir` to its bucket path.
#[instrument(skip_all, fields(dir = %dir.display(), bucket = %config.bucket))]
pub async fn push<R>(runner: &R, config: &SyncConfig, dir: &Path) -> Result<PushReport, G3Error>
where
    R: CommandRunner + ?Sized,
{
    info!("[PUSH] Starting");
    if !marker::is_managed(dir) {
        error!("[PUSH] No sentinel file in directory");
        return Err(G3Error::NotManaged {
            dir: dir.to_path_buf(),
        });
    }

    let location = locate_repo(dir)?;
    let destination = rclone::push(runner, dir, config, &location).await?;

    info!(%destination, "[PUSH] Complete");
    Ok(PushReport {
        location,
        destination,
    })
}
