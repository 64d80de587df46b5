///
/// This module implements the CLI interface for g3: command parsing and
/// the mapping from a parsed command onto the operations in [`g3-core`].
///
/// All behavior (repository lookup, marker files, rclone, git) lives in
/// the [`g3-core`] crate. This module is strictly CLI glue.
///
/// ## How To Use
/// - For command-line users: run `g3 init` once in a directory, then `g3 push`.
/// - For programmatic/integration use: call [`run`] with a constructed [`Cli`],
///   or [`dispatch`] with an explicit config, directory and runner.
///
/// [`g3-core`]: ../../g3-core/
use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use g3_core::config::SyncConfig;
use g3_core::contract::CommandRunner;
use g3_core::runner::SystemRunner;
use g3_core::synchronise;

use crate::load_config::load_config;

/// Printed after a successful `init`; the marker commit is never pushed for you.
pub const INIT_DONE: &str = "\nCommit created! Now `git push'!";

/// CLI for g3: mirror a git-managed directory to a bucket.
#[derive(Parser)]
#[clap(
    name = "g3",
    version,
    about = "Keep a directory of large files in a bucket while git tracks only its marker"
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Start syncing this directory with g3
    Init,
    /// Push this directory to the bucket
    Push,
}

/// Async CLI entrypoint for main() and integration tests: resolves the
/// environment and the working directory, then runs the command for real.
pub async fn run(cli: Cli) -> Result<()> {
    let config = load_config()?;
    let dir = std::env::current_dir().context("Failed to determine current directory")?;
    dispatch(cli.command, &config, &dir, &SystemRunner::new()).await
}

/// Run `command` in `dir` with an already resolved config and runner.
pub async fn dispatch<R>(command: Commands, config: &SyncConfig, dir: &Path, runner: &R) -> Result<()>
where
    R: CommandRunner + ?Sized,
{
    match command {
        Commands::Init => {
            tracing::info!(command = "init", dir = %dir.display(), "Initialising directory");
            let report = synchronise::init(runner, config, dir).await?;
            tracing::info!(command = "init", ?report, "Initialisation complete");
            println!("{INIT_DONE}");
        }
        Commands::Push => {
            tracing::info!(command = "push", dir = %dir.display(), "Pushing directory");
            let report = synchronise::push(runner, config, dir).await?;
            tracing::info!(command = "push", ?report, "Push complete");
        }
    }
    Ok(())
}
