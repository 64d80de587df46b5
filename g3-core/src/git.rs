//! Git commands run by `init`: the staging-area check and the marker commit.

use std::path::Path;

use tracing::{debug, error, info, instrument};

use crate::contract::{CommandRunner, CommandStatus, Invocation};
use crate::error::G3Error;
use crate::locate::RepoLocation;
use crate::marker::{IGNORE_FILE, SENTINEL_FILE};

pub const GIT: &str = "git";

/// Commit message for the marker commit, e.g. `Add .g3 at /docs/`.
pub fn commit_message(location: &RepoLocation) -> String {
    if location.relative.is_empty() {
        format!("Add {SENTINEL_FILE} at /")
    } else {
        format!("Add {SENTINEL_FILE} at /{}/", location.relative)
    }
}

/// Fail unless `git diff --cached --quiet` reports nothing staged.
#[instrument(skip_all, fields(dir = %dir.display()))]
pub async fn ensure_staging_empty<R>(runner: &R, dir: &Path) -> Result<(), G3Error>
where
    R: CommandRunner + ?Sized,
{
    let invocation = Invocation::new(GIT, ["diff", "--cached", "--quiet"], dir);
    let status = run(runner, &invocation).await?;
    match status.code {
        Some(0) => {
            debug!("Staging area is empty");
            Ok(())
        }
        Some(1) => {
            error!("Staging area is not empty");
            Err(G3Error::StagingNotEmpty)
        }
        _ => Err(failed(&invocation, status)),
    }
}

/// Stage exactly the two marker files and commit them. Does not push.
#[instrument(skip_all, fields(dir = %dir.display()))]
pub async fn commit_markers<R>(
    runner: &R,
    dir: &Path,
    location: &RepoLocation,
) -> Result<(), G3Error>
where
    R: CommandRunner + ?Sized,
{
    let add = Invocation::new(GIT, ["add", SENTINEL_FILE, IGNORE_FILE], dir);
    check(runner, &add).await?;

    let message = commit_message(location);
    let commit = Invocation::new(GIT, ["commit".to_owned(), "-m".to_owned(), message.clone()], dir);
    check(runner, &commit).await?;

    info!(%message, "Committed marker files");
    Ok(())
}

async fn run<R>(runner: &R, invocation: &Invocation) -> Result<CommandStatus, G3Error>
where
    R: CommandRunner + ?Sized,
{
    debug!(command = %invocation, "Spawning git");
    runner
        .run(invocation)
        .await
        .map_err(|source| G3Error::Spawn {
            program: GIT.to_owned(),
            source,
        })
}

async fn check<R>(runner: &R, invocation: &Invocation) -> Result<(), G3Error>
where
    R: CommandRunner + ?Sized,
{
    let status = run(runner, invocation).await?;
    if status.is_success() {
        Ok(())
    } else {
        Err(failed(invocation, status))
    }
}

fn failed(invocation: &Invocation, status: CommandStatus) -> G3Error {
    error!(command = %invocation, %status, "git command failed");
    G3Error::CommandFailed {
        command: invocation.to_string(),
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::MockCommandRunner;
    use std::path::PathBuf;

    fn location(relative: &str) -> RepoLocation {
        RepoLocation {
            root: PathBuf::from("/repo"),
            name: "repo".into(),
            relative: relative.into(),
        }
    }

    #[test]
    fn commit_message_names_the_directory() {
        assert_eq!(commit_message(&location("docs/img")), "Add .g3 at /docs/img/");
        assert_eq!(commit_message(&location("")), "Add .g3 at /");
    }

    #[tokio::test]
    async fn exit_one_means_staged_changes() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(|inv| inv.args == ["diff", "--cached", "--quiet"])
            .times(1)
            .returning(|_| Ok(CommandStatus::exited(1)));

        let err = ensure_staging_empty(&runner, Path::new("/repo"))
            .await
            .unwrap_err();
        assert!(matches!(err, G3Error::StagingNotEmpty));
    }

    #[tokio::test]
    async fn other_exit_codes_are_command_failures() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .returning(|_| Ok(CommandStatus::exited(128)));

        let err = ensure_staging_empty(&runner, Path::new("/repo"))
            .await
            .unwrap_err();
        match err {
            G3Error::CommandFailed { command, status } => {
                assert_eq!(command, "git diff --cached --quiet");
                assert_eq!(status.code, Some(128));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn failed_add_skips_commit() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(|inv| inv.is("git", "add"))
            .times(1)
            .returning(|_| Ok(CommandStatus::exited(1)));
        runner
            .expect_run()
            .withf(|inv| inv.is("git", "commit"))
            .times(0);

        let result = commit_markers(&runner, Path::new("/repo"), &location("")).await;
        assert!(matches!(result, Err(G3Error::CommandFailed { .. })));
    }

    #[tokio::test]
    async fn missing_git_binary_is_a_spawn_error() {
        let mut runner = MockCommandRunner::new();
        runner.expect_run().returning(|_| {
            Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no such file",
            ))
        });

        let err = ensure_staging_empty(&runner, Path::new("/repo"))
            .await
            .unwrap_err();
        assert!(matches!(err, G3Error::Spawn { ref program, .. } if program == "git"));
    }
}
