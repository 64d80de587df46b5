use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::contract::CommandStatus;

/// Every way a `g3` operation can fail. All of them are fatal to the
/// running command; nothing is retried or rolled back.
#[derive(Debug, Error)]
pub enum G3Error {
    /// A required environment variable is unset or empty.
    #[error("please set ${0}")]
    MissingConfig(&'static str),

    /// No `.git` directory between the start directory and the filesystem root.
    #[error("this is not a directory tracked in git, giving up")]
    NotInRepository { start: PathBuf },

    /// `git diff --cached` reported staged changes before `init`.
    #[error("something is in the staging area, bailing out")]
    StagingNotEmpty,

    /// `push` was run in a directory without the sentinel file.
    #[error("this is not a directory tracked with g3, giving up")]
    NotManaged { dir: PathBuf },

    /// Creating a marker file failed; `source` is the untouched io error.
    #[error("failed to create {}: {source}", .path.display())]
    Marker {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("`{command}` failed with {status}")]
    CommandFailed {
        command: String,
        status: CommandStatus,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}
