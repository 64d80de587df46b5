//! Finding the git repository a directory belongs to.
//!
//! The walk goes upward from the start directory and stops at the first
//! ancestor holding a `.git` directory. The filesystem root itself is never
//! treated as a repository root.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::G3Error;

pub const GIT_DIR: &str = ".git";

/// The repository enclosing a working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoLocation {
    /// Directory containing `.git`.
    pub root: PathBuf,
    /// Base name of `root`; used as the top-level folder in the bucket.
    pub name: String,
    /// Working directory relative to `root`, `/`-separated. Empty when they are the same.
    pub relative: String,
}

/// Walk up from `start` until a directory containing `.git` is found.
pub fn locate_repo(start: &Path) -> Result<RepoLocation, G3Error> {
    let start = if start.is_absolute() {
        start.to_path_buf()
    } else {
        std::env::current_dir()?.join(start)
    };

    let root = start
        .ancestors()
        .take_while(|dir| dir.parent().is_some())
        .find(|dir| {
            let found = dir.join(GIT_DIR).is_dir();
            debug!(dir = %dir.display(), found, "Checked for git directory");
            found
        })
        .ok_or_else(|| G3Error::NotInRepository {
            start: start.clone(),
        })?;

    let name = root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    // TODO: check that the name of the git remote matches `name`.

    let relative = start
        .strip_prefix(root)
        .map(relative_posix)
        .unwrap_or_default();

    let location = RepoLocation {
        root: root.to_path_buf(),
        name,
        relative,
    };
    info!(
        root = %location.root.display(),
        name = %location.name,
        relative = %location.relative,
        "Located git repository"
    );
    Ok(location)
}

fn relative_posix(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
