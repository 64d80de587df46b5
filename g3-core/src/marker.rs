//! The two files that mark a directory as managed by g3.
//!
//! `.g3` is an empty sentinel. `.gitignore` hides everything else in the
//! directory from git, so only the markers are ever committed.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::error::G3Error;

pub const SENTINEL_FILE: &str = ".g3";
pub const IGNORE_FILE: &str = ".gitignore";
pub const IGNORE_CONTENTS: &str = "*\n!.gitignore\n!.g3\n";

/// Create `.g3` and `.gitignore` in `dir`. Fails if either already exists.
///
/// Files are created in that order and nothing is cleaned up on failure,
/// so a pre-existing `.gitignore` leaves a fresh `.g3` behind.
pub fn write_markers(dir: &Path) -> Result<(), G3Error> {
    create_new(dir, SENTINEL_FILE, b"")?;
    create_new(dir, IGNORE_FILE, IGNORE_CONTENTS.as_bytes())?;
    info!(dir = %dir.display(), "Wrote marker files");
    Ok(())
}

/// Whether `dir` has been initialised (contains the `.g3` sentinel).
pub fn is_managed(dir: &Path) -> bool {
    dir.join(SENTINEL_FILE).is_file()
}

fn create_new(dir: &Path, name: &str, contents: &[u8]) -> Result<(), G3Error> {
    let path = dir.join(name);
    let marker_err = |source| G3Error::Marker {
        path: path.clone(),
        source,
    };

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .map_err(marker_err)?;
    file.write_all(contents).map_err(marker_err)?;
    Ok(())
}
