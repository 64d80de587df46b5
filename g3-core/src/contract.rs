#![allow(unused)]

//! # contract: the seam between g3 and the external tools it drives
//!
//! Everything `g3` does outside its own process (asking git about the
//! staging area, staging and committing the markers, running `rclone sync`)
//! goes through a single trait, [`CommandRunner`]. The real implementation
//! lives in [`crate::runner`]; tests substitute the generated
//! `MockCommandRunner` and assert on the [`Invocation`]s they receive.
//!
//! ## Mocking & Testing
//! - The trait is annotated for `mockall`. The mock is exported when the
//!   `test-export-mocks` feature is on (the default) so integration tests
//!   in `tests/` can use it.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use mockall::{automock, predicate::*};

/// One external command: program, arguments and the directory it runs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub current_dir: PathBuf,
}

impl Invocation {
    pub fn new<I, S>(program: &str, args: I, current_dir: &Path) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_owned(),
            args: args.into_iter().map(Into::into).collect(),
            current_dir: current_dir.to_path_buf(),
        }
    }

    /// True when this is `<program> <first> ...`, e.g. `git commit`.
    pub fn is(&self, program: &str, first: &str) -> bool {
        self.program == program && self.args.first().map(String::as_str) == Some(first)
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// How a finished command exited. `code` is `None` when it was killed by a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    pub code: Option<i32>,
}

impl CommandStatus {
    pub fn exited(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn success() -> Self {
        Self::exited(0)
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }
}

impl fmt::Display for CommandStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit status {code}"),
            None => f.write_str("termination by signal"),
        }
    }
}

/// Runs external commands to completion.
///
/// Implementors block (asynchronously) until the command exits and report
/// its status. An `Err` means the command could not be started at all;
/// a nonzero exit is a successful `Ok` and is judged by the caller.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, invocation: &Invocation) -> io::Result<CommandStatus>;
}
