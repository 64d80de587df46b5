//! [`CommandRunner`] backed by real child processes via [`tokio::process::Command`].
//!
//! Children inherit stdin, stdout and stderr so `rclone --progress` renders
//! on the user's terminal and git reports its own errors verbatim.

use std::io;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, instrument};

use crate::contract::{CommandRunner, CommandStatus, Invocation};

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandRunner for SystemRunner {
    #[instrument(skip_all, fields(program = %invocation.program, dir = %invocation.current_dir.display()))]
    async fn run(&self, invocation: &Invocation) -> io::Result<CommandStatus> {
        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&invocation.current_dir)
            .status()
            .await?;

        debug!(command = %invocation, ?status, "Command exited");
        Ok(CommandStatus {
            code: status.code(),
        })
    }
}
