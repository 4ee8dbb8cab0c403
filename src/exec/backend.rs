// src/exec/backend.rs

//! Pluggable invocation backend.
//!
//! The controller only knows how to schedule work; what one invocation
//! actually does is behind [`Invoker`].
//!
//! - [`ProcessInvoker`] is the implementation used by `ntimes`: it spawns the
//!   target command with the shared streams and waits for it.
//! - Tests can provide their own `Invoker` that, for example, records how
//!   many invocations were active at once.

use std::future::Future;
use std::pin::Pin;

use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::config::RunRequest;
use crate::errors::{NtimesError, Result};

use super::streams::ChildStreams;

/// Environment variable carrying the zero-based invocation index to children.
pub const INDEX_ENV_VAR: &str = "NTIMES_INDEX";

/// Future returned by [`Invoker::invoke`].
pub type InvocationFuture = Pin<Box<dyn Future<Output = Result<()>> + Send + 'static>>;

/// Trait abstracting how a single invocation is executed.
///
/// `invoke` is called from inside a spawned task after a gate slot has been
/// acquired; the slot is released once the returned future completes.
pub trait Invoker: Send + Sync + 'static {
    /// Run invocation number `index` to completion.
    ///
    /// Any `Err` is fatal to the whole run.
    fn invoke(&self, index: usize) -> InvocationFuture;
}

/// Runs the target command as a child process.
#[derive(Debug, Clone)]
pub struct ProcessInvoker {
    program: String,
    args: Vec<String>,
    streams: ChildStreams,
    display: String,
}

impl ProcessInvoker {
    pub fn new(program: impl Into<String>, args: Vec<String>, streams: ChildStreams) -> Self {
        let program = program.into();
        let display = std::iter::once(program.as_str())
            .chain(args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ");
        Self {
            program,
            args,
            streams,
            display,
        }
    }

    pub fn from_request(request: &RunRequest, streams: ChildStreams) -> Self {
        Self::new(request.command.clone(), request.args.clone(), streams)
    }

    fn build_command(&self, index: usize) -> Result<Command> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .env(INDEX_ENV_VAR, index.to_string())
            .kill_on_drop(true);

        self.streams
            .apply(&mut cmd)
            .map_err(|source| NtimesError::Spawn {
                index,
                command: self.display.clone(),
                source,
            })?;

        Ok(cmd)
    }
}

impl Invoker for ProcessInvoker {
    fn invoke(&self, index: usize) -> InvocationFuture {
        let prepared = self.build_command(index);
        let command_line = self.display.clone();

        Box::pin(async move {
            let mut cmd = prepared?;

            debug!(index, command = %command_line, "starting process");

            let mut child = cmd.spawn().map_err(|source| NtimesError::Spawn {
                index,
                command: command_line.clone(),
                source,
            })?;

            let status = child.wait().await.map_err(|source| NtimesError::Wait {
                index,
                command: command_line.clone(),
                source,
            })?;

            if status.success() {
                info!(index, command = %command_line, "process exited successfully");
                Ok(())
            } else {
                warn!(
                    index,
                    command = %command_line,
                    exit_code = status.code(),
                    "process exited with failure"
                );
                Err(NtimesError::ExitStatus {
                    index,
                    command: command_line,
                    code: status.code(),
                })
            }
        })
    }
}
