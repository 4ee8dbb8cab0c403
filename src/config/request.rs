// src/config/request.rs

use std::num::NonZeroUsize;

use crate::delay::DelayPolicy;

/// Everything needed for one run of the controller.
#[derive(Debug, Clone)]
pub struct RunRequest {
    /// Number of invocations to launch.
    pub count: usize,
    /// Program to execute (resolved via `PATH`).
    pub command: String,
    /// Arguments passed verbatim to every invocation.
    pub args: Vec<String>,
    /// Upper bound on concurrently running invocations.
    pub parallelism: NonZeroUsize,
    /// Pause between successive launch attempts.
    pub delay: DelayPolicy,
}

impl RunRequest {
    /// Build a request without going through CLI validation.
    pub fn new(
        count: usize,
        command: impl Into<String>,
        args: Vec<String>,
        parallelism: NonZeroUsize,
        delay: DelayPolicy,
    ) -> Self {
        Self {
            count,
            command: command.into(),
            args,
            parallelism,
            delay,
        }
    }

    /// Command line as a single display string, for logs and errors.
    pub fn display_command(&self) -> String {
        std::iter::once(self.command.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
