// src/lib.rs

pub mod cli;
pub mod config;
pub mod delay;
pub mod errors;
pub mod exec;
pub mod logging;

use tracing::info;

use crate::cli::CliArgs;
use crate::config::RunRequest;
use crate::errors::Result;
use crate::exec::{ChildStreams, Controller, ProcessInvoker, RunReport};

/// High-level entry point used by `main.rs`.
///
/// Validates the arguments into a [`RunRequest`] (no process is spawned if
/// that fails) and runs it with the given child streams.
pub async fn run(args: &CliArgs, streams: ChildStreams) -> Result<RunReport> {
    let request = RunRequest::try_from(args)?;
    execute(request, streams).await
}

/// Run an already-validated request.
pub async fn execute(request: RunRequest, streams: ChildStreams) -> Result<RunReport> {
    info!(
        count = request.count,
        parallelism = request.parallelism.get(),
        delay = %request.delay,
        command = %request.display_command(),
        "ntimes run configured"
    );

    let invoker = ProcessInvoker::from_request(&request, streams);
    let RunRequest {
        count,
        parallelism,
        mut delay,
        ..
    } = request;
    let controller = Controller::new(parallelism, invoker);
    controller.run(count, &mut delay).await
}
