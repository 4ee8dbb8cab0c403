// src/config/validate.rs

use std::num::NonZeroUsize;

use crate::cli::CliArgs;
use crate::config::request::RunRequest;
use crate::delay::parse::parse_delay;
use crate::errors::{NtimesError, Result};

impl TryFrom<&CliArgs> for RunRequest {
    type Error = NtimesError;

    fn try_from(args: &CliArgs) -> std::result::Result<Self, Self::Error> {
        let count = parse_count(args.count.as_deref())?;
        let parallelism = validate_parallelism(args.parallels)?;
        let (command, cmd_args) = split_command(&args.command)?;
        let delay = parse_delay(&args.delay)?;

        Ok(RunRequest::new(count, command, cmd_args, parallelism, delay))
    }
}

fn parse_count(raw: Option<&str>) -> Result<usize> {
    let raw = raw.ok_or_else(|| {
        NtimesError::ConfigError("missing invocation count N".to_string())
    })?;

    raw.trim().parse::<usize>().map_err(|_| {
        NtimesError::ConfigError(format!(
            "invocation count must be a non-negative integer (got '{raw}')"
        ))
    })
}

fn validate_parallelism(parallels: usize) -> Result<NonZeroUsize> {
    NonZeroUsize::new(parallels).ok_or(NtimesError::InvalidParallelism(parallels))
}

fn split_command(command: &[String]) -> Result<(String, Vec<String>)> {
    match command.split_first() {
        Some((name, rest)) if !name.is_empty() => Ok((name.clone(), rest.to_vec())),
        Some(_) => Err(NtimesError::ConfigError(
            "command name must not be empty".to_string(),
        )),
        None => Err(NtimesError::ConfigError(
            "missing command to run".to_string(),
        )),
    }
}
