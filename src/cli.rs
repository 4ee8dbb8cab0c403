// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! Positionals are kept loose here (`N` as a string, the command as an
//! optional list) so that `--version` works on its own and so that a
//! missing command or a non-numeric count is reported as a configuration
//! error by [`crate::config`] rather than by clap.

use clap::{Parser, ValueEnum};

/// Build identifier baked in at compile time (`NTIMES_GIT_COMMIT`).
pub const GIT_COMMIT: &str = match option_env!("NTIMES_GIT_COMMIT") {
    Some(commit) => commit,
    None => "",
};

/// Command-line arguments for `ntimes`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ntimes",
    about = "Run a command N times, with bounded parallelism and paced launches.",
    override_usage = "ntimes N [OPTIONS] [--] COMMAND [ARGS]...",
    disable_version_flag = true,
    long_about = None
)]
pub struct CliArgs {
    /// How many times to run the command.
    #[arg(value_name = "N")]
    pub count: Option<String>,

    /// Command to run, followed by its arguments (passed verbatim).
    #[arg(
        value_name = "COMMAND",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<String>,

    /// Parallel degree of execution.
    #[arg(short = 'p', long = "parallels", value_name = "N", default_value_t = 1)]
    pub parallels: usize,

    /// Milliseconds to sleep after a job has been started (can use exp(l)).
    #[arg(short = 'd', long = "delay", value_name = "SPEC", default_value = "0")]
    pub delay: String,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `NTIMES_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Show version.
    #[arg(short = 'v', long = "version")]
    pub show_version: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Text printed for `--version`.
pub fn version_line() -> String {
    format!("ntimes v{}, build {}", env!("CARGO_PKG_VERSION"), GIT_COMMIT)
}

/// Parse arguments from an explicit iterator (first item is the binary name).
pub fn try_parse_from<I, T>(args: I) -> Result<CliArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    CliArgs::try_parse_from(args)
}

/// Parse the process arguments.
///
/// Help requests come back as `Err` with [`clap::error::ErrorKind::DisplayHelp`].
pub fn try_parse() -> Result<CliArgs, clap::Error> {
    CliArgs::try_parse()
}
