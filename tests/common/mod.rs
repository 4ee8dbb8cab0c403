#![allow(dead_code)]

use ntimes::cli::{self, CliArgs};

pub use ntimes_test_utils::{init_tracing, with_timeout};

/// Parse a command line (without the binary name) the way `main` does.
pub fn parse_args(args: &[&str]) -> CliArgs {
    let argv = std::iter::once("ntimes").chain(args.iter().copied());
    cli::try_parse_from(argv).expect("arguments should parse")
}
