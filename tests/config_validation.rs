// tests/config_validation.rs

mod common;
use crate::common::parse_args;

use ntimes::cli;
use ntimes::config::RunRequest;
use ntimes::delay::DelayPolicy;
use ntimes::errors::NtimesError;
use ntimes::logging::resolve_level;

#[test]
fn defaults_are_one_parallel_and_no_delay() {
    let args = parse_args(&["3", "echo", "hi"]);
    let req = RunRequest::try_from(&args).unwrap();

    assert_eq!(req.count, 3);
    assert_eq!(req.command, "echo");
    assert_eq!(req.args, vec!["hi".to_string()]);
    assert_eq!(req.parallelism.get(), 1);
    assert!(matches!(req.delay, DelayPolicy::Constant(0)));
    assert_eq!(req.display_command(), "echo hi");
}

#[test]
fn options_and_separator_are_honoured() {
    let args = parse_args(&["4", "-p", "2", "--delay", "exp(0.5)", "--", "ls", "-l", "-a"]);
    let req = RunRequest::try_from(&args).unwrap();

    assert_eq!(req.count, 4);
    assert_eq!(req.parallelism.get(), 2);
    assert!(matches!(req.delay, DelayPolicy::Exponential(_)));
    assert_eq!(req.command, "ls");
    assert_eq!(req.args, vec!["-l".to_string(), "-a".to_string()]);
}

#[test]
fn command_arguments_with_hyphens_pass_through() {
    let args = parse_args(&["2", "-d", "10", "echo", "-n", "hello"]);
    let req = RunRequest::try_from(&args).unwrap();

    assert_eq!(req.command, "echo");
    assert_eq!(req.args, vec!["-n".to_string(), "hello".to_string()]);
    assert!(matches!(req.delay, DelayPolicy::Constant(10)));
}

#[test]
fn zero_count_is_valid() {
    let req = RunRequest::try_from(&parse_args(&["0", "true"])).unwrap();
    assert_eq!(req.count, 0);
}

#[test]
fn zero_parallelism_is_rejected() {
    let args = parse_args(&["3", "-p", "0", "true"]);
    match RunRequest::try_from(&args) {
        Err(NtimesError::InvalidParallelism(0)) => {}
        other => panic!("expected InvalidParallelism, got {other:?}"),
    }
}

#[test]
fn bad_delay_is_rejected() {
    let args = parse_args(&["3", "-d", "soon", "true"]);
    match RunRequest::try_from(&args) {
        Err(NtimesError::InvalidDelay { spec, .. }) => assert_eq!(spec, "soon"),
        other => panic!("expected InvalidDelay, got {other:?}"),
    }
}

#[test]
fn non_numeric_count_is_a_config_error() {
    let args = parse_args(&["many", "true"]);
    match RunRequest::try_from(&args) {
        Err(NtimesError::ConfigError(msg)) => assert!(msg.contains("many")),
        other => panic!("expected ConfigError, got {other:?}"),
    }
}

#[test]
fn missing_command_is_a_config_error() {
    let args = parse_args(&["3"]);
    match RunRequest::try_from(&args) {
        Err(NtimesError::ConfigError(msg)) => assert!(msg.contains("missing command")),
        other => panic!("expected ConfigError, got {other:?}"),
    }
}

#[test]
fn missing_count_is_a_config_error() {
    let args = parse_args(&[]);
    match RunRequest::try_from(&args) {
        Err(NtimesError::ConfigError(msg)) => assert!(msg.contains("count")),
        other => panic!("expected ConfigError, got {other:?}"),
    }
}

#[test]
fn version_flag_parses_without_positionals() {
    let args = parse_args(&["-v"]);
    assert!(args.show_version);
    assert!(cli::version_line().starts_with(&format!("ntimes v{}", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn unknown_flag_is_a_parse_error() {
    let err = cli::try_parse_from(["ntimes", "--bogus", "3", "true"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
}

#[test]
fn log_level_prefers_flag_then_env_then_warn() {
    assert_eq!(
        resolve_level(Some(cli::LogLevel::Debug), Some("error")),
        tracing::Level::DEBUG
    );
    assert_eq!(resolve_level(None, Some("info")), tracing::Level::INFO);
    assert_eq!(resolve_level(None, Some("nonsense")), tracing::Level::WARN);
    assert_eq!(resolve_level(None, None), tracing::Level::WARN);
}
