// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NtimesError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("invalid delay specification '{spec}': {reason}")]
    InvalidDelay { spec: String, reason: String },

    #[error("invalid parallel degree {0} (must be >= 1)")]
    InvalidParallelism(usize),

    #[error("invocation #{index}: failed to start '{command}'")]
    Spawn {
        index: usize,
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invocation #{index}: failed waiting for '{command}'")]
    Wait {
        index: usize,
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invocation #{index}: '{command}' exited with {}", describe_code(.code))]
    ExitStatus {
        index: usize,
        command: String,
        code: Option<i32>,
    },

    #[error("invocation task aborted: {0}")]
    TaskPanicked(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl NtimesError {
    /// Index of the failed invocation, if this error came from one.
    pub fn invocation_index(&self) -> Option<usize> {
        match self {
            NtimesError::Spawn { index, .. }
            | NtimesError::Wait { index, .. }
            | NtimesError::ExitStatus { index, .. } => Some(*index),
            _ => None,
        }
    }
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, NtimesError>;
