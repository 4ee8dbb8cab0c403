// src/config/mod.rs

//! Run configuration.
//!
//! [`RunRequest`] is the immutable description of one run, built from
//! [`crate::cli::CliArgs`] by [`validate`]. Every check happens here, before
//! a single child process is spawned.

pub mod request;
pub mod validate;

pub use request::RunRequest;
