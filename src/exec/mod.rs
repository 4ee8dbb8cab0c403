// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`controller`] owns the concurrency gate and the launch loop: it starts
//!   `count` invocations, paces launch attempts with a delay generator and
//!   waits for all of them, failing fast on the first error.
//! - [`backend`] provides the `Invoker` trait and the production
//!   `ProcessInvoker` that runs the command via `tokio::process::Command`.
//!   Tests can plug in their own invoker that doesn't spawn real processes.
//! - [`streams`] describes which stdin/stdout/stderr each child is bound to.

pub mod backend;
pub mod controller;
pub mod streams;

pub use backend::{Invoker, ProcessInvoker};
pub use controller::{Controller, RunReport};
pub use streams::{ChildStreams, StreamHandle};
