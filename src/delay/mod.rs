// src/delay/mod.rs

//! Inter-launch pacing.
//!
//! The controller asks a [`DelayGenerator`] for one value per launch, in
//! launch order, and pauses the launching sequence for that many
//! milliseconds. Tasks that were already started are never paused.
//!
//! - [`policy`] holds the parsed [`DelayPolicy`] (constant or exponential).
//! - [`parse`] turns the `--delay` string into a policy.

pub mod parse;
pub mod policy;

pub use policy::{DelayPolicy, ExponentialDelay};

/// Something that produces the pause (in milliseconds) before the next launch.
///
/// Called exactly once per launch, only from the launching sequence.
pub trait DelayGenerator: Send {
    fn next_delay_ms(&mut self) -> u64;
}

impl<F> DelayGenerator for F
where
    F: FnMut() -> u64 + Send,
{
    fn next_delay_ms(&mut self) -> u64 {
        self()
    }
}
