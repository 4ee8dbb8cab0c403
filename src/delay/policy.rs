// src/delay/policy.rs

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::DelayGenerator;

/// How long to wait between successive launch attempts.
///
/// New distributions are added as new variants.
#[derive(Debug, Clone)]
pub enum DelayPolicy {
    /// Same delay for every launch. `Constant(0)` means no pacing.
    Constant(u64),
    /// Exponentially distributed delays with a private random source.
    Exponential(ExponentialDelay),
}

impl DelayPolicy {
    /// Policy that never pauses.
    pub fn none() -> Self {
        DelayPolicy::Constant(0)
    }

    /// Exponential policy seeded from the current time.
    pub fn exponential(rate: f64) -> Self {
        DelayPolicy::Exponential(ExponentialDelay::new(rate))
    }

    /// Expected delay in milliseconds (before truncation for the exponential case).
    pub fn mean_ms(&self) -> f64 {
        match self {
            DelayPolicy::Constant(ms) => *ms as f64,
            DelayPolicy::Exponential(exp) => 1.0 / exp.rate(),
        }
    }
}

impl Default for DelayPolicy {
    fn default() -> Self {
        DelayPolicy::none()
    }
}

impl DelayGenerator for DelayPolicy {
    fn next_delay_ms(&mut self) -> u64 {
        match self {
            DelayPolicy::Constant(ms) => *ms,
            DelayPolicy::Exponential(exp) => exp.sample_ms(),
        }
    }
}

impl fmt::Display for DelayPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DelayPolicy::Constant(ms) => write!(f, "{ms}"),
            DelayPolicy::Exponential(exp) => write!(f, "exp({})", exp.rate()),
        }
    }
}

/// Exponential distribution with rate `λ`, sampled in milliseconds.
///
/// Samples are truncated toward zero, so the empirical mean sits slightly
/// below `1/λ` (by at most one millisecond).
#[derive(Debug, Clone)]
pub struct ExponentialDelay {
    rate: f64,
    rng: StdRng,
}

impl ExponentialDelay {
    /// Create a generator seeded from the wall clock.
    ///
    /// `rate` must be finite and positive; [`crate::delay::parse`] enforces it.
    pub fn new(rate: f64) -> Self {
        Self::with_seed(rate, time_seed())
    }

    /// Create a generator with a fixed seed (reproducible sequences).
    pub fn with_seed(rate: f64, seed: u64) -> Self {
        Self {
            rate,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Draw one sample via inverse transform: `-ln(1 - u) / λ`.
    pub fn sample_ms(&mut self) -> u64 {
        let u: f64 = self.rng.r#gen();
        let sample = -(1.0 - u).ln() / self.rate;
        // `as` saturates on overflow and truncates toward zero.
        sample as u64
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
