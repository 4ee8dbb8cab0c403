// src/delay/parse.rs

//! Parsing of the `--delay` option.
//!
//! Accepted forms:
//! - a plain non-negative integer, e.g. `"250"` (constant milliseconds)
//! - `name(param)`, currently only `exp(λ)` with a positive rate, e.g. `"exp(0.01)"`

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::delay::policy::DelayPolicy;
use crate::errors::{NtimesError, Result};

static FUNCTIONAL_FORM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z_][A-Za-z0-9_]*)\s*\(\s*([^()]*?)\s*\)$")
        .expect("delay grammar regex is valid")
});

/// Parse a delay specification into a [`DelayPolicy`].
pub fn parse_delay(spec: &str) -> Result<DelayPolicy> {
    let trimmed = spec.trim();

    if trimmed.is_empty() {
        return Err(invalid(spec, "empty delay specification"));
    }

    if trimmed.bytes().all(|b| b.is_ascii_digit()) {
        let ms = trimmed
            .parse::<u64>()
            .map_err(|e| invalid(spec, &format!("constant delay out of range: {e}")))?;
        debug!(ms, "parsed constant delay");
        return Ok(DelayPolicy::Constant(ms));
    }

    let caps = FUNCTIONAL_FORM.captures(trimmed).ok_or_else(|| {
        invalid(
            spec,
            "expected a non-negative integer or a form like exp(<rate>)",
        )
    })?;

    let name = &caps[1];
    let param = &caps[2];

    match name {
        "exp" => {
            let rate = param
                .parse::<f64>()
                .map_err(|_| invalid(spec, &format!("rate '{param}' is not a number")))?;
            if !rate.is_finite() || rate <= 0.0 {
                return Err(invalid(
                    spec,
                    &format!("rate must be a finite number > 0 (got {param})"),
                ));
            }
            debug!(rate, "parsed exponential delay");
            Ok(DelayPolicy::exponential(rate))
        }
        other => Err(invalid(spec, &format!("unknown distribution '{other}'"))),
    }
}

impl FromStr for DelayPolicy {
    type Err = NtimesError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        parse_delay(s)
    }
}

fn invalid(spec: &str, reason: &str) -> NtimesError {
    NtimesError::InvalidDelay {
        spec: spec.to_string(),
        reason: reason.to_string(),
    }
}
