//! Arithmetic and composition helpers.
//!
//! Pure functions apart from debug logging. Floating-point semantics are the
//! standard IEEE ones; nothing here validates its inputs.

use std::time::Duration;

use tracing::debug;

/// Sum of two numbers.
#[must_use]
pub fn sum(a: f64, b: f64) -> f64 {
    let result = a + b;
    debug!(a, b, result, "sum");
    result
}

/// `(base * multiplier) + adder`, with the final addition delegated to [`sum`].
#[must_use]
pub fn composed_calculation(base: f64, multiplier: f64, adder: f64) -> f64 {
    let product = base * multiplier;
    let result = sum(product, adder);
    debug!(base, multiplier, adder, result, "composed calculation");
    result
}

/// Scale a base delay by a multiplier.
///
/// Negative or NaN multipliers clamp to zero rather than panicking inside
/// `Duration` arithmetic.
#[must_use]
pub fn animation_delay(base: Duration, multiplier: f64) -> Duration {
    let delay = base.mul_f64(multiplier.max(0.0));
    debug!(?base, multiplier, ?delay, "calculated animation delay");
    delay
}

/// Composite record built from a name and age.
///
/// Constructed per call and discarded; nothing retains these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInfo {
    pub greeting: String,
    pub info: String,
    pub timestamp: String,
}

/// Build a [`UserInfo`] with a current local timestamp string.
#[must_use]
pub fn user_info(name: &str, age: u32) -> UserInfo {
    let greeting = format!("Hello, {name}!");
    let info = format!("You are {age} years old.");
    debug!(%greeting, %info, "built user info");
    UserInfo {
        greeting,
        info,
        timestamp: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    }
}
