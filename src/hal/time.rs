//! Time related interfaces.
use std::time::Duration;

/// Blocking wait. The only points where a blink loop yields to the
/// environment.
pub trait Delay {
    fn wait(&mut self, duration: Duration);
}

/// Converts a validated interval in seconds into a `Duration`.
///
/// Returns `None` for zero, negative, NaN or infinite values, and for
/// values too large to be represented as a `Duration`.
pub fn seconds(value: f64) -> Option<Duration> {
    if value.is_finite() && value > 0.0 {
        Duration::try_from_secs_f64(value).ok()
    } else {
        None
    }
}
