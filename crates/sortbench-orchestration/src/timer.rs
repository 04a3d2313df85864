//! Wall-clock timing of a single invocation.

use std::time::{Duration, Instant};

/// Run `f` once and return its value together with the elapsed time.
///
/// The clock is read immediately before and after the call. An error from
/// `f` is returned as-is and its timing is discarded.
pub fn measure<R, E, F>(f: F) -> Result<(R, Duration), E>
where
    F: FnOnce() -> Result<R, E>,
{
    let start = Instant::now();
    let outcome = f();
    let elapsed = start.elapsed();
    outcome.map(|value| (value, elapsed))
}
