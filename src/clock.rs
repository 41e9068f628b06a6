//! Clock: A monotonic stopwatch for frame timing.

use std::time::{Duration, Instant};

/// Stopwatch over [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    start: Instant,
}

impl Clock {
    /// Start a clock now.
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Seconds since the clock was started or last reset.
    ///
    /// When `reset` is true the clock restarts from now.
    pub fn elapsed(&mut self, reset: bool) -> f64 {
        let elapsed = self.duration();
        if reset {
            self.start = Instant::now();
        }
        elapsed.as_secs_f64()
    }

    /// Time since the clock was started or last reset.
    pub fn duration(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
