//! Wall-clock stopwatch.

use std::time::{Duration, Instant};

/// Measures elapsed wall time since creation or the last [`reset`](Timer::reset).
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Start a new timer.
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Seconds elapsed.
    pub fn get_sec(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }

    /// Time elapsed.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Restart from now, returning the time that had elapsed.
    pub fn reset(&mut self) -> Duration {
        let elapsed = self.elapsed();
        self.start = Instant::now();
        log::trace!("timer reset after {:.6}s", elapsed.as_secs_f64());
        elapsed
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
