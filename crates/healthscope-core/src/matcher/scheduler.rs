//! Scheduling hook run before an analysis is computed.
//!
//! Web front ends pause briefly so an "analyzing" state is visible. The
//! pause never affects results.

use std::thread;
use std::time::Duration;

/// Hook invoked once per analysis, before matching.
pub trait AnalysisScheduler: Send + Sync {
    fn before_analysis(&self);
}

/// Runs analyses without any delay.
#[derive(Debug, Clone, Copy, Default)]
pub struct Immediate;

impl AnalysisScheduler for Immediate {
    fn before_analysis(&self) {}
}

/// Blocks the calling thread for a fixed duration.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay {
    delay: Duration,
}

impl FixedDelay {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl AnalysisScheduler for FixedDelay {
    fn before_analysis(&self) {
        thread::sleep(self.delay);
    }
}

/// Pick a scheduler for a delay in milliseconds (0 means immediate).
pub fn scheduler_for_delay(delay_ms: u64) -> Box<dyn AnalysisScheduler> {
    if delay_ms == 0 {
        Box::new(Immediate)
    } else {
        Box::new(FixedDelay::new(Duration::from_millis(delay_ms)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_fixed_delay_blocks() {
        let scheduler = FixedDelay::new(Duration::from_millis(20));
        let start = Instant::now();
        scheduler.before_analysis();
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn test_zero_delay_is_immediate() {
        let scheduler = scheduler_for_delay(0);
        let start = Instant::now();
        scheduler.before_analysis();
        assert!(start.elapsed() < Duration::from_millis(20));
    }
}
