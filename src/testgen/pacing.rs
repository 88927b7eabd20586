// Delay between completion calls, to stay under provider rate limits.

use std::thread;
use std::time::Duration;

pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

pub trait Pacer {
    fn pause(&self);
}

/// Blocks the current thread for a fixed delay.
#[derive(Debug, Clone, Copy)]
pub struct SleepPacer {
    pub delay: Duration,
}

impl SleepPacer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SleepPacer {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

impl Pacer for SleepPacer {
    fn pause(&self) {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoPause;

impl Pacer for NoPause {
    fn pause(&self) {}
}
