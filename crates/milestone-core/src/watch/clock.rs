use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Longest uninterrupted nap while waiting for the next tick.
const SLEEP_SLICE: Duration = Duration::from_millis(100);

/// Source of wall-clock time and of the pause between ticks.
pub trait Clock {
    /// Current unix time in seconds.
    fn now(&self) -> i64;

    /// Wait for `dur`, returning early once `abort` is set.
    fn sleep(&self, dur: Duration, abort: &AtomicBool);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0)
    }

    fn sleep(&self, dur: Duration, abort: &AtomicBool) {
        let mut left = dur;
        while !left.is_zero() && !abort.load(Ordering::Relaxed) {
            let nap = left.min(SLEEP_SLICE);
            std::thread::sleep(nap);
            left -= nap;
        }
    }
}
