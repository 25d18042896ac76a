//! Refresh rate limiting: a minimum interval plus minute alignment.

/// Why a refresh may or may not run on this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshGate {
    /// Both guards pass; fetch now.
    Open,
    /// Less than the refresh interval since the last refresh.
    IntervalNotElapsed,
    /// Interval elapsed, but `now` is not on a minute boundary.
    NotMinuteAligned,
}

/// Decide whether `now` may refresh, given the last refresh and the interval.
///
/// The interval check comes first; alignment (`now % 60 == 0`) is only
/// consulted once the interval has elapsed. Intervals just over a minute can
/// therefore skip several boundaries in a row.
pub fn refresh_gate(now: i64, last_refresh_at: i64, interval_secs: u64) -> RefreshGate {
    let interval = i64::try_from(interval_secs).unwrap_or(i64::MAX);
    if now.saturating_sub(last_refresh_at) < interval {
        return RefreshGate::IntervalNotElapsed;
    }
    if now.rem_euclid(60) != 0 {
        return RefreshGate::NotMinuteAligned;
    }
    RefreshGate::Open
}
