//! Linear extrapolation of the download count between refreshes.
//!
//! The state holds the last ground-truth observation (a [`Snapshot`]) and the
//! time of the last refresh. Each [`tick`] optionally refreshes the snapshot
//! and then projects the current value from it; the projection is recomputed
//! from the snapshot every time, never accumulated.

mod eta;
mod guard;
mod tick;

pub use eta::{eta_seconds, format_eta, Eta};
pub use guard::{refresh_gate, RefreshGate};
pub use tick::{tick, RefreshOutcome, TickReport};

/// Download count the progress bar runs toward.
pub const GOAL: u64 = 500_000_000;

/// One ground-truth observation: absolute count, rate, and when it was taken.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    /// Absolute download count.
    pub total: u64,
    /// Downloads per second.
    pub rate: f64,
    /// Unix seconds at which `total` was observed.
    pub taken_at: i64,
}

impl Snapshot {
    /// Last known observation before the first refresh succeeds.
    pub const FALLBACK: Snapshot = Snapshot {
        total: 495_733_451,
        rate: 12.219936728395,
        taken_at: 1_474_525_501,
    };
}

/// Mutable estimator state, owned by the watch loop.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimatorState {
    pub total: u64,
    pub rate: f64,
    /// Unix seconds of the snapshot `total`/`rate` come from.
    pub snapshot_at: i64,
    /// Unix seconds of the last refresh that succeeded; 0 before the first one.
    pub last_refresh_at: i64,
}

impl EstimatorState {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            total: snapshot.total,
            rate: snapshot.rate,
            snapshot_at: snapshot.taken_at,
            last_refresh_at: 0,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            total: self.total,
            rate: self.rate,
            taken_at: self.snapshot_at,
        }
    }

    /// Overwrite the snapshot and mark a refresh at `now`, all fields together.
    pub fn apply(&mut self, snapshot: Snapshot, now: i64) {
        *self = Self {
            total: snapshot.total,
            rate: snapshot.rate,
            snapshot_at: snapshot.taken_at,
            last_refresh_at: now,
        };
    }

    /// Projected count at `now`.
    pub fn extrapolated_at(&self, now: i64) -> u64 {
        extrapolate(self.total, self.rate, now - self.snapshot_at)
    }
}

impl Default for EstimatorState {
    fn default() -> Self {
        Self::new(Snapshot::FALLBACK)
    }
}

/// `round(total + rate * elapsed_secs)`, clamped to `0..=u64::MAX`.
pub fn extrapolate(total: u64, rate: f64, elapsed_secs: i64) -> u64 {
    let value = (total as f64 + rate * elapsed_secs as f64).round();
    if value.is_nan() || value <= 0.0 {
        return 0;
    }
    // `as` saturates at u64::MAX for out-of-range floats.
    value as u64
}
