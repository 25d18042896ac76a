//! One step of the watch loop: maybe refresh, then extrapolate and estimate.

use crate::source::StatsSource;

use super::{eta_seconds, refresh_gate, EstimatorState, Eta, RefreshGate, GOAL};

/// What happened to the refresh on a given tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// A guard held the refresh back; nothing was fetched.
    Skipped(RefreshGate),
    /// Fetched and applied a new snapshot.
    Refreshed,
    /// Fetch or parse failed; the previous snapshot is kept.
    Failed,
}

/// Result of one tick, handed to the progress view.
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    /// Unix seconds the tick ran at.
    pub now: i64,
    /// Extrapolated download count.
    pub total: u64,
    /// Time left until [`GOAL`].
    pub eta: Eta,
    pub refresh: RefreshOutcome,
}

impl TickReport {
    pub fn goal_reached(&self) -> bool {
        self.total >= GOAL
    }

    /// Fraction of the goal in [0.0, 1.0].
    pub fn fraction(&self) -> f64 {
        (self.total as f64 / GOAL as f64).min(1.0)
    }
}

/// Run one tick at `now`.
///
/// Refresh errors are logged at debug level and swallowed: a stale estimate is
/// better than none. Blocks for the duration of the fetch when one runs.
pub fn tick<S>(
    now: i64,
    state: &mut EstimatorState,
    refresh_interval_secs: u64,
    source: &S,
) -> TickReport
where
    S: StatsSource + ?Sized,
{
    let refresh = match refresh_gate(now, state.last_refresh_at, refresh_interval_secs) {
        RefreshGate::Open => {
            tracing::debug!("refreshing stats from {}", source.location());
            match source.fetch_snapshot() {
                Ok(snapshot) => {
                    state.apply(snapshot, now);
                    tracing::debug!(
                        total = snapshot.total,
                        rate = snapshot.rate,
                        taken_at = snapshot.taken_at,
                        "stats refreshed"
                    );
                    RefreshOutcome::Refreshed
                }
                Err(e) => {
                    tracing::debug!(kind = ?e.kind(), "stats refresh failed: {}", e);
                    RefreshOutcome::Failed
                }
            }
        }
        gate => RefreshOutcome::Skipped(gate),
    };

    let total = state.extrapolated_at(now);
    TickReport {
        now,
        total,
        eta: eta_seconds(total, state.rate),
        refresh,
    }
}
