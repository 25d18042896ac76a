//! The watch loop: tick about once a second until the goal is reached.
//!
//! Two phases only. While polling, every tick refreshes (when the guards
//! allow), extrapolates and updates the view. The first tick at or past the
//! goal finishes the view, celebrates once and returns. An abort request
//! returns `Cancelled` without celebrating.

mod clock;

pub use clock::{Clock, SystemClock};

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::config::MilestoneConfig;
use crate::estimator::{self, EstimatorState, TickReport, GOAL};
use crate::source::StatsSource;

/// Loop tuning, usually derived from [`MilestoneConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchOptions {
    pub refresh_interval_secs: u64,
    pub tick_interval: Duration,
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self::from(&MilestoneConfig::default())
    }
}

impl From<&MilestoneConfig> for WatchOptions {
    fn from(cfg: &MilestoneConfig) -> Self {
        Self {
            refresh_interval_secs: cfg.refresh_interval_secs,
            tick_interval: cfg.tick_interval(),
        }
    }
}

/// How the loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchOutcome {
    GoalReached { total: u64 },
    Cancelled,
}

/// Where progress goes. The CLI draws a terminal bar; tests record calls.
pub trait ProgressView {
    fn start(&mut self, goal: u64);
    fn update(&mut self, report: &TickReport);
    /// Called once, on the tick that reaches the goal.
    fn finish(&mut self);
    /// Called once, right after `finish`.
    fn celebrate(&mut self);
    /// Called when the loop is cancelled.
    fn abandon(&mut self) {}
}

/// Run the loop until the goal is reached or `abort` is set.
pub fn watch<S, V, C>(
    state: &mut EstimatorState,
    options: &WatchOptions,
    source: &S,
    view: &mut V,
    clock: &C,
    abort: &AtomicBool,
) -> WatchOutcome
where
    S: StatsSource + ?Sized,
    V: ProgressView + ?Sized,
    C: Clock + ?Sized,
{
    tracing::info!(
        goal = GOAL,
        refresh_interval_secs = options.refresh_interval_secs,
        "watching {}",
        source.location()
    );
    view.start(GOAL);

    loop {
        if abort.load(Ordering::Relaxed) {
            tracing::info!("watch cancelled");
            view.abandon();
            return WatchOutcome::Cancelled;
        }

        let report = estimator::tick(clock.now(), state, options.refresh_interval_secs, source);
        view.update(&report);

        if report.goal_reached() {
            tracing::info!(total = report.total, "goal reached");
            view.finish();
            view.celebrate();
            return WatchOutcome::GoalReached {
                total: report.total,
            };
        }

        clock.sleep(options.tick_interval, abort);
    }
}
