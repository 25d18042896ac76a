//! Integration test: fetch a stats page over HTTP and drive the watch loop with it.
//!
//! Starts a minimal local server, points `HttpStatsSource` at it, and checks
//! both the soft-failure paths and a full run up to the goal.

mod common;

use std::cell::Cell;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use milestone_core::estimator::{
    EstimatorState, RefreshGate, RefreshOutcome, Snapshot, TickReport, GOAL,
};
use milestone_core::source::{HttpStatsSource, RefreshError, RefreshErrorKind, StatsSource};
use milestone_core::watch::{self, Clock, ProgressView, WatchOptions, WatchOutcome};

const MINUTE: i64 = 1_474_525_500;

fn source(url: &str) -> HttpStatsSource {
    HttpStatsSource::new(url).with_timeouts(Duration::from_secs(5), Duration::from_secs(5))
}

struct SteppingClock(Cell<i64>);

impl Clock for SteppingClock {
    fn now(&self) -> i64 {
        self.0.get()
    }

    fn sleep(&self, _dur: Duration, _abort: &AtomicBool) {
        self.0.set(self.0.get() + 1);
    }
}

#[derive(Default)]
struct CountingView {
    reports: Vec<TickReport>,
    celebrations: u32,
}

impl ProgressView for CountingView {
    fn start(&mut self, _goal: u64) {}

    fn update(&mut self, report: &TickReport) {
        self.reports.push(report.clone());
    }

    fn finish(&mut self) {}

    fn celebrate(&mut self) {
        self.celebrations += 1;
    }
}

#[test]
fn fetches_snapshot_from_page() {
    let server = common::stats_server::start(&common::stats_server::stats_page(
        497_000_000,
        12.5,
        MINUTE - 30,
    ));
    let snap = source(&server.url).fetch_snapshot().expect("snapshot");
    assert_eq!(snap.total, 497_000_000);
    assert!((snap.rate - 12.5).abs() < 1e-9);
    assert_eq!(snap.taken_at, MINUTE - 30);
    assert_eq!(server.hits(), 1);
}

#[test]
fn http_error_status_is_fetch_failure() {
    let server = common::stats_server::start_with_status(503, "maintenance");
    let err = source(&server.url).fetch_snapshot().unwrap_err();
    assert!(matches!(err, RefreshError::HttpStatus(503)));
    assert_eq!(err.kind(), RefreshErrorKind::Fetch);
}

#[test]
fn page_without_stats_is_parse_failure() {
    let server = common::stats_server::start("<html><body>coming soon</body></html>");
    let err = source(&server.url).fetch_snapshot().unwrap_err();
    assert_eq!(err.kind(), RefreshErrorKind::Parse);
}

#[test]
fn malformed_page_leaves_state_untouched() {
    let server = common::stats_server::start(
        "<script>var stats = {\"total\":{\"downloads\":1},\"updatedAt\":2};</script>",
    );
    let mut state = EstimatorState::default();
    let before = state.clone();
    let report =
        milestone_core::estimator::tick(MINUTE, &mut state, 600, &source(&server.url));
    assert_eq!(report.refresh, RefreshOutcome::Failed);
    assert_eq!(state, before);
    assert_eq!(server.hits(), 1);
}

#[test]
fn unaligned_tick_never_touches_the_network() {
    let server = common::stats_server::start(&common::stats_server::stats_page(1, 1.0, 1));
    let mut state = EstimatorState::default();
    let report =
        milestone_core::estimator::tick(MINUTE + 1, &mut state, 600, &source(&server.url));
    assert_eq!(
        report.refresh,
        RefreshOutcome::Skipped(RefreshGate::NotMinuteAligned)
    );
    assert_eq!(server.hits(), 0);
}

#[test]
fn watch_runs_to_goal_on_refreshed_data() {
    // Fallback data is years away from the goal; the refresh brings it to 10 downloads short.
    let server = common::stats_server::start(&common::stats_server::stats_page(
        GOAL - 10,
        5.0,
        MINUTE,
    ));
    let mut state = EstimatorState::new(Snapshot::FALLBACK);
    let clock = SteppingClock(Cell::new(MINUTE));
    let mut view = CountingView::default();
    let abort = AtomicBool::new(false);

    let outcome = watch::watch(
        &mut state,
        &WatchOptions::default(),
        &source(&server.url),
        &mut view,
        &clock,
        &abort,
    );

    assert_eq!(outcome, WatchOutcome::GoalReached { total: GOAL });
    assert_eq!(view.celebrations, 1);
    assert_eq!(view.reports.len(), 3);
    assert_eq!(view.reports[0].refresh, RefreshOutcome::Refreshed);
    assert_eq!(view.reports[0].eta.to_string(), "00:00:02");
    assert_eq!(state.last_refresh_at, MINUTE);
    assert_eq!(server.hits(), 1);
    assert!(!abort.load(Ordering::Relaxed));
}
