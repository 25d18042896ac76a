//! `milestone watch` – extrapolate the download count until the goal is reached.

use anyhow::{Context, Result};
use milestone_core::config::MilestoneConfig;
use milestone_core::estimator::EstimatorState;
use milestone_core::source::HttpStatsSource;
use milestone_core::watch::{self, SystemClock, WatchOptions, WatchOutcome};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::cli::view::BarView;

/// Resolve loop options: `--refresh` wins over the config file.
pub(crate) fn watch_options(cfg: &MilestoneConfig, refresh: Option<u64>) -> WatchOptions {
    let mut options = WatchOptions::from(cfg);
    if let Some(secs) = refresh {
        options.refresh_interval_secs = secs;
    }
    options
}

pub async fn run_watch(
    cfg: &MilestoneConfig,
    refresh: Option<u64>,
    no_announce: bool,
) -> Result<()> {
    let options = watch_options(cfg, refresh);
    let announce = cfg.announce && !no_announce;
    let source = HttpStatsSource::from_config(cfg);

    let abort = Arc::new(AtomicBool::new(false));
    let ctrl_c = tokio::spawn({
        let abort = Arc::clone(&abort);
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                abort.store(true, Ordering::Relaxed);
            }
        }
    });

    let outcome = tokio::task::spawn_blocking({
        let abort = Arc::clone(&abort);
        move || {
            let mut state = EstimatorState::default();
            let mut view = BarView::new(announce);
            watch::watch(&mut state, &options, &source, &mut view, &SystemClock, &abort)
        }
    })
    .await
    .context("watch loop failed")?;

    ctrl_c.abort();

    match outcome {
        WatchOutcome::GoalReached { total } => tracing::info!("goal reached at {}", total),
        WatchOutcome::Cancelled => println!(),
    }
    Ok(())
}
