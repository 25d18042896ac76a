//! Terminal progress bar (indicatif) for the watch loop.

use indicatif::{ProgressBar, ProgressStyle};
use milestone_core::celebrate::Celebration;
use milestone_core::estimator::TickReport;
use milestone_core::watch::ProgressView;
use std::io;

const BAR_TEMPLATE: &str =
    " {pos}/{len} [{bar:40}] {percent:>3}%\nEstimated remaining time \u{1F389}  {msg}";

const BAR_CHARS: &str = "=> ";

fn bar_style() -> ProgressStyle {
    match ProgressStyle::with_template(BAR_TEMPLATE) {
        Ok(style) => style.progress_chars(BAR_CHARS),
        Err(_) => ProgressStyle::default_bar(),
    }
}

pub struct BarView {
    bar: ProgressBar,
    celebration: Celebration,
}

impl BarView {
    pub fn new(announce: bool) -> Self {
        Self {
            bar: ProgressBar::hidden(),
            celebration: Celebration::new(announce),
        }
    }
}

impl ProgressView for BarView {
    fn start(&mut self, goal: u64) {
        self.bar = ProgressBar::new(goal).with_style(bar_style()).with_message("-");
    }

    fn update(&mut self, report: &TickReport) {
        let goal = self.bar.length().unwrap_or(report.total);
        self.bar.set_message(report.eta.to_string());
        self.bar.set_position(report.total.min(goal));
    }

    fn finish(&mut self) {
        self.bar.finish();
    }

    fn celebrate(&mut self) {
        let mut out = io::stdout().lock();
        match self.celebration.perform(&mut out) {
            Ok(true) => tracing::debug!("announced by voice"),
            Ok(false) => tracing::debug!("announced with terminal bell"),
            Err(e) => tracing::warn!("celebration output failed: {}", e),
        }
    }

    fn abandon(&mut self) {
        self.bar.abandon();
    }
}
