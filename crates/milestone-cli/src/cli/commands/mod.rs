//! CLI command handlers.

mod watch;

pub use watch::run_watch;

#[cfg(test)]
pub(crate) use watch::watch_options;
