pub mod config;
pub mod logging;

pub mod celebrate;
pub mod estimator;
pub mod source;
pub mod watch;
