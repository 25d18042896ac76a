//! Stats page fetching.
//!
//! Uses the curl crate (libcurl) to GET the Symfony "500 million" page and
//! pulls the embedded `var stats = {...};` JSON out of it.

mod error;
mod parse;

pub use error::{RefreshError, RefreshErrorKind};
pub use parse::{parse_stats_json, parse_stats_page};

use std::time::Duration;

use crate::config::MilestoneConfig;
use crate::estimator::Snapshot;

/// Page publishing the live download counter.
pub const STATS_URL: &str = "https://symfony.com/500million";

/// Anything that can produce a fresh [`Snapshot`].
pub trait StatsSource {
    /// Where the stats come from, for log lines.
    fn location(&self) -> &str;

    /// Fetch and parse one snapshot. May block.
    fn fetch_snapshot(&self) -> Result<Snapshot, RefreshError>;
}

/// Blocking HTTP source backed by libcurl.
#[derive(Debug, Clone)]
pub struct HttpStatsSource {
    url: String,
    connect_timeout: Duration,
    timeout: Duration,
}

impl HttpStatsSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            connect_timeout: Duration::from_secs(15),
            timeout: Duration::from_secs(30),
        }
    }

    /// Source for [`STATS_URL`] with timeouts from the config.
    pub fn from_config(cfg: &MilestoneConfig) -> Self {
        Self::new(STATS_URL).with_timeouts(cfg.connect_timeout(), cfg.request_timeout())
    }

    pub fn with_timeouts(mut self, connect_timeout: Duration, timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self.timeout = timeout;
        self
    }

    /// GET the page body. Follows redirects; non-2xx is an error.
    /// Runs in the current thread; call from `spawn_blocking` if used from async code.
    pub fn fetch_page(&self) -> Result<String, RefreshError> {
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(&self.url)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;
        easy.useragent(concat!("milestone/", env!("CARGO_PKG_VERSION")))?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(RefreshError::HttpStatus(code));
        }

        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

impl StatsSource for HttpStatsSource {
    fn location(&self) -> &str {
        &self.url
    }

    fn fetch_snapshot(&self) -> Result<Snapshot, RefreshError> {
        let body = self.fetch_page()?;
        parse_stats_page(&body)
    }
}
