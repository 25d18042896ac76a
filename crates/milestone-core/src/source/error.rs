//! Refresh error type and its coarse classification.

use thiserror::Error;

/// Why a refresh did not produce a snapshot. Never fatal; the caller keeps
/// the previous snapshot.
#[derive(Debug, Error)]
pub enum RefreshError {
    /// Curl reported an error (DNS, connect, timeout, TLS, ...).
    #[error("could not download stats page: {0}")]
    Transport(#[from] curl::Error),
    /// The page answered with a non-2xx status.
    #[error("stats page returned HTTP {0}")]
    HttpStatus(u32),
    /// No `var stats = ...;` assignment in the page.
    #[error("could not find stats block in page")]
    MissingBlock,
    /// The stats block is not valid JSON for the expected shape.
    #[error("stats block is not valid JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),
    /// A required field is absent or null.
    #[error("stats block is missing required field `{0}`")]
    MissingField(&'static str),
    /// A required field is negative or not a finite number.
    #[error("stats field `{0}` is not a valid non-negative number")]
    InvalidField(&'static str),
}

/// Coarse kind of a refresh failure, for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshErrorKind {
    /// Network/transport failure reaching the page.
    Fetch,
    /// Page fetched but the embedded block is absent.
    Parse,
    /// Block found but the data is not usable.
    Schema,
}

impl RefreshError {
    pub fn kind(&self) -> RefreshErrorKind {
        match self {
            RefreshError::Transport(_) | RefreshError::HttpStatus(_) => RefreshErrorKind::Fetch,
            RefreshError::MissingBlock => RefreshErrorKind::Parse,
            RefreshError::MalformedJson(_)
            | RefreshError::MissingField(_)
            | RefreshError::InvalidField(_) => RefreshErrorKind::Schema,
        }
    }
}
