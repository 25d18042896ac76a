//! Extract the `var stats = {...};` JSON block from the stats page.

use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

use super::RefreshError;
use crate::estimator::Snapshot;

/// Line-local and greedy: captures up to the last `;` on the matching line.
static STATS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"var stats = (.*);").expect("stats pattern is valid"));

#[derive(Debug, Deserialize)]
struct StatsPayload {
    total: Option<TotalStats>,
    #[serde(rename = "updatedAt")]
    updated_at: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct TotalStats {
    downloads: Option<f64>,
    #[serde(rename = "perSecond")]
    per_second: Option<f64>,
}

fn require(field: &'static str, value: Option<f64>) -> Result<f64, RefreshError> {
    let value = value.ok_or(RefreshError::MissingField(field))?;
    if !value.is_finite() || value < 0.0 {
        return Err(RefreshError::InvalidField(field));
    }
    Ok(value)
}

/// Parse the stats page body into a snapshot.
pub fn parse_stats_page(body: &str) -> Result<Snapshot, RefreshError> {
    let block = STATS_PATTERN
        .captures(body)
        .and_then(|c| c.get(1))
        .ok_or(RefreshError::MissingBlock)?;
    parse_stats_json(block.as_str())
}

/// Parse the JSON of the stats block (`{"total": {...}, "updatedAt": n}`).
pub fn parse_stats_json(json: &str) -> Result<Snapshot, RefreshError> {
    let payload: StatsPayload = serde_json::from_str(json)?;
    let total = payload.total.ok_or(RefreshError::MissingField("total"))?;
    let downloads = require("total.downloads", total.downloads)?;
    let rate = require("total.perSecond", total.per_second)?;
    let updated_at = require("updatedAt", payload.updated_at)?;

    Ok(Snapshot {
        total: downloads.round() as u64,
        rate,
        taken_at: updated_at.round() as i64,
    })
}
