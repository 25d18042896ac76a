//! Time-to-goal estimate and its `HH:MM:SS` rendering.

use std::fmt;

use super::GOAL;

/// Estimated seconds until the goal, or unknown when the rate cannot get us there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eta {
    Known(u64),
    Unknown,
}

impl Eta {
    pub fn seconds(&self) -> Option<u64> {
        match self {
            Eta::Known(s) => Some(*s),
            Eta::Unknown => None,
        }
    }
}

impl fmt::Display for Eta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Eta::Known(s) => f.write_str(&format_eta(*s)),
            Eta::Unknown => f.write_str("-"),
        }
    }
}

/// Seconds until `extrapolated` reaches [`GOAL`] at `rate` downloads per second.
///
/// Zero once the goal is reached. A zero, negative or non-finite rate never
/// reaches the goal, so the estimate is `Unknown`.
pub fn eta_seconds(extrapolated: u64, rate: f64) -> Eta {
    if extrapolated >= GOAL {
        return Eta::Known(0);
    }
    if !rate.is_finite() || rate <= 0.0 {
        return Eta::Unknown;
    }
    let remaining = (GOAL - extrapolated) as f64;
    Eta::Known((remaining / rate).round() as u64)
}

/// `HH:MM:SS`, two digits per field; hours grow past two digits when needed.
pub fn format_eta(seconds: u64) -> String {
    let hours = seconds / 3600;
    let rest = seconds % 3600;
    let minutes = rest / 60;
    let secs = rest % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}
