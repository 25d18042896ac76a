use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Global configuration read from `~/.config/milestone/config.toml`.
///
/// Every field is optional in the file; missing fields take the defaults below.
/// The goal and the stats URL are fixed and deliberately absent here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MilestoneConfig {
    /// Minimum seconds between two refresh attempts (overridden by `--refresh`).
    pub refresh_interval_secs: u64,
    /// Delay between two ticks of the watch loop, in milliseconds.
    pub tick_interval_ms: u64,
    /// Connect timeout for the stats page request.
    pub connect_timeout_secs: u64,
    /// Total timeout for the stats page request.
    pub request_timeout_secs: u64,
    /// Try `say` before falling back to terminal bells when the goal is reached.
    pub announce: bool,
}

impl Default for MilestoneConfig {
    fn default() -> Self {
        Self {
            refresh_interval_secs: 600,
            tick_interval_ms: 1000,
            connect_timeout_secs: 15,
            request_timeout_secs: 30,
            announce: true,
        }
    }
}

impl MilestoneConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("milestone")?;
    Ok(xdg_dirs.get_config_home().join("milestone").join("config.toml"))
}

/// Load configuration from the XDG config dir, or defaults if there is no file.
///
/// Nothing is written back; the tool keeps no state between runs.
pub fn load() -> Result<MilestoneConfig> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("milestone")?;
    match xdg_dirs.find_config_file("config.toml") {
        Some(path) => load_from_path(&path),
        None => Ok(MilestoneConfig::default()),
    }
}

pub fn load_from_path(path: &Path) -> Result<MilestoneConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let cfg: MilestoneConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(cfg)
}
