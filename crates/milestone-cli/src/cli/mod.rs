//! CLI for the milestone download-count tracker.

mod commands;
mod view;

use anyhow::Result;
use clap::{Parser, Subcommand};
use milestone_core::config;

use commands::run_watch;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "milestone")]
#[command(about = "Progress bar toward 500 million Symfony downloads", long_about = None)]
pub struct Cli {
    /// Log refresh attempts and failures (to the log file).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Display the total Symfony downloads progress bar until the goal is reached.
    #[command(alias = "symfony:downloads")]
    Watch {
        /// Data refresh interval in seconds (default 600, or `refresh_interval_secs` from config).
        #[arg(short, long, value_name = "SECONDS")]
        refresh: Option<u64>,

        /// Ring the terminal bell instead of trying `say` when the goal is reached.
        #[arg(long)]
        no_announce: bool,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let cfg = config::load()?;
        if let Ok(path) = config::config_path() {
            tracing::debug!(path = %path.display(), "config: {:?}", cfg);
        }

        match self.command {
            CliCommand::Watch {
                refresh,
                no_announce,
            } => run_watch(&cfg, refresh, no_announce).await?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
