//! CLI parse and option resolution tests.

use super::{Cli, CliCommand};
use crate::cli::commands::watch_options;
use clap::Parser;
use milestone_core::config::MilestoneConfig;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_watch_defaults() {
    let cli = parse(&["milestone", "watch"]);
    assert!(!cli.verbose);
    match cli.command {
        CliCommand::Watch {
            refresh,
            no_announce,
        } => {
            assert_eq!(refresh, None);
            assert!(!no_announce);
        }
    }
}

#[test]
fn cli_parse_watch_refresh_long_and_short() {
    for args in [
        &["milestone", "watch", "--refresh", "120"][..],
        &["milestone", "watch", "-r", "120"][..],
    ] {
        match parse(args).command {
            CliCommand::Watch { refresh, .. } => assert_eq!(refresh, Some(120)),
        }
    }
}

#[test]
fn cli_parse_symfony_alias() {
    match parse(&["milestone", "symfony:downloads", "--no-announce"]).command {
        CliCommand::Watch { no_announce, .. } => assert!(no_announce),
    }
}

#[test]
fn cli_parse_global_verbose() {
    assert!(parse(&["milestone", "watch", "-v"]).verbose);
    assert!(parse(&["milestone", "--verbose", "watch"]).verbose);
}

#[test]
fn cli_rejects_non_numeric_refresh() {
    assert!(Cli::try_parse_from(["milestone", "watch", "--refresh", "soon"]).is_err());
    assert!(Cli::try_parse_from(["milestone", "watch", "--refresh", "-5"]).is_err());
}

#[test]
fn cli_requires_subcommand() {
    assert!(Cli::try_parse_from(["milestone"]).is_err());
}

#[test]
fn refresh_flag_overrides_config() {
    let cfg = MilestoneConfig {
        refresh_interval_secs: 300,
        ..MilestoneConfig::default()
    };
    assert_eq!(watch_options(&cfg, None).refresh_interval_secs, 300);
    assert_eq!(watch_options(&cfg, Some(60)).refresh_interval_secs, 60);
    assert_eq!(watch_options(&cfg, Some(60)).tick_interval, cfg.tick_interval());
}
