// basic-env: Basic Environment Registry
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns.

use basic_env::cli::show::ShowFormat;
use basic_env::cli::{Cli, Command};
use basic_env::cmd::prepare_registry;
use basic_env::config::Config;
use basic_env::core::env::container::Env;
use clap::Parser;

// =============================================================================
// Version Command
// =============================================================================

#[test]
fn cli_version_command() {
    let cli = Cli::try_parse_from(["benv", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_version_alias() {
    let cli = Cli::try_parse_from(["benv", "-v"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_no_command() {
    let cli = Cli::try_parse_from(["benv"]).unwrap();
    assert!(cli.command.is_none());
}

// =============================================================================
// Show / Get / Exec
// =============================================================================

#[test]
fn cli_show_json_with_patterns() {
    let cli = Cli::try_parse_from(["benv", "show", "-f", "json", "LC_*"]).unwrap();
    let Some(Command::Show(args)) = cli.command else {
        panic!("expected show command");
    };
    assert_eq!(args.format, ShowFormat::Json);
    assert_eq!(args.patterns, ["LC_*"]);
}

#[test]
fn cli_get_requires_key() {
    assert!(Cli::try_parse_from(["benv", "get"]).is_err());

    let cli = Cli::try_parse_from(["benv", "get", "LANG"]).unwrap();
    let Some(Command::Get(args)) = cli.command else {
        panic!("expected get command");
    };
    assert_eq!(args.key, "LANG");
}

#[test]
fn cli_exec_trailing_args() {
    let cli = Cli::try_parse_from(["benv", "exec", "make", "-j4", "all"]).unwrap();
    let Some(Command::Exec(args)) = cli.command else {
        panic!("expected exec command");
    };
    assert!(args.cwd.is_none());
    assert_eq!(args.program(), "make");
    assert_eq!(args.args(), ["-j4", "all"]);
}

// =============================================================================
// Global options into the basic environment
// =============================================================================

#[test]
fn cli_set_and_unset_shape_environment() {
    let cli = Cli::try_parse_from([
        "benv", "--set", "LANG=C", "--set", "EMPTY=", "--unset", "HOME", "show",
    ])
    .unwrap();
    let process: Env = [("HOME", "/home/me"), ("SHELL", "/bin/sh")]
        .into_iter()
        .collect();

    let registry = prepare_registry(&Config::default(), &cli.global, &process).unwrap();
    let env = registry.basic_environment();

    assert_eq!(env.keys().collect::<Vec<_>>(), ["EMPTY", "LANG", "SHELL"]);
    assert_eq!(env.get("EMPTY"), Some(""));
}

#[test]
fn cli_clean_drops_process_environment() {
    let cli = Cli::try_parse_from(["benv", "--clean", "-s", "A=1", "show"]).unwrap();
    let config = cli
        .global
        .apply_config_overrides(Config::builder())
        .unwrap()
        .build()
        .unwrap();
    let process: Env = [("HOME", "/home/me")].into_iter().collect();

    let registry = prepare_registry(&config, &cli.global, &process).unwrap();

    assert_eq!(registry.basic_environment().keys().collect::<Vec<_>>(), ["A"]);
}

#[test]
fn cli_rejects_empty_key() {
    assert!(Cli::try_parse_from(["benv", "-s", "=value", "show"]).is_err());
}
