// basic-env: Basic Environment Registry
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::exec::{INTERRUPTED_EXIT_CODE, exec_with_cancellation};
use super::prepare_registry;
use super::show::{filter_env, render_env};
use crate::cli::Cli;
use crate::cli::exec::ExecArgs;
use crate::cli::show::ShowFormat;
use crate::config::Config;
use crate::core::env::container::Env;
use crate::core::env::registry::EnvRegistry;
use clap::Parser;
use tokio_util::sync::CancellationToken;

fn env_of(pairs: &[(&str, &str)]) -> Env {
    pairs.iter().copied().collect()
}

fn exec_args(command: &[&str]) -> ExecArgs {
    ExecArgs {
        cwd: None,
        command: command.iter().map(ToString::to_string).collect(),
    }
}

#[test]
fn test_render_env_format() {
    let env = env_of(&[("LANG", "en_US"), ("EDITOR", "vi")]);
    assert_eq!(
        render_env(&env, ShowFormat::Env).unwrap(),
        "EDITOR=vi\nLANG=en_US\n"
    );
}

#[test]
fn test_render_export_quotes_values() {
    let env = env_of(&[("MSG", "it's here"), ("EMPTY", "")]);
    insta::assert_snapshot!(render_env(&env, ShowFormat::Export).unwrap(), @r"
    export EMPTY=''
    export MSG='it'\''s here'
    ");
}

#[test]
fn test_render_json() {
    let env = env_of(&[("LANG", "en_US")]);
    let rendered = render_env(&env, ShowFormat::Json).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(parsed, serde_json::json!({ "LANG": "en_US" }));
}

#[test]
fn test_render_empty_env() {
    assert_eq!(render_env(&Env::new(), ShowFormat::Env).unwrap(), "");
    assert_eq!(render_env(&Env::new(), ShowFormat::Json).unwrap(), "{}\n");
}

#[test]
fn test_filter_env() {
    let env = env_of(&[("LC_ALL", "C"), ("LC_TIME", "C"), ("HOME", "/root")]);

    let filtered = filter_env(&env, &["LC_*".to_string()]).unwrap();
    assert_eq!(filtered.keys().collect::<Vec<_>>(), ["LC_ALL", "LC_TIME"]);

    assert_eq!(filter_env(&env, &[]).unwrap(), env);
    assert!(filter_env(&env, &["[".to_string()]).is_err());
}

#[test]
fn test_prepare_registry_applies_cli_last() {
    let config = Config::parse(
        r#"
[environment]
exclude = ["SECRET"]
vars = ["LANG=C", "EDITOR=vi"]
"#,
    )
    .unwrap();
    let cli = Cli::try_parse_from(["benv", "-s", "LANG=en_US", "-u", "EDITOR", "show"]).unwrap();
    let process = env_of(&[("HOME", "/home/me"), ("SECRET", "x")]);

    let registry = prepare_registry(&config, &cli.global, &process).unwrap();

    assert_eq!(
        registry.basic_environment(),
        env_of(&[("HOME", "/home/me"), ("LANG", "en_US")])
    );
}

#[test]
fn test_prepare_registry_clean() {
    let config = Config::builder()
        .add_toml_str("[environment]\nvars = [\"A=1\"]\n")
        .set("environment.inherit", false)
        .unwrap()
        .build()
        .unwrap();
    let cli = Cli::try_parse_from(["benv", "show"]).unwrap();

    let registry = prepare_registry(&config, &cli.global, &env_of(&[("HOME", "/h")])).unwrap();
    assert_eq!(registry.basic_environment(), env_of(&[("A", "1")]));
}

#[cfg(unix)]
#[tokio::test]
async fn test_exec_returns_child_exit_code() {
    let registry = EnvRegistry::with_environment(env_of(&[("PATH", "/bin:/usr/bin")]));

    let code = exec_with_cancellation(
        &exec_args(&["sh", "-c", "exit 7"]),
        &registry,
        CancellationToken::new(),
    )
    .await
    .unwrap();

    assert_eq!(code, 7);
}

#[cfg(unix)]
#[tokio::test]
async fn test_exec_uses_basic_environment_path() {
    // Our own PATH certainly has `sh`, the basic environment has no PATH at all.
    let registry = EnvRegistry::new();

    let err = exec_with_cancellation(&exec_args(&["sh"]), &registry, CancellationToken::new())
        .await
        .unwrap_err();

    assert!(err.to_string().contains("executable not found: 'sh'"), "{err:#}");
}

#[cfg(unix)]
#[tokio::test]
async fn test_exec_interrupted() {
    let registry = EnvRegistry::with_environment(env_of(&[("PATH", "/bin:/usr/bin")]));
    let token = CancellationToken::new();
    token.cancel();

    let code = exec_with_cancellation(&exec_args(&["sh", "-c", "exit 0"]), &registry, token)
        .await
        .unwrap();

    assert_eq!(code, INTERRUPTED_EXIT_CODE);
}
