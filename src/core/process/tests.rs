// basic-env: Basic Environment Registry
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::builder::{ProcessBuilder, ProcessFlags};
use crate::core::env::container::Env;
use crate::error::ProcessError;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

#[cfg(not(windows))]
#[tokio::test]
async fn test_process_sees_only_given_env() {
    let mut env = Env::new();
    env.set("TEST_VAR", "test_value");

    let output = ProcessBuilder::raw(r#"echo "$TEST_VAR [$HOME]""#)
        .env(env)
        .capture_output()
        .run()
        .await
        .expect("process should succeed");

    assert!(output.success());
    insta::assert_snapshot!(output.stdout().trim(), @"test_value []");
}

#[tokio::test]
async fn test_process_exit_code_allowed() {
    let output = ProcessBuilder::raw("exit 42")
        .flag(ProcessFlags::ALLOW_FAILURE)
        .quiet()
        .run()
        .await
        .expect("process should complete");

    assert_eq!(output.exit_code(), 42);
    assert!(!output.success());
}

#[tokio::test]
async fn test_process_exit_code_rejected() {
    let err = ProcessBuilder::raw("exit 3")
        .quiet()
        .run()
        .await
        .expect_err("non-zero exit should fail");

    let process_err = err.downcast_ref::<ProcessError>();
    assert!(
        matches!(process_err, Some(ProcessError::NonZeroExit { code: 3, .. })),
        "unexpected error: {err:#}"
    );
}

#[tokio::test]
async fn test_process_spawn_failure() {
    let err = ProcessBuilder::new("/definitely/not/a/program")
        .run()
        .await
        .expect_err("spawn should fail");

    assert!(matches!(
        err.downcast_ref::<ProcessError>(),
        Some(ProcessError::SpawnFailed { .. })
    ));
}

#[cfg(unix)]
#[test]
fn test_which_in_uses_given_path() {
    let mut env = Env::new();
    env.set("PATH", "/bin:/usr/bin");

    let builder = ProcessBuilder::which_in("sh", env.clone(), "/").expect("sh should be found");
    assert!(builder.program().ends_with("sh"));
    assert_eq!(builder.environment(), Some(&env));
}

#[cfg(unix)]
#[test]
fn test_which_in_without_path_fails() {
    let err = ProcessBuilder::which_in("sh", Env::new(), "/").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"executable not found: 'sh' (not in PATH)");
}

#[tokio::test]
async fn test_process_already_cancelled() {
    let token = CancellationToken::new();
    token.cancel();

    let output = ProcessBuilder::raw("exit 0")
        .run_with_cancellation(token)
        .await
        .expect("cancelled run should not fail");

    assert!(output.is_interrupted());
    assert!(!output.success());
}

#[cfg(unix)]
#[tokio::test]
async fn test_process_cancelled_while_running() {
    let token = CancellationToken::new();
    let canceller = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        canceller.cancel();
    });

    let output = ProcessBuilder::raw("sleep 30")
        .quiet()
        .run_with_cancellation(token)
        .await
        .expect("interrupted run should not fail");

    assert!(output.is_interrupted());
}
