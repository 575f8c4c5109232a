// basic-env: Basic Environment Registry
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `exec` command: run a program in the basic environment.
//!
//! ```text
//! registry.basic_environment()
//!        |
//!        v
//! which_in(program, env PATH, cwd)
//!        |
//!        v
//! run_with_cancellation(ctrl-c token) --> exit code
//! ```

use anyhow::Context;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::cli::exec::ExecArgs;
use crate::core::env::registry::EnvRegistry;
use crate::core::process::builder::{ProcessBuilder, ProcessFlags};
use crate::error::Result;

/// Exit code reported when the child was interrupted.
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Runs the program and returns its exit code.
///
/// Ctrl-C kills the child.
///
/// # Errors
///
/// Returns an error if the program cannot be found or spawned.
pub async fn run_exec_command(args: &ExecArgs, registry: &EnvRegistry) -> Result<i32> {
    let token = CancellationToken::new();
    let ctrl_c = {
        let token = token.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("interrupt received");
                token.cancel();
            }
        })
    };

    let result = exec_with_cancellation(args, registry, token).await;
    ctrl_c.abort();
    result
}

/// Runs the program until it exits or `token` is cancelled.
///
/// # Errors
///
/// Returns an error if the program cannot be found or spawned.
pub async fn exec_with_cancellation(
    args: &ExecArgs,
    registry: &EnvRegistry,
    token: CancellationToken,
) -> Result<i32> {
    let cwd = match &args.cwd {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("failed to get current directory")?,
    };

    let env = registry.basic_environment();
    debug!(program = args.program(), vars = env.len(), "resolving");

    let output = ProcessBuilder::which_in(args.program(), env, &cwd)?
        .args(args.args())
        .cwd(&cwd)
        .flag(ProcessFlags::ALLOW_FAILURE)
        .inherit_stdio()
        .run_with_cancellation(token)
        .await?;

    if output.is_interrupted() {
        return Ok(INTERRUPTED_EXIT_CODE);
    }
    Ok(output.exit_code())
}
