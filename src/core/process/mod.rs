// basic-env: Basic Environment Registry
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async process spawning with a fixed environment.
//!
//! ```text
//! ProcessBuilder::which_in("make", basic_env, cwd)
//!   .args() .cwd() .capture_output()
//!   .run() / .run_with_cancellation()
//!       --> tokio::process::Command (env_clear + basic env)
//!       --> ProcessOutput { exit_code, stdout, stderr }
//! ```

pub mod builder;
mod runner;
#[cfg(test)]
mod tests;
