// basic-env: Basic Environment Registry
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable management.
//!
//! # Architecture
//!
//! ```text
//! Env (copy-on-write BTreeMap<String, String>)
//! Sources: current_env(), EnvRecipe::compose(), Env::from_map()
//! Ops: set/get/remove/retain/prepend_path/append_path
//!
//! EnvRegistry: basic_environment() / set_basic_environment()
//! global(): process-lifetime registry for callers without one
//! ```
//!
//! - **Exact keys**: `PATH` and `Path` are distinct
//! - **Copy-on-write**: Clones share data until modified
//! - **UTF-8 internal**: Non-Unicode process variables are skipped

pub mod capture;
pub mod container;
pub mod registry;
pub mod types;


use tracing::debug;

use container::Env;

/// Captures the current process environment.
///
/// Variables whose name or value is not valid Unicode are skipped.
#[must_use]
pub fn current_env() -> Env {
    std::env::vars_os()
        .filter_map(|(key, value)| match (key.into_string(), value.into_string()) {
            (Ok(key), Ok(value)) => Some((key, value)),
            (key, _) => {
                debug!(key = ?key, "skipping non-unicode environment variable");
                None
            }
        })
        .collect()
}

/// Returns the basic environment of the process-lifetime registry.
#[must_use]
pub fn basic_environment() -> Env {
    registry::global().basic_environment()
}

/// Replaces the basic environment of the process-lifetime registry.
pub fn set_basic_environment(env: impl Into<Env>) {
    registry::global().set_basic_environment(env);
}
