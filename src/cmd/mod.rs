// basic-env: Basic Environment Registry
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! Config + GlobalOptions --prepare_registry()--> EnvRegistry
//!                                                     |
//!                                 cmd::run_* handlers (&EnvRegistry)
//!                                 show, get, exec, options, configs
//! ```

pub mod config;
pub mod exec;
pub mod show;

#[cfg(test)]
mod tests;

use tracing::debug;

use crate::cli::global::GlobalOptions;
use crate::config::Config;
use crate::core::env::container::Env;
use crate::core::env::registry::EnvRegistry;
use crate::error::Result;

/// Composes the basic environment and stores it in a new registry.
///
/// `process_env` is the environment inherited when the configuration asks
/// for it; `main` passes [`current_env()`](crate::core::env::current_env).
///
/// # Errors
///
/// Returns an error if the configured recipe is invalid.
pub fn prepare_registry(
    config: &Config,
    global: &GlobalOptions,
    process_env: &Env,
) -> Result<EnvRegistry> {
    let mut recipe = config.environment.recipe()?;
    global.apply_to_recipe(&mut recipe);

    let env = recipe.compose(process_env)?;
    debug!(inherit = recipe.inherits(), vars = env.len(), "basic environment ready");

    let registry = EnvRegistry::new();
    registry.set_basic_environment(env);
    Ok(registry)
}
