// basic-env: Basic Environment Registry
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `show` and `get` commands.

use anyhow::anyhow;
use std::fmt::Write as _;
use wax::{Glob, Program as _};

use crate::cli::show::{GetArgs, ShowArgs, ShowFormat};
use crate::core::env::container::Env;
use crate::core::env::registry::EnvRegistry;
use crate::error::Result;

/// Print the basic environment.
///
/// # Errors
///
/// Returns an error if a pattern is not a valid glob or JSON rendering fails.
pub fn run_show_command(args: &ShowArgs, registry: &EnvRegistry) -> Result<()> {
    let env = filter_env(&registry.basic_environment(), &args.patterns)?;
    print!("{}", render_env(&env, args.format)?);
    Ok(())
}

/// Print one variable of the basic environment.
///
/// # Errors
///
/// Returns an error if the variable is not set.
pub fn run_get_command(args: &GetArgs, registry: &EnvRegistry) -> Result<()> {
    let env = registry.basic_environment();
    let value = env
        .get(&args.key)
        .ok_or_else(|| anyhow!("'{}' is not set in the basic environment", args.key))?;
    println!("{value}");
    Ok(())
}

/// Keeps the variables whose name matches any of `patterns`.
///
/// No patterns means no filtering.
///
/// # Errors
///
/// Returns an error if a pattern is not a valid glob.
pub fn filter_env(env: &Env, patterns: &[String]) -> Result<Env> {
    if patterns.is_empty() {
        return Ok(env.clone());
    }

    let globs = patterns
        .iter()
        .map(|p| Glob::new(p).map_err(|e| anyhow!("invalid pattern '{p}': {e}")))
        .collect::<Result<Vec<_>>>()?;

    let mut filtered = env.clone();
    filtered.retain(|key, _| globs.iter().any(|glob| glob.is_match(key)));
    Ok(filtered)
}

/// Renders the environment in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_env(env: &Env, format: ShowFormat) -> Result<String> {
    let rendered = match format {
        ShowFormat::Env => env.to_string(),
        ShowFormat::Json => {
            let mut json = serde_json::to_string_pretty(env)?;
            json.push('\n');
            json
        }
        ShowFormat::Export => {
            let mut out = String::new();
            for (key, value) in env.iter() {
                let _ = writeln!(out, "export {key}={}", shell_quote(value));
            }
            out
        }
    };
    Ok(rendered)
}

/// Single-quotes `value` for POSIX shells.
fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
