// basic-env: Basic Environment Registry
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Composing a basic environment from the process environment.
//!
//! ```text
//! EnvRecipe::compose(&process_env)
//!   1. inherit ? process_env : {}
//!   2. keep     (globs, empty = keep all)
//!   3. exclude  (globs)
//!   4. vars     KEY=VALUE, replace
//!   5. path_prepend / path_append
//!   6. unset
//! ```

use bon::Builder;
use std::path::PathBuf;
use tracing::trace;
use wax::{Glob, Program as _};

use super::container::Env;
use super::current_env;
use super::types::Assignment;
use crate::error::ConfigError;

/// Describes how to build a basic environment.
#[derive(Debug, Clone, Default, Builder)]
pub struct EnvRecipe {
    /// Start from the process environment instead of an empty one.
    #[builder(default)]
    inherit: bool,
    /// Glob patterns of variables to keep; empty keeps everything.
    #[builder(default)]
    keep: Vec<String>,
    /// Glob patterns of variables to drop.
    #[builder(default)]
    exclude: Vec<String>,
    /// Assignments applied after filtering.
    #[builder(default)]
    vars: Vec<Assignment>,
    /// Directories placed in front of `PATH`, in order.
    #[builder(default)]
    path_prepend: Vec<PathBuf>,
    /// Directories added to the end of `PATH`, in order.
    #[builder(default)]
    path_append: Vec<PathBuf>,
    /// Variables removed last.
    #[builder(default)]
    unset: Vec<String>,
}

impl EnvRecipe {
    #[must_use]
    pub const fn inherits(&self) -> bool {
        self.inherit
    }

    /// Adds an assignment applied after the configured ones.
    pub fn push_var(&mut self, assignment: Assignment) -> &mut Self {
        self.vars.push(assignment);
        self
    }

    /// Adds a variable to remove at the end.
    pub fn push_unset(&mut self, key: impl Into<String>) -> &mut Self {
        self.unset.push(key.into());
        self
    }

    /// Builds the basic environment starting from `process_env`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a `keep` or `exclude` pattern
    /// is not a valid glob.
    pub fn compose(&self, process_env: &Env) -> std::result::Result<Env, ConfigError> {
        let keep = compile_globs("keep", &self.keep)?;
        let exclude = compile_globs("exclude", &self.exclude)?;

        let mut env = if self.inherit {
            process_env.clone()
        } else {
            Env::new()
        };
        trace!(inherit = self.inherit, vars = env.len(), "composing basic environment");

        if !keep.is_empty() {
            env.retain(|key, _| keep.iter().any(|glob| glob.is_match(key)));
        }
        if !exclude.is_empty() {
            env.retain(|key, _| !exclude.iter().any(|glob| glob.is_match(key)));
        }

        for assignment in &self.vars {
            env.set(assignment.key(), assignment.value());
        }

        for dir in self.path_prepend.iter().rev() {
            env.prepend_path(dir);
        }
        for dir in &self.path_append {
            env.append_path(dir);
        }

        for key in &self.unset {
            env.remove(key);
        }

        trace!(vars = env.len(), "basic environment composed");
        Ok(env)
    }

    /// Builds the basic environment from the running process's environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a glob pattern is invalid.
    pub fn capture(&self) -> std::result::Result<Env, ConfigError> {
        self.compose(&current_env())
    }
}

fn compile_globs<'p>(
    key: &str,
    patterns: &'p [String],
) -> std::result::Result<Vec<Glob<'p>>, ConfigError> {
    patterns
        .iter()
        .map(|pattern| {
            Glob::new(pattern).map_err(|e| {
                ConfigError::invalid("environment", key, format!("bad pattern '{pattern}': {e}"))
            })
        })
        .collect()
}
