// basic-env: Basic Environment Registry
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, EnvironmentConfig
//! EnvironmentConfig --recipe()--> EnvRecipe
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::core::env::capture::EnvRecipe;
use crate::core::env::types::Assignment;
use crate::error::ConfigError;
use crate::logging::LogLevel;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console output (0-6).
    pub log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file; no file logging when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// How the basic environment is composed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnvironmentConfig {
    /// Start from the process environment.
    pub inherit: bool,
    /// Glob patterns of inherited variables to keep (empty = all).
    pub keep: Vec<String>,
    /// Glob patterns of inherited variables to drop.
    pub exclude: Vec<String>,
    /// `KEY=VALUE` assignments.
    pub vars: Vec<String>,
    /// Directories placed in front of `PATH`.
    pub path_prepend: Vec<PathBuf>,
    /// Directories appended to `PATH`.
    pub path_append: Vec<PathBuf>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            inherit: true,
            keep: Vec::new(),
            exclude: Vec::new(),
            vars: Vec::new(),
            path_prepend: Vec::new(),
            path_append: Vec::new(),
        }
    }
}

impl EnvironmentConfig {
    /// Parses the `vars` entries.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for the first malformed entry.
    pub fn assignments(&self) -> std::result::Result<Vec<Assignment>, ConfigError> {
        self.vars.iter().map(|entry| entry.parse()).collect()
    }

    /// Builds the recipe described by this section.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a `vars` entry is malformed.
    pub fn recipe(&self) -> std::result::Result<EnvRecipe, ConfigError> {
        Ok(EnvRecipe::builder()
            .inherit(self.inherit)
            .keep(self.keep.clone())
            .exclude(self.exclude.clone())
            .vars(self.assignments()?)
            .path_prepend(self.path_prepend.clone())
            .path_append(self.path_append.clone())
            .build())
    }
}
