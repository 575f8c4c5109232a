// basic-env: Basic Environment Registry
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. benv.toml (cwd)
//! 3. --config files, in order
//! 4. BENV_* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! BENV_GLOBAL__LOG_LEVEL=4        → global.log_level = 4
//! BENV_ENVIRONMENT__INHERIT=false → environment.inherit = false
//! ```
//!
//! # Example
//!
//! ```toml
//! [environment]
//! inherit = true
//! exclude = ["TM_*"]
//! vars = ["LANG=en_US.UTF-8"]
//! path_prepend = ["/opt/tools/bin"]
//! ```

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::core::env::container::Env;
use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use types::{EnvironmentConfig, GlobalConfig};

/// Default configuration file looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "benv.toml";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Basic environment composition.
    pub environment: EnvironmentConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use basic_env::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file("benv.toml")
    ///     .add_toml_file_optional("local.toml")
    ///     .with_env_prefix("BENV")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Checks values that deserialize fine but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for malformed `vars` entries or
    /// invalid glob patterns.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        self.environment.recipe()?.compose(&Env::new()).map(|_| ())
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_environment_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| {
                format!("{key:<max_key_len$} = {value}")
                    .trim_end()
                    .to_string()
            })
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.log_level".into(),
            self.global.log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
    }

    fn format_environment_options(&self, options: &mut BTreeMap<String, String>) {
        let env = &self.environment;
        let join_paths = |paths: &[std::path::PathBuf]| {
            paths
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        };

        options.insert("environment.inherit".into(), env.inherit.to_string());
        options.insert("environment.keep".into(), env.keep.join(", "));
        options.insert("environment.exclude".into(), env.exclude.join(", "));
        options.insert(
            "environment.path_prepend".into(),
            join_paths(&env.path_prepend),
        );
        options.insert(
            "environment.path_append".into(),
            join_paths(&env.path_append),
        );
        for entry in &env.vars {
            let key = entry.split_once('=').map_or(entry.as_str(), |(k, _)| k);
            options.insert(format!("environment.vars.{key}"), entry.clone());
        }
    }
}
