// basic-env: Basic Environment Registry
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Layered configuration loading.
//!
//! ```text
//! ConfigLoader::new()
//!   .add_toml_file(path)            required, later wins
//!   .add_toml_file_optional(path)   skipped when missing
//!   .add_toml_str(toml)
//!   .with_env_prefix("BENV")        BENV_SECTION__KEY, above all files,
//!                                   list keys split on commas
//!   .set(key, value)                above everything
//!        |
//!        v
//!   build() --> deserialize --> Config::validate() --> Config
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File, FileFormat};

use super::Config;
use crate::error::Result;

/// Where a layer of configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// A file that must exist.
    File(PathBuf),
    /// A file that existed when it was added.
    Optional(PathBuf),
    /// TOML passed as a string.
    Inline,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "[file] {}", path.display()),
            Self::Optional(path) => write!(f, "[optional] {}", path.display()),
            Self::Inline => f.write_str("[string] <string>"),
        }
    }
}

/// Collects configuration layers and merges them into a [`Config`].
pub struct ConfigLoader {
    builder: ConfigBuilder<DefaultState>,
    env_prefix: Option<String>,
    sources: Vec<ConfigSource>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            sources: Vec::new(),
        }
    }

    fn with_file(mut self, path: &Path, required: bool) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(required));
        self
    }

    /// Adds a TOML file; `build()` fails if it is missing or malformed.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(self, path: P) -> Self {
        let path = path.as_ref();
        let mut loader = self.with_file(path, true);
        loader.sources.push(ConfigSource::File(path.to_path_buf()));
        loader
    }

    /// Adds a TOML file that is ignored when it does not exist.
    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(self, path: P) -> Self {
        let path = path.as_ref();
        let mut loader = self.with_file(path, false);
        if path.exists() {
            loader
                .sources
                .push(ConfigSource::Optional(path.to_path_buf()));
        }
        loader
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.sources.push(ConfigSource::Inline);
        self
    }

    /// Reads `PREFIX_SECTION__KEY` variables from the process environment.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Overrides one dotted key, such as `global.log_level`.
    ///
    /// # Errors
    ///
    /// Returns an error if the key path cannot be parsed.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .map_err(|e| anyhow::anyhow!("invalid override '{key}': {e}"))?;
        Ok(self)
    }

    /// Merges every layer and validates the result.
    ///
    /// # Errors
    ///
    /// Fails on a missing required file, malformed TOML, a value that does
    /// not fit `Config`, or an unusable `vars` entry or glob pattern.
    pub fn build(self) -> Result<Config> {
        let mut builder = self.builder;
        if let Some(prefix) = &self.env_prefix {
            builder = builder.add_source(env_layer(prefix));
        }

        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn loaded_files(&self) -> &[ConfigSource] {
        &self.sources
    }

    /// Numbered lines for `benv configs`.
    #[must_use]
    pub fn format_loaded_files(&self) -> Vec<String> {
        self.sources
            .iter()
            .zip(1..)
            .map(|(source, n)| format!("{n}. {source}"))
            .collect()
    }
}

/// Keys read from a comma-separated variable, such as
/// `BENV_ENVIRONMENT__EXCLUDE=TM_*,SECRET`.
const LIST_KEYS: [&str; 5] = [
    "environment.keep",
    "environment.exclude",
    "environment.vars",
    "environment.path_prepend",
    "environment.path_append",
];

/// `PREFIX_SECTION__KEY` variables; list keys split on `,`.
pub(super) fn env_layer(prefix: &str) -> Environment {
    LIST_KEYS.into_iter().fold(
        Environment::with_prefix(prefix)
            .prefix_separator("_")
            .separator("__")
            .list_separator(",")
            .try_parsing(true),
        Environment::with_list_parse_key,
    )
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
