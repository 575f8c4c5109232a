// basic-env: Basic Environment Registry
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Types for environment variable management.
//!
//! # Architecture
//!
//! ```text
//! EnvFlags: Replace | Append | Prepend
//! Assignment: "KEY=VALUE" (split at first '=')
//! PATH_SEPARATOR: ':' (Unix) / ';' (Windows)
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Separator between `PATH` entries on this platform.
pub const PATH_SEPARATOR: &str = if cfg!(windows) { ";" } else { ":" };

/// Flags for environment variable operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnvFlags {
    /// Replace the existing value (default)
    #[default]
    Replace,
    /// Append to the existing value
    Append,
    /// Prepend to the existing value
    Prepend,
}

/// A single `KEY=VALUE` assignment.
///
/// Parsed from config `vars` entries and `--set` arguments. The key ends at
/// the first `=`, so values may themselves contain `=`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    key: String,
    value: String,
}

impl Assignment {
    /// Creates an assignment after validating the key and value.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the key is empty or contains
    /// `=` or NUL, or if the value contains NUL.
    pub fn new(
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> std::result::Result<Self, ConfigError> {
        let key = key.into();
        let value = value.into();
        validate_key(&key)?;
        if value.contains('\0') {
            return Err(ConfigError::invalid(
                "environment",
                key,
                "value must not contain NUL",
            ));
        }
        Ok(Self { key, value })
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Splits the assignment into its key and value.
    #[must_use]
    pub fn into_parts(self) -> (String, String) {
        (self.key, self.value)
    }
}

impl FromStr for Assignment {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (key, value) = s.split_once('=').ok_or_else(|| {
            ConfigError::invalid("environment", "vars", format!("missing '=' in '{s}'"))
        })?;
        Self::new(key, value)
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// Checks that `key` can be used as an environment variable name.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` if the key is empty or contains `=` or NUL.
pub fn validate_key(key: &str) -> std::result::Result<(), ConfigError> {
    if key.is_empty() {
        return Err(ConfigError::invalid(
            "environment",
            "vars",
            "variable name must not be empty",
        ));
    }
    if key.contains(['=', '\0']) {
        return Err(ConfigError::invalid(
            "environment",
            key,
            "variable name must not contain '=' or NUL",
        ));
    }
    Ok(())
}
