// basic-env: Basic Environment Registry
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//! anyhow::Result  <-- ?  ConfigError   InvalidValue
//!                 <-- ?  ProcessError  ExecutableNotFound, SpawnFailed, NonZeroExit
//! ```
//!
//! The registry itself never fails; everything here belongs to the
//! boundaries around it (config files, CLI input, child processes).

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Configuration and input errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A value deserialized fine but cannot be used.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

impl ConfigError {
    /// Shorthand for an [`ConfigError::InvalidValue`] in the given section.
    pub fn invalid(
        section: impl Into<String>,
        key: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            section: section.into(),
            key: key.into(),
            message: message.into(),
        }
    }
}

/// Child process errors.
///
/// An interrupted child is not an error; see `ProcessOutput::is_interrupted`.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in the basic environment's PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with a status outside the accepted set.
    #[error("process '{command}' exited with code {code}")]
    NonZeroExit { command: String, code: i32 },
}

#[cfg(test)]
mod tests;
