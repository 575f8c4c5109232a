// basic-env: Basic Environment Registry
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Registry holding the basic environment.
//!
//! ```text
//! EnvRegistry { current: RwLock<Env> }
//!   basic_environment()      read lock, clone snapshot (shares Arc)
//!   set_basic_environment()  write lock, swap whole map
//!   update(f)                write lock, f on a copy, swap
//!
//! global() -> &'static EnvRegistry   (OnceLock, empty at first access)
//! ```
//!
//! Snapshots are `Env` values, so a reader holding one never blocks a writer
//! and never observes a later replacement.

use std::sync::{OnceLock, PoisonError, RwLock};

use tracing::{debug, trace};

use super::container::Env;

/// Owner of one basic environment.
///
/// Create one at the top of the program and pass `&EnvRegistry` to whatever
/// needs the environment. Both operations are infallible; a poisoned lock is
/// recovered since the guarded value is always a complete `Env`.
#[derive(Debug, Default)]
pub struct EnvRegistry {
    current: RwLock<Env>,
}

impl EnvRegistry {
    /// Creates a registry holding the empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding `env`.
    #[must_use]
    pub fn with_environment(env: impl Into<Env>) -> Self {
        Self {
            current: RwLock::new(env.into()),
        }
    }

    /// Returns the current basic environment.
    ///
    /// The returned value is a read-only snapshot of the most recent
    /// [`set_basic_environment`](Self::set_basic_environment) call, or the
    /// empty environment if there was none.
    #[must_use]
    pub fn basic_environment(&self) -> Env {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replaces the basic environment in full.
    pub fn set_basic_environment(&self, env: impl Into<Env>) {
        let env = env.into();
        debug!(vars = env.len(), "basic environment replaced");
        *self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner) = env;
    }

    /// Derives a new environment from the current one and stores it.
    ///
    /// `f` runs on a private copy under the write lock, so concurrent readers
    /// see either the old or the new environment, never an intermediate state.
    pub fn update(&self, f: impl FnOnce(&mut Env)) {
        let mut guard = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let mut next = guard.clone();
        f(&mut next);
        trace!(before = guard.len(), after = next.len(), "basic environment updated");
        *guard = next;
    }
}

static GLOBAL: OnceLock<EnvRegistry> = OnceLock::new();

/// Returns the process-lifetime registry, creating it empty on first use.
///
/// Prefer passing an [`EnvRegistry`] explicitly; this exists for code that
/// cannot be handed one.
pub fn global() -> &'static EnvRegistry {
    GLOBAL.get_or_init(EnvRegistry::new)
}
