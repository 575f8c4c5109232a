// basic-env: Basic Environment Registry
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Describing a child process before it runs.
//!
//! ```text
//! ProcessBuilder::new(path) | which_in(name, env, cwd) | raw(shell line)
//!   .args() .cwd() .env() .flag() .name()
//!   .capture_output() | .quiet() | .inherit_stdio()
//! ```

use bitflags::bitflags;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::core::env::container::Env;
use crate::error::ProcessError;

bitflags! {
    /// How a finished process is judged.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ProcessFlags: u32 {
        /// A non-zero exit status is reported, not returned as an error.
        const ALLOW_FAILURE = 1;
    }
}

bitflags! {
    /// Where stdout or stderr goes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct StreamFlags: u32 {
        const INHERIT = 1;
        const BIT_BUCKET = 1 << 1;
        const KEEP_IN_STRING = 1 << 2;
    }
}

impl Default for StreamFlags {
    fn default() -> Self {
        Self::INHERIT
    }
}

/// Result of a finished (or interrupted) process.
#[derive(Debug, Clone, Default)]
pub struct ProcessOutput {
    exit_code: i32,
    stdout: String,
    stderr: String,
    interrupted: bool,
}

impl ProcessOutput {
    pub(super) const fn new(
        exit_code: i32,
        stdout: String,
        stderr: String,
        interrupted: bool,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            interrupted,
        }
    }

    /// Exit status; `128 + N` on Unix when killed by signal `N`.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.exit_code
    }

    /// Empty unless stdout was captured.
    #[must_use]
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Empty unless stderr was captured.
    #[must_use]
    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    #[must_use]
    pub const fn is_interrupted(&self) -> bool {
        self.interrupted
    }

    #[must_use]
    pub const fn success(&self) -> bool {
        self.exit_code == 0 && !self.interrupted
    }
}

/// A child process to run; see [`run`](Self::run).
#[derive(Debug)]
pub struct ProcessBuilder {
    pub(super) program: PathBuf,
    pub(super) args: Vec<OsString>,
    pub(super) cwd: Option<PathBuf>,
    /// Complete environment of the child; `None` inherits ours.
    pub(super) env: Option<Env>,
    pub(super) flags: ProcessFlags,
    pub(super) stdout: StreamFlags,
    pub(super) stderr: StreamFlags,
    pub(super) name: Option<String>,
}

impl ProcessBuilder {
    #[must_use]
    pub fn new(program: impl AsRef<Path>) -> Self {
        Self {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
            cwd: None,
            env: None,
            flags: ProcessFlags::empty(),
            stdout: StreamFlags::default(),
            stderr: StreamFlags::default(),
            name: None,
        }
    }

    /// Resolves `program` in `env`'s `PATH` and runs it with exactly `env`.
    ///
    /// Our own `PATH` plays no part: the child will see `env`, so that is
    /// where it has to be found. Names with a directory part are taken
    /// relative to `cwd`.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::ExecutableNotFound` if nothing matches.
    pub fn which_in(
        program: &str,
        env: Env,
        cwd: impl AsRef<Path>,
    ) -> std::result::Result<Self, ProcessError> {
        let Ok(path) = which::which_in(program, env.get("PATH"), cwd.as_ref()) else {
            return Err(ProcessError::ExecutableNotFound {
                name: program.to_string(),
            });
        };
        Ok(Self::new(path).name(program).env(env))
    }

    /// Runs `command` through the platform shell (`/bin/sh -c`, `cmd /C`).
    #[must_use]
    pub fn raw(command: impl Into<OsString>) -> Self {
        let (shell, flag) = if cfg!(windows) {
            ("cmd", "/C")
        } else {
            ("/bin/sh", "-c")
        };
        Self::new(shell).args([OsString::from(flag), command.into()])
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|arg| arg.as_ref().to_os_string()));
        self
    }

    #[must_use]
    pub fn cwd(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Replaces the child's whole environment with `env`.
    #[must_use]
    pub fn env(mut self, env: Env) -> Self {
        self.env = Some(env);
        self
    }

    #[must_use]
    pub fn flag(mut self, flag: ProcessFlags) -> Self {
        self.flags |= flag;
        self
    }

    #[must_use]
    pub const fn capture_output(self) -> Self {
        self.streams(StreamFlags::KEEP_IN_STRING)
    }

    #[must_use]
    pub const fn quiet(self) -> Self {
        self.streams(StreamFlags::BIT_BUCKET)
    }

    #[must_use]
    pub const fn inherit_stdio(self) -> Self {
        self.streams(StreamFlags::INHERIT)
    }

    const fn streams(mut self, flags: StreamFlags) -> Self {
        self.stdout = flags;
        self.stderr = flags;
        self
    }

    /// Name used in logs and errors instead of the program's file stem.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    #[must_use]
    pub const fn environment(&self) -> Option<&Env> {
        self.env.as_ref()
    }
}
