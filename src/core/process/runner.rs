// basic-env: Basic Environment Registry
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Running a [`ProcessBuilder`].
//!
//! ```text
//! token cancelled? --yes--> interrupted output, nothing spawned
//!        |
//!   command()   env_clear + env, cwd, stdio, kill_on_drop
//!        |
//!   spawn, readers for piped streams
//!        |
//!   select { wait(), token.cancelled() -> kill + wait }
//!        |
//!   non-zero exit is an error unless ALLOW_FAILURE or interrupted
//! ```

use std::fmt::Write as _;
use std::process::{ExitStatus, Stdio};
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, trace, warn};

use super::builder::{ProcessBuilder, ProcessFlags, ProcessOutput, StreamFlags};
use crate::error::{ProcessError, Result};

type Reader = JoinHandle<std::io::Result<String>>;

impl ProcessBuilder {
    fn display_name(&self) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }
        self.program
            .file_stem()
            .map_or_else(|| "process".to_string(), |s| s.to_string_lossy().into_owned())
    }

    /// The command line as it would be typed, for logs.
    fn command_line(&self) -> String {
        let mut line = self.program.display().to_string();
        for arg in &self.args {
            let arg = arg.to_string_lossy();
            if arg.contains(' ') {
                let _ = write!(line, " \"{arg}\"");
            } else {
                let _ = write!(line, " {arg}");
            }
        }
        line
    }

    /// Runs the process to completion.
    ///
    /// # Errors
    ///
    /// Fails if the process cannot be spawned, or exits non-zero without
    /// `ALLOW_FAILURE`.
    pub async fn run(self) -> Result<ProcessOutput> {
        self.run_with_cancellation(CancellationToken::new()).await
    }

    /// Runs the process, killing it once `token` is cancelled.
    ///
    /// Interruption is not an error: the output comes back with
    /// [`is_interrupted`](ProcessOutput::is_interrupted) set.
    ///
    /// # Errors
    ///
    /// Fails if the process cannot be spawned, or exits non-zero on its own
    /// without `ALLOW_FAILURE`.
    pub async fn run_with_cancellation(self, token: CancellationToken) -> Result<ProcessOutput> {
        if token.is_cancelled() {
            return Ok(ProcessOutput::new(-1, String::new(), String::new(), true));
        }

        let name = self.display_name();
        let line = self.command_line();
        debug!(
            cmd = %line,
            cwd = ?self.cwd,
            vars = ?self.env.as_ref().map(|env| env.len()),
            "exec"
        );

        let mut child = self
            .command()
            .spawn()
            .map_err(|source| ProcessError::SpawnFailed {
                command: line,
                source,
            })?;
        trace!(process = %name, pid = ?child.id(), "spawned");

        let stdout = child.stdout.take().map(read_all);
        let stderr = child.stderr.take().map(read_all);

        let finished = tokio::select! {
            status = child.wait() => Some(status?),
            () = token.cancelled() => None,
        };
        let interrupted = finished.is_none();
        let status = match finished {
            Some(status) => status,
            None => {
                warn!(process = %name, "interrupted, killing");
                child.kill().await?;
                child.wait().await?
            }
        };

        let output = ProcessOutput::new(
            exit_code(status),
            join(stdout).await?,
            join(stderr).await?,
            interrupted,
        );
        trace!(process = %name, exit_code = output.exit_code(), interrupted, "finished");

        let tolerated = interrupted || self.flags.contains(ProcessFlags::ALLOW_FAILURE);
        if output.exit_code() != 0 && !tolerated {
            if !output.stderr().is_empty() {
                error!(process = %name, stderr = %output.stderr(), "process error output");
            }
            return Err(ProcessError::NonZeroExit {
                command: name,
                code: output.exit_code(),
            }
            .into());
        }
        Ok(output)
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .stdin(Stdio::inherit())
            .stdout(stdio(self.stdout))
            .stderr(stdio(self.stderr))
            .kill_on_drop(true);

        if let Some(cwd) = &self.cwd {
            command.current_dir(cwd);
        }
        if let Some(env) = &self.env {
            command.env_clear().envs(env.iter());
        }
        command
    }
}

fn stdio(flags: StreamFlags) -> Stdio {
    if flags.contains(StreamFlags::KEEP_IN_STRING) {
        Stdio::piped()
    } else if flags.contains(StreamFlags::BIT_BUCKET) {
        Stdio::null()
    } else {
        Stdio::inherit()
    }
}

fn read_all<R>(mut stream: R) -> Reader
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut buf = Vec::new();
        stream.read_to_end(&mut buf).await?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    })
}

async fn join(reader: Option<Reader>) -> Result<String> {
    match reader {
        Some(reader) => Ok(reader.await??),
        None => Ok(String::new()),
    }
}

#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt as _;

    status
        .code()
        .or_else(|| status.signal().map(|signal| 128 + signal))
        .unwrap_or(-1)
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(-1)
}
