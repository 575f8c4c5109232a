// basic-env: Basic Environment Registry
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! benv [global options] <command>
//! version
//! options
//! configs
//! show [--format env|json|export] [PATTERN...]
//! get KEY
//! exec [--cwd DIR] PROGRAM [ARGS...]
//! ```

pub mod exec;
pub mod global;
pub mod show;


use crate::cli::exec::ExecArgs;
use crate::cli::global::GlobalOptions;
use crate::cli::show::{GetArgs, ShowArgs};
use clap::{Parser, Subcommand};

/// Basic environment tool.
///
/// Composes the basic environment and runs programs in it.
#[derive(Debug, Parser)]
#[command(
    name = "benv",
    author,
    version,
    about = "Basic environment registry and launcher",
    long_about = "basic-env Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Composes a basic environment from the process environment and\n\
                  configuration, then prints it or runs a program with exactly\n\
                  that environment. See `benv <command> --help` for more\n\
                  information about a command.",
    after_help = "CONFIG FILES:\n\n\
                  By default, benv loads `benv.toml` from the current directory\n\
                  if it exists. Additional files can be given with --config; they\n\
                  are loaded afterwards and override earlier ones. BENV_* variables\n\
                  (e.g. BENV_GLOBAL__LOG_LEVEL=4) override files, and command-line\n\
                  flags override everything. Use --no-default-config to skip\n\
                  `benv.toml`."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values.
    Options,

    /// Lists the configuration files that were loaded.
    Configs,

    /// Prints the basic environment.
    Show(ShowArgs),

    /// Prints one variable of the basic environment.
    Get(GetArgs),

    /// Runs a program with exactly the basic environment.
    Exec(ExecArgs),
}

impl Command {
    /// Whether the command reads the composed basic environment.
    #[must_use]
    pub const fn needs_environment(&self) -> bool {
        matches!(self, Self::Show(_) | Self::Get(_) | Self::Exec(_))
    }
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}
