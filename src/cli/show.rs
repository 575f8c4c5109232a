// basic-env: Basic Environment Registry
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the inspection commands.

use clap::{Args, ValueEnum};

/// Output format for `show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ShowFormat {
    /// `KEY=VALUE` lines
    #[default]
    Env,
    /// A JSON object
    Json,
    /// POSIX shell `export` statements
    Export,
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ShowArgs {
    /// Output format.
    #[arg(short, long, value_enum, default_value_t = ShowFormat::Env)]
    pub format: ShowFormat,

    /// Only show variables matching these globs, like 'LC_*'.
    #[arg(value_name = "PATTERN")]
    pub patterns: Vec<String>,
}

/// Arguments for the `get` command.
#[derive(Debug, Clone, Args)]
pub struct GetArgs {
    /// Variable name.
    #[arg(value_name = "KEY")]
    pub key: String,
}
