// cubes-mod: Cubes Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for cubes-mod using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! cubes [global options] <command>
//! version
//! options
//! configs
//! build [tasks...]     (default: cm)
//! list [--deps] [--aliases]
//! ```

pub mod build;
pub mod global;


use crate::cli::build::{BuildArgs, ListArgs};
use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// Cubes Mod Build Tool
///
/// Compiles, packages and runs mods for the game Cubes.
#[derive(Debug, Parser)]
#[command(
    name = "cubes",
    author,
    version,
    about = "Cubes Mod Build Tool",
    long_about = "cubes-mod Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Builds mods for the game Cubes.\n\n\
                  Invoking `cubes build` packages the mod into build/libs/<modName>.cm.\n\
                  Do `cubes build <task name>...` to run specific tasks, e.g.\n\
                  `cubes build runClient`. See `cubes <command> --help` for more\n\
                  information about a command.",
    after_help = "CONFIGURATION:\n\n\
                  cubes reads `cubes.toml` from the project directory (the current\n\
                  directory unless -d is given). Additional files can be given with\n\
                  --config; they are loaded in order and override the project file.\n\
                  CUBES_<SECTION>__<KEY> environment variables override files, and\n\
                  --set section.key=value overrides everything."
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

    /// Lists the configuration files used.
    Configs,

    /// Runs tasks and everything they depend on.
    Build(BuildArgs),

    /// Lists available tasks.
    List(ListArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Tries to parse command-line arguments from an iterator.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version
/// information was requested.
pub fn try_parse_from<I, T>(iter: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(iter)
}
