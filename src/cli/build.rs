// cubes-mod: Cubes Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build and list command arguments.

use clap::Args;

/// Task run when `build` is given no task.
pub const DEFAULT_TASK: &str = "cm";

/// Arguments for the `build` command.
#[derive(Debug, Clone, Default, Args)]
pub struct BuildArgs {
    /// Tasks to run, with everything they depend on. Aliases and globs like
    /// 'run*' are supported. Defaults to 'cm'.
    #[arg(value_name = "TASK")]
    pub tasks: Vec<String>,
}

impl BuildArgs {
    /// The requested task patterns, `cm` if none were given.
    #[must_use]
    pub fn requested(&self) -> Vec<String> {
        if self.tasks.is_empty() {
            vec![DEFAULT_TASK.to_string()]
        } else {
            self.tasks.clone()
        }
    }
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// Shows the dependencies of each task for the current configuration.
    #[arg(long)]
    pub deps: bool,

    /// Shows only aliases.
    #[arg(short = 'i', long)]
    pub aliases: bool,
}
