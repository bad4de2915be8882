// cubes-mod: Cubes Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE       <- Additional config files (can repeat)
//! --dry               <- Log what would happen, change nothing
//! --log-level N       <- Console verbosity (0-6)
//! --file-log-level    <- File verbosity (defaults to --log-level)
//! --project-dir DIR   <- paths.project override
//! --set KEY=VAL       <- Direct config override
//!
//! Precedence: CLI flags > --set > env > --config > cubes.toml > defaults
//! ```

use clap::Args;
use std::path::{Path, PathBuf};

use crate::config::PROJECT_CONFIG;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Logs what would be done without touching the filesystem or
    /// launching tools.
    #[arg(long)]
    pub dry: bool,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// File log level, defaults to --log-level.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Mod project directory (contains cubes.toml and src/).
    #[arg(short = 'd', long = "project-dir", value_name = "DIR")]
    pub project_dir: Option<PathBuf>,

    /// Sets an option, such as 'cubes.mod_version=1.1' or
    /// 'tools.dex_backend=dx'. Can be specified multiple times.
    #[arg(short = 's', long = "set", value_name = "OPTION", action = clap::ArgAction::Append)]
    pub options: Vec<String>,
}

impl GlobalOptions {
    /// Path of the project configuration file.
    #[must_use]
    pub fn project_config(&self) -> PathBuf {
        self.project_dir
            .as_deref()
            .unwrap_or_else(|| Path::new("."))
            .join(PROJECT_CONFIG)
    }

    /// Converts command-line options to `section.key=value` overrides.
    ///
    /// Flags are appended after `--set`, so they win.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<String> {
        let mut overrides = self.options.clone();

        if let Some(level) = self.log_level {
            overrides.push(format!("global.output_log_level={level}"));
        }

        if let Some(level) = self.file_log_level.or(self.log_level) {
            overrides.push(format!("global.file_log_level={level}"));
        }

        if let Some(ref path) = self.log_file {
            overrides.push(format!("global.log_file={}", path.display()));
        }

        if self.dry {
            overrides.push("global.dry=true".to_string());
        }

        if let Some(ref dir) = self.project_dir {
            overrides.push(format!("paths.project={}", dir.display()));
        }

        overrides
    }
}
