// cubes-mod: Cubes Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `cm` task: assemble the distributable mod archive.
//!
//! ```text
//! build/libs/<modName>.cm
//!   mod.jar          (build_desktop)
//!   mod.dex          (build_android)
//!   mod.properties   (always)
//!   assets/...       <- cubes.assets_folder
//!   json/...         <- cubes.json_folder
//! ```
//!
//! Missing asset or json folders add nothing. A missing root file is an
//! error. The archive is rebuilt on every run.

use std::path::PathBuf;

use futures_util::future::BoxFuture;

use crate::config::Config;
use crate::config::paths::{MOD_DEX, MOD_JAR, MOD_PROPERTIES};
use crate::error::Result;
use crate::task::tools::Tool;
use crate::task::tools::archive::ArchiveTool;
use crate::task::{TaskContext, TaskName, Taskable};

/// Entry prefix of the asset tree.
pub const ASSETS_PREFIX: &str = "assets";
/// Entry prefix of the json tree.
pub const JSON_PREFIX: &str = "json";

#[derive(Debug, Clone, Default)]
pub struct ArchiveTask;

impl ArchiveTask {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Absolute path of `build/libs/<modName>.cm`.
    ///
    /// # Errors
    ///
    /// Returns an error if paths were not resolved.
    pub fn archive_path(config: &Config) -> Result<PathBuf> {
        Ok(config.paths.libs_dir()?.join(config.cubes.archive_name()))
    }

    /// The archive layout for the current platform flags.
    ///
    /// # Errors
    ///
    /// Returns an error if paths were not resolved.
    pub fn archive(config: &Config) -> Result<ArchiveTool> {
        let cubes = &config.cubes;
        let libs = config.paths.libs_dir()?;

        let mut tool = ArchiveTool::new().output(Self::archive_path(config)?);
        if cubes.build_desktop {
            tool = tool.file(MOD_JAR, libs.join(MOD_JAR));
        }
        if cubes.build_android {
            tool = tool.file(MOD_DEX, libs.join(MOD_DEX));
        }
        Ok(tool
            .file(MOD_PROPERTIES, libs.join(MOD_PROPERTIES))
            .dir(ASSETS_PREFIX, config.paths.in_project(&cubes.assets_folder)?)
            .dir(JSON_PREFIX, config.paths.in_project(&cubes.json_folder)?))
    }

    /// # Errors
    ///
    /// Returns an error if a required root file is missing or the archive
    /// cannot be written.
    pub async fn execute(&self, ctx: &TaskContext) -> Result<()> {
        Self::archive(ctx.config())?
            .run(&ctx.tool_context())
            .await
    }
}

impl Taskable for ArchiveTask {
    fn name(&self) -> TaskName {
        TaskName::Cm
    }

    fn run<'a>(&'a self, ctx: &'a TaskContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(self.execute(ctx))
    }
}

#[cfg(test)]
mod tests;
