// cubes-mod: Cubes Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `modProperties` task.
//!
//! ```text
//! build/libs/mod.properties
//!   modClass=<cubes.mod_class>
//!   modName=<cubes.mod_name>
//!   modVersion=<cubes.mod_version>
//! ```
//!
//! Values are written unvalidated; a blank field becomes `key=`.

use futures_util::future::BoxFuture;
use tracing::info;

use crate::config::cubes::CubesExtension;
use crate::config::paths::MOD_PROPERTIES;
use crate::error::Result;
use crate::properties::PropertiesFile;
use crate::task::helpers::ensure_dir;
use crate::task::{TaskContext, TaskName, Taskable};

#[derive(Debug, Clone, Default)]
pub struct PropertiesTask;

impl PropertiesTask {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// The metadata file for `cubes`.
    #[must_use]
    pub fn properties(cubes: &CubesExtension) -> PropertiesFile {
        PropertiesFile::new()
            .property("modClass", cubes.mod_class.as_str())
            .property("modName", cubes.mod_name.as_str())
            .property("modVersion", cubes.mod_version.as_str())
    }

    /// Writes `mod.properties`, replacing any previous file.
    ///
    /// # Errors
    ///
    /// Returns an error if the libs directory or the file cannot be written.
    pub async fn execute(&self, ctx: &TaskContext) -> Result<()> {
        let libs = ctx.config().paths.libs_dir()?;
        let path = libs.join(MOD_PROPERTIES);
        let properties = Self::properties(&ctx.config().cubes);

        ensure_dir(ctx, &libs, "libs directory").await?;

        if ctx.is_dry_run() {
            info!(path = %path.display(), "[dry-run] Would write mod properties");
            return Ok(());
        }

        properties.write(&path).await?;
        info!(path = %path.display(), "Wrote mod properties");
        Ok(())
    }
}

impl Taskable for PropertiesTask {
    fn name(&self) -> TaskName {
        TaskName::ModProperties
    }

    fn run<'a>(&'a self, ctx: &'a TaskContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(self.execute(ctx))
    }
}

#[cfg(test)]
mod tests;
