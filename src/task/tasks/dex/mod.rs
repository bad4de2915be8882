// cubes-mod: Cubes Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `modDex` task: convert `mod.jar` for the Android target.
//!
//! ```text
//! DexTask
//! build/libs/mod.jar --d8/dx--> build/libs/mod.dex
//! ```

use futures_util::future::BoxFuture;

use crate::config::paths::{MOD_DEX, MOD_JAR};
use crate::error::Result;
use crate::task::helpers::ensure_dir;
use crate::task::tools::Tool;
use crate::task::tools::dex::DexTool;
use crate::task::{TaskContext, TaskName, Taskable};

#[derive(Debug, Clone, Default)]
pub struct DexTask;

impl DexTask {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Runs the configured converter. No retries.
    ///
    /// # Errors
    ///
    /// Returns `Failed to convert jar to dex [<code>]` if the converter
    /// exits non-zero.
    pub async fn execute(&self, ctx: &TaskContext) -> Result<()> {
        let libs = ctx.config().paths.libs_dir()?;
        ensure_dir(ctx, &libs, "libs directory").await?;

        DexTool::new()
            .input(libs.join(MOD_JAR))
            .output(libs.join(MOD_DEX))
            .run(&ctx.tool_context())
            .await
    }
}

impl Taskable for DexTask {
    fn name(&self) -> TaskName {
        TaskName::ModDex
    }

    fn run<'a>(&'a self, ctx: &'a TaskContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(self.execute(ctx))
    }
}
