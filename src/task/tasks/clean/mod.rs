// cubes-mod: Cubes Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Clean task: delete `paths.build`. The dependency cache is kept.

use futures_util::future::BoxFuture;

use crate::error::Result;
use crate::task::helpers::remove_dir;
use crate::task::{TaskContext, TaskName, Taskable};

#[derive(Debug, Clone, Default)]
pub struct CleanTask;

impl CleanTask {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// # Errors
    ///
    /// Returns an error if the build directory cannot be deleted.
    pub async fn execute(&self, ctx: &TaskContext) -> Result<()> {
        let build = ctx.config().paths.build()?;
        remove_dir(ctx, build, "build directory").await
    }
}

impl Taskable for CleanTask {
    fn name(&self) -> TaskName {
        TaskName::Clean
    }

    fn run<'a>(&'a self, ctx: &'a TaskContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(self.execute(ctx))
    }
}
