// cubes-mod: Cubes Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Dependencies task.
//!
//! ```text
//! DependenciesTask
//! compile   -> ethanjones.cubes:core:<v>   + transitive
//! runClient -> ethanjones.cubes:client:<v> + transitive
//! runServer -> ethanjones.cubes:server:<v> + transitive
//!           -> paths.cache (Maven layout)
//! ```
//!
//! Warms the cache so later tasks resolve offline. `jar` and the run tasks
//! resolve their own scope again, which is a cache hit.

use futures_util::future::BoxFuture;
use tracing::info;

use crate::error::Result;
use crate::maven::Scope;
use crate::task::helpers::resolve_scope;
use crate::task::{TaskContext, TaskName, Taskable};

#[derive(Debug, Clone, Default)]
pub struct DependenciesTask;

impl DependenciesTask {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Resolves every scope.
    ///
    /// # Errors
    ///
    /// Returns an error if any scope fails to resolve.
    pub async fn execute(&self, ctx: &TaskContext) -> Result<()> {
        for scope in Scope::ALL {
            if ctx.is_cancelled() {
                anyhow::bail!("dependency resolution interrupted");
            }
            let jars = resolve_scope(ctx, scope).await?;
            info!(scope = %scope, jars = jars.len(), "Resolved dependencies");
        }
        Ok(())
    }
}

impl Taskable for DependenciesTask {
    fn name(&self) -> TaskName {
        TaskName::Dependencies
    }

    fn run<'a>(&'a self, ctx: &'a TaskContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(self.execute(ctx))
    }
}

#[cfg(test)]
mod tests;
