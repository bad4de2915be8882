// cubes-mod: Cubes Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Jar task: compile the mod and package `mod.jar`.
//!
//! ```text
//! JarTask
//! src/main/java/**/*.java --javac--> build/classes/
//! build/classes/ + src/main/resources/ + MANIFEST --> build/libs/mod.jar
//! ```
//!
//! `build/classes` is wiped first so deleted sources leave no stale classes.

use std::path::PathBuf;

use futures_util::future::BoxFuture;
use tracing::info;

use crate::config::paths::MOD_JAR;
use crate::error::Result;
use crate::maven::Scope;
use crate::task::helpers::{ensure_dir, remove_dir, resolve_scope};
use crate::task::tools::Tool;
use crate::task::tools::archive::ArchiveTool;
use crate::task::tools::javac::JavacTool;
use crate::task::{TaskContext, TaskName, Taskable};
use crate::utility::fs::walk::{WalkOptions, find_files};

/// Manifest written into every mod jar.
pub const MANIFEST: &str = "Manifest-Version: 1.0\r\nCreated-By: cubes-mod\r\n\r\n";

#[derive(Debug, Clone, Default)]
pub struct JarTask;

impl JarTask {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// `**/*.java` below `paths.sources`, sorted. A missing source directory
    /// yields no sources.
    fn sources(ctx: &TaskContext) -> Result<Vec<PathBuf>> {
        let root = ctx.config().paths.sources()?;
        if !root.is_dir() {
            return Ok(Vec::new());
        }
        let mut sources = find_files(root, "**/*.java", &WalkOptions::default())?;
        sources.sort();
        Ok(sources)
    }

    /// Compiles and packages the mod.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no sources, the compile classpath
    /// cannot be resolved, javac fails, or the jar cannot be written.
    pub async fn execute(&self, ctx: &TaskContext) -> Result<()> {
        let config = ctx.config();
        let classes = config.paths.classes_dir()?;
        let jar = config.paths.libs_dir()?.join(MOD_JAR);

        let sources = Self::sources(ctx)?;
        if sources.is_empty() {
            anyhow::bail!(
                "no Java sources found in {}",
                config.paths.sources()?.display()
            );
        }

        let classpath = resolve_scope(ctx, Scope::Compile).await?;

        remove_dir(ctx, &classes, "classes directory").await?;
        ensure_dir(ctx, &classes, "classes directory").await?;

        let tool_ctx = ctx.tool_context();
        JavacTool::new()
            .sources(&sources)
            .classpath(&classpath)
            .output_dir(&classes)
            .release(config.tools.java_release)
            .run(&tool_ctx)
            .await?;

        ArchiveTool::new()
            .output(&jar)
            .generated("META-INF/MANIFEST.MF", MANIFEST)
            .dir("", &classes)
            .dir("", config.paths.resources()?)
            .run(&tool_ctx)
            .await?;

        if !ctx.is_dry_run() {
            info!(jar = %jar.display(), sources = sources.len(), "Built mod jar");
        }
        Ok(())
    }
}

impl Taskable for JarTask {
    fn name(&self) -> TaskName {
        TaskName::Jar
    }

    fn run<'a>(&'a self, ctx: &'a TaskContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(self.execute(ctx))
    }
}
