// cubes-mod: Cubes Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Java launcher tool.
//!
//! ```text
//! JavaTool
//! java -Xmx<heap> -cp <classpath> <main class> <args...>
//! cwd: working_dir, stdio inherited, blocks until exit
//! Uses: config.tools.java
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::info;

use super::{BoxFuture, Tool, ToolContext};
use crate::core::process::builder::ProcessBuilder;
use crate::error::Result;
use crate::maven::classpath;

#[derive(Debug, Clone, Default)]
pub struct JavaTool {
    main_class: String,
    heap_size: Option<String>,
    classpath: Vec<PathBuf>,
    args: Vec<String>,
    working_dir: Option<PathBuf>,
}

impl JavaTool {
    #[must_use]
    pub fn new(main_class: impl Into<String>) -> Self {
        Self {
            main_class: main_class.into(),
            ..Self::default()
        }
    }

    /// Maximum heap, passed as `-Xmx<size>`.
    #[must_use]
    pub fn heap_size(mut self, size: impl Into<String>) -> Self {
        self.heap_size = Some(size.into());
        self
    }

    #[must_use]
    pub fn classpath(mut self, entries: Vec<PathBuf>) -> Self {
        self.classpath = entries;
        self
    }

    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    #[must_use]
    pub fn args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn working_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.working_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Full `java` argument list.
    #[must_use]
    pub fn arguments(&self) -> Vec<String> {
        let mut args = Vec::with_capacity(self.args.len() + 4);
        if let Some(heap) = &self.heap_size {
            args.push(format!("-Xmx{heap}"));
        }
        if !self.classpath.is_empty() {
            args.push("-cp".to_string());
            args.push(classpath(&self.classpath));
        }
        args.push(self.main_class.clone());
        args.extend(self.args.iter().cloned());
        args
    }

    async fn launch(&self, ctx: &ToolContext) -> Result<()> {
        if ctx.is_dry_run() {
            info!(
                main_class = %self.main_class,
                cwd = ?self.working_dir,
                args = ?self.args,
                "[dry-run] Would launch java"
            );
            return Ok(());
        }

        let mut builder = ProcessBuilder::tool(&ctx.config().tools.java)
            .context("java executable not found")?
            .name("java")
            .args(self.arguments())
            .inherit_stdio();
        if let Some(dir) = &self.working_dir {
            builder = builder.cwd(dir);
        }

        info!(main_class = %self.main_class, "Launching java");

        let output = builder
            .run_with_cancellation(ctx.cancel_token().clone())
            .await?;

        if output.is_interrupted() {
            anyhow::bail!("java was interrupted");
        }
        Ok(())
    }
}

impl Tool for JavaTool {
    fn name(&self) -> &'static str {
        "java"
    }

    fn run<'a>(&'a self, ctx: &'a ToolContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(self.launch(ctx))
    }
}
