// cubes-mod: Cubes Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Java compiler tool.
//!
//! ```text
//! JavacTool
//! javac --release <N> -encoding UTF-8 -d <classes> [-cp <classpath>] @<argfile>
//! argfile: one quoted source path per line (NamedTempFile, removed on drop)
//! Uses: config.tools.javac
//! ```

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tempfile::NamedTempFile;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use super::{BoxFuture, Tool, ToolContext};
use crate::core::process::builder::ProcessBuilder;
use crate::error::Result;
use crate::maven::classpath;

/// Default `--release` level of the Cubes runtime.
pub const DEFAULT_RELEASE: u32 = 17;

#[derive(Debug, Clone)]
pub struct JavacTool {
    sources: Vec<PathBuf>,
    classpath: Vec<PathBuf>,
    output_dir: Option<PathBuf>,
    release: u32,
}

impl Default for JavacTool {
    fn default() -> Self {
        Self::new()
    }
}

impl JavacTool {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sources: Vec::new(),
            classpath: Vec::new(),
            output_dir: None,
            release: DEFAULT_RELEASE,
        }
    }

    #[must_use]
    pub fn sources(mut self, sources: impl IntoIterator<Item = impl AsRef<Path>>) -> Self {
        self.sources = sources
            .into_iter()
            .map(|p| p.as_ref().to_path_buf())
            .collect();
        self
    }

    #[must_use]
    pub fn classpath(mut self, entries: impl IntoIterator<Item = impl AsRef<Path>>) -> Self {
        self.classpath = entries
            .into_iter()
            .map(|p| p.as_ref().to_path_buf())
            .collect();
        self
    }

    #[must_use]
    pub fn output_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.output_dir = Some(path.as_ref().to_path_buf());
        self
    }

    #[must_use]
    pub const fn release(mut self, release: u32) -> Self {
        self.release = release;
        self
    }

    fn output_dir_required(&self) -> Result<&Path> {
        self.output_dir
            .as_deref()
            .context("JavacTool: output_dir is required")
    }

    /// Arguments preceding the `@argfile`.
    #[must_use]
    pub fn arguments(&self, output_dir: &Path) -> Vec<String> {
        let mut args = vec![
            "--release".to_string(),
            self.release.to_string(),
            "-encoding".to_string(),
            "UTF-8".to_string(),
            "-d".to_string(),
            output_dir.display().to_string(),
        ];
        if !self.classpath.is_empty() {
            args.push("-cp".to_string());
            args.push(classpath(&self.classpath));
        }
        args
    }

    async fn compile(&self, ctx: &ToolContext) -> Result<()> {
        let output_dir = self.output_dir_required()?;

        if self.sources.is_empty() {
            anyhow::bail!("no Java sources to compile");
        }

        if ctx.is_dry_run() {
            info!(
                sources = self.sources.len(),
                classpath = self.classpath.len(),
                output = %output_dir.display(),
                release = self.release,
                "[dry-run] Would compile Java sources"
            );
            return Ok(());
        }

        let argfile = write_argfile(&self.sources).await?;

        let builder = ProcessBuilder::tool(&ctx.config().tools.javac)
            .context("javac executable not found")?
            .name("javac")
            .args(self.arguments(output_dir))
            .arg(format!("@{}", argfile.path().display()));

        debug!(sources = self.sources.len(), "Compiling Java sources");

        let output = builder
            .run_with_cancellation(ctx.cancel_token().clone())
            .await
            .context("Failed to compile Java sources")?;

        if output.is_interrupted() {
            anyhow::bail!("javac was interrupted");
        }

        info!(sources = self.sources.len(), "Compiled Java sources");
        Ok(())
    }
}

impl Tool for JavacTool {
    fn name(&self) -> &'static str {
        "javac"
    }

    fn run<'a>(&'a self, ctx: &'a ToolContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(self.compile(ctx))
    }
}

/// Quotes a path for a javac `@argfile`, where `\` escapes inside quotes.
fn quote_argfile_path(path: &Path) -> String {
    let escaped = path
        .display()
        .to_string()
        .replace('\\', "\\\\")
        .replace('"', "\\\"");
    format!("\"{escaped}\"")
}

/// Argfile content: one quoted path per line.
fn argfile_content(sources: &[PathBuf]) -> String {
    let mut content = String::new();
    for source in sources {
        let _ = writeln!(content, "{}", quote_argfile_path(source));
    }
    content
}

async fn write_argfile(sources: &[PathBuf]) -> Result<NamedTempFile> {
    let argfile = tempfile::Builder::new()
        .prefix("javac-")
        .suffix(".args")
        .tempfile()
        .context("Failed to create javac argfile")?;

    let mut file = tokio::fs::File::from_std(
        argfile
            .reopen()
            .with_context(|| format!("Failed to reopen {}", argfile.path().display()))?,
    );
    file.write_all(argfile_content(sources).as_bytes())
        .await
        .with_context(|| format!("Failed to write {}", argfile.path().display()))?;
    file.flush()
        .await
        .with_context(|| format!("Failed to flush {}", argfile.path().display()))?;
    drop(file);

    Ok(argfile)
}
