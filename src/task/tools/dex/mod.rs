// cubes-mod: Cubes Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Jar to dex conversion for the Android target.
//!
//! ```text
//! DexTool (config.tools.dex, config.tools.dex_backend)
//!   d8: d8 --release --output <tmp> [--lib <android.jar>] [--min-api N] <jar>
//!       <tmp>/classes.dex --> <output>   (classes2.dex => error)
//!   dx: dx --dex --output=<output> <jar>
//! exit != 0 => "Failed to convert jar to dex [<code>]"
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{debug, info};

use super::{BoxFuture, Tool, ToolContext};
use crate::config::types::{DexBackend, ToolsConfig};
use crate::core::process::builder::{ProcessBuilder, ProcessFlags};
use crate::error::Result;

#[derive(Debug, Clone, Default)]
pub struct DexTool {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
}

impl DexTool {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            input: None,
            output: None,
        }
    }

    #[must_use]
    pub fn input(mut self, jar: impl AsRef<Path>) -> Self {
        self.input = Some(jar.as_ref().to_path_buf());
        self
    }

    #[must_use]
    pub fn output(mut self, dex: impl AsRef<Path>) -> Self {
        self.output = Some(dex.as_ref().to_path_buf());
        self
    }

    fn paths(&self) -> Result<(&Path, &Path)> {
        let input = self
            .input
            .as_deref()
            .context("DexTool: input jar is required")?;
        let output = self
            .output
            .as_deref()
            .context("DexTool: output path is required")?;
        Ok((input, output))
    }

    /// Converter arguments for `backend`.
    ///
    /// `out` is the d8 output directory or the dx output file.
    #[must_use]
    pub fn arguments(tools: &ToolsConfig, input: &Path, out: &Path) -> Vec<String> {
        match tools.dex_backend {
            DexBackend::D8 => {
                let mut args = vec![
                    "--release".to_string(),
                    "--output".to_string(),
                    out.display().to_string(),
                ];
                if let Some(android_jar) = &tools.android_jar {
                    args.push("--lib".to_string());
                    args.push(android_jar.display().to_string());
                }
                if let Some(min_api) = tools.dex_min_api {
                    args.push("--min-api".to_string());
                    args.push(min_api.to_string());
                }
                args.push(input.display().to_string());
                args
            }
            DexBackend::Dx => vec![
                "--dex".to_string(),
                format!("--output={}", out.display()),
                input.display().to_string(),
            ],
        }
    }

    async fn convert(&self, ctx: &ToolContext) -> Result<()> {
        let (input, output) = self.paths()?;
        let tools = &ctx.config().tools;

        if ctx.is_dry_run() {
            info!(
                backend = %tools.dex_backend,
                input = %input.display(),
                output = %output.display(),
                "[dry-run] Would convert jar to dex"
            );
            return Ok(());
        }

        let parent = output
            .parent()
            .context("dex output has no parent directory")?;
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("failed to create {}", parent.display()))?;

        match tools.dex_backend {
            DexBackend::D8 => {
                let staging = tempfile::Builder::new()
                    .prefix(".d8-")
                    .tempdir_in(parent)
                    .with_context(|| format!("Failed to create temp dir in {}", parent.display()))?;
                self.invoke(ctx, &Self::arguments(tools, input, staging.path()))
                    .await?;
                collect_single_dex(staging.path(), output).await?;
            }
            DexBackend::Dx => {
                self.invoke(ctx, &Self::arguments(tools, input, output))
                    .await?;
            }
        }

        info!(output = %output.display(), "Converted jar to dex");
        Ok(())
    }

    async fn invoke(&self, ctx: &ToolContext, args: &[String]) -> Result<()> {
        let tools = &ctx.config().tools;
        let builder = ProcessBuilder::tool(&tools.dex)
            .with_context(|| format!("{} executable not found", tools.dex_backend))?
            .name(tools.dex_backend.to_string())
            .args(args)
            .flag(ProcessFlags::ALLOW_FAILURE);

        debug!(backend = %tools.dex_backend, "Converting jar to dex");

        let result = builder
            .run_with_cancellation(ctx.cancel_token().clone())
            .await?;

        if result.is_interrupted() {
            anyhow::bail!("dex conversion was interrupted");
        }
        if !result.success() {
            anyhow::bail!("Failed to convert jar to dex [{}]", result.exit_code());
        }
        Ok(())
    }
}

impl Tool for DexTool {
    fn name(&self) -> &'static str {
        "dex"
    }

    fn run<'a>(&'a self, ctx: &'a ToolContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(self.convert(ctx))
    }
}

/// Moves d8's `classes.dex` to `output`.
///
/// The mod loader reads a single dex file, so a multidex result is rejected.
async fn collect_single_dex(staging: &Path, output: &Path) -> Result<()> {
    if staging.join("classes2.dex").exists() {
        anyhow::bail!(
            "mod code does not fit into a single dex file ({} produced classes2.dex)",
            staging.display()
        );
    }

    let produced = staging.join("classes.dex");
    if !produced.is_file() {
        anyhow::bail!("converter did not produce {}", produced.display());
    }

    tokio::fs::rename(&produced, output)
        .await
        .with_context(|| {
            format!(
                "failed to move {} to {}",
                produced.display(),
                output.display()
            )
        })
}
