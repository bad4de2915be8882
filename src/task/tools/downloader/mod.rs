// cubes-mod: Cubes Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Downloader tool for HTTP file downloads.
//!
//! ```text
//! URLs (one per repository) --> HTTP GET --> local file
//! Features: fallback URLs, cache skip, cancel
//! Not found (404/410) only when every URL says so
//! Uses: crate::net::Downloader
//! ```

use std::path::PathBuf;

use crate::error::{CubesError, Result};
use anyhow::Context;
use tracing::{debug, info};

use super::{BoxFuture, Tool, ToolContext};
use crate::net::{Downloader, ProgressDisplay};

#[derive(Debug, Clone)]
pub struct DownloaderTool {
    urls: Vec<String>,
    output_file: Option<PathBuf>,
    progress: ProgressDisplay,
}

impl Default for DownloaderTool {
    fn default() -> Self {
        Self::new()
    }
}

impl DownloaderTool {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            urls: Vec::new(),
            output_file: None,
            progress: ProgressDisplay::Bar,
        }
    }

    /// Add a URL to download from. Multiple URLs are tried in order.
    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.urls.push(url.into());
        self
    }

    #[must_use]
    pub fn urls(mut self, urls: Vec<String>) -> Self {
        self.urls = urls;
        self
    }

    #[must_use]
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_file = Some(path.into());
        self
    }

    #[must_use]
    pub const fn progress(mut self, progress: ProgressDisplay) -> Self {
        self.progress = progress;
        self
    }

    async fn execute_download(&self, ctx: &ToolContext) -> Result<()> {
        let output_file = self
            .output_file
            .as_ref()
            .context("no output file specified")?;

        if ctx.is_cancelled() {
            return Err(anyhow::anyhow!("download cancelled"));
        }

        if output_file.exists() {
            debug!(
                path = %output_file.display(),
                "file already exists, skipping download"
            );
            return Ok(());
        }

        if self.urls.is_empty() {
            return Err(anyhow::anyhow!("no URLs provided for download"));
        }

        // A real failure outranks "not found" from the other repositories.
        let mut failure = None;
        let mut not_found = None;
        for (idx, url) in self.urls.iter().enumerate() {
            if ctx.is_cancelled() {
                return Err(anyhow::anyhow!("download cancelled"));
            }

            debug!(
                url = %url,
                attempt = idx + 1,
                total = self.urls.len(),
                "attempting download"
            );

            if ctx.is_dry_run() {
                info!(
                    url = %url,
                    file = %output_file.display(),
                    "[dry-run] Would download"
                );
                return Ok(());
            }

            let downloader = Downloader::new()
                .url(url)
                .file(output_file)
                .progress(self.progress)
                .cancel_token(ctx.cancel_token().clone());

            match downloader.download().await {
                Ok(()) => {
                    info!(url = %url, "downloaded");
                    return Ok(());
                }
                Err(e) => {
                    let e = anyhow::Error::from(e);
                    debug!(
                        url = %url,
                        error = %e,
                        "download attempt failed, trying next URL"
                    );
                    if is_not_found(&e) {
                        not_found = Some(e);
                    } else if failure.is_none() {
                        failure = Some(e);
                    }
                }
            }
        }

        failure.or(not_found).map_or_else(
            || Err(anyhow::anyhow!("no URLs provided for download")),
            |error| Err(error).context("all download URLs failed"),
        )
    }
}

fn is_not_found(error: &anyhow::Error) -> bool {
    error
        .downcast_ref::<CubesError>()
        .is_some_and(CubesError::is_not_found)
}

impl Tool for DownloaderTool {
    fn name(&self) -> &'static str {
        "downloader"
    }

    fn run<'a>(&'a self, ctx: &'a ToolContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(self.execute_download(ctx))
    }
}
