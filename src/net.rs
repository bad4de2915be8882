// cubes-mod: Cubes Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Network module with async downloads.
//!
//! ```text
//! Downloader::new()
//!   .url() .file()
//!   .progress() .silent() .cancel_token()
//!        |
//!        v
//!   download()
//!        |
//!        v
//!   Progress display
//!     Bar     [=====>     ] 5MB/10MB
//!     Spinner * 5MB @ 1MB/s
//!     Silent  (none)
//!
//! Global client:  OnceLock, connection pool, keep-alive
//! Staging:        <file>.part, renamed once complete
//! Cancellation:   token -> remove .part file -> Interrupted
//! Non-2xx status: HttpError, nothing written
//! ```

use crate::error::{CubesResult, NetworkError};
use futures_util::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tokio::io::AsyncWriteExt;
use tokio_util::sync::CancellationToken;

/// Sibling the body is streamed into. Cache lookups only test the final
/// name, so an interrupted download is never mistaken for a cached one.
fn staging_path(output: &Path) -> PathBuf {
    let mut name = output.as_os_str().to_owned();
    name.push(".part");
    PathBuf::from(name)
}

/// Removes a partially written file on drop unless kept.
struct PartialFileGuard {
    path: PathBuf,
    keep: bool,
}

impl PartialFileGuard {
    const fn new(path: PathBuf) -> Self {
        Self { path, keep: false }
    }

    const fn keep(&mut self) {
        self.keep = true;
    }
}

impl Drop for PartialFileGuard {
    fn drop(&mut self) {
        if !self.keep {
            let _ = std::fs::remove_file(&self.path);
        }
    }
}

/// Shared HTTP client, falls back to a default client if the builder fails.
fn global_client() -> &'static Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        Client::builder()
            .user_agent(format!("cubes-mod/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}

fn bar_style() -> ProgressStyle {
    static STYLE: OnceLock<ProgressStyle> = OnceLock::new();
    STYLE
        .get_or_init(|| {
            ProgressStyle::with_template(
                "{spinner:.green} {msg} [{wide_bar:.cyan/blue}] {bytes}/{total_bytes} @ {binary_bytes_per_sec}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-")
        })
        .clone()
}

fn spinner_style() -> ProgressStyle {
    static STYLE: OnceLock<ProgressStyle> = OnceLock::new();
    STYLE
        .get_or_init(|| {
            ProgressStyle::with_template("{spinner:.green} {msg} {bytes} @ {binary_bytes_per_sec}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
        })
        .clone()
}

/// Progress display style for downloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProgressDisplay {
    /// Progress bar with speed, spinner if the size is unknown.
    #[default]
    Bar,
    /// Always a spinner.
    Spinner,
    /// No visual progress.
    Silent,
}

/// Async HTTP downloader with builder pattern.
///
/// # Example
/// ```ignore
/// use cubes_mod::net::Downloader;
///
/// Downloader::new()
///     .url("https://repo.maven.apache.org/maven2/.../core-0.0.5.jar")
///     .file("/tmp/core-0.0.5.jar")
///     .download()
///     .await?;
/// ```
pub struct Downloader {
    client: Client,
    url: Option<String>,
    output_file: Option<PathBuf>,
    cancel: CancellationToken,
    progress_display: ProgressDisplay,
}

impl Default for Downloader {
    fn default() -> Self {
        Self::new()
    }
}

impl Downloader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: global_client().clone(),
            url: None,
            output_file: None,
            cancel: CancellationToken::new(),
            progress_display: ProgressDisplay::default(),
        }
    }

    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    #[must_use]
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_file = Some(path.into());
        self
    }

    #[must_use]
    pub const fn progress(mut self, style: ProgressDisplay) -> Self {
        self.progress_display = style;
        self
    }

    #[must_use]
    pub const fn silent(mut self) -> Self {
        self.progress_display = ProgressDisplay::Silent;
        self
    }

    /// Abort the transfer when this token is cancelled.
    #[must_use]
    pub fn cancel_token(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    fn create_progress_bar(&self, total_size: u64, name: String) -> Option<ProgressBar> {
        let pb = match self.progress_display {
            ProgressDisplay::Silent => return None,
            ProgressDisplay::Bar if total_size > 0 => {
                let pb = ProgressBar::new(total_size);
                pb.set_style(bar_style());
                pb
            }
            ProgressDisplay::Bar | ProgressDisplay::Spinner => {
                let pb = ProgressBar::new_spinner();
                pb.set_style(spinner_style());
                pb
            }
        };
        pb.set_message(name);
        Some(pb)
    }

    /// Download to the configured file.
    ///
    /// A non-success status is reported before the output file is created.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No URL or output file is configured.
    /// - The network request fails or returns a non-success status code.
    /// - Parent directories cannot be created.
    /// - The output file cannot be created or written to.
    /// - The download is cancelled.
    pub async fn download(&self) -> CubesResult<()> {
        let url = self
            .url
            .as_ref()
            .ok_or_else(|| NetworkError::InvalidUrl("no URL provided".to_string()))?;
        let output = self
            .output_file
            .as_ref()
            .ok_or_else(|| NetworkError::DownloadFailed {
                url: url.clone(),
                message: "no output file specified".to_string(),
            })?;

        if self.cancel.is_cancelled() {
            return Err(NetworkError::Interrupted.into());
        }

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(NetworkError::Reqwest)?;

        if !response.status().is_success() {
            return Err(NetworkError::HttpError {
                status: response.status().as_u16(),
                url: url.clone(),
            }
            .into());
        }

        let name = output
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let progress_bar = self.create_progress_bar(response.content_length().unwrap_or(0), name);

        if let Some(parent) = output.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| NetworkError::DownloadFailed {
                    url: url.clone(),
                    message: format!(
                        "failed to create parent directory {}: {}",
                        parent.display(),
                        e
                    ),
                })?;
        }

        let staging = staging_path(output);
        let mut file =
            tokio::fs::File::create(&staging)
                .await
                .map_err(|e| NetworkError::DownloadFailed {
                    url: url.clone(),
                    message: format!("failed to create {}: {}", staging.display(), e),
                })?;

        let mut guard = PartialFileGuard::new(staging.clone());
        let mut stream = response.bytes_stream();

        loop {
            let chunk = tokio::select! {
                () = self.cancel.cancelled() => {
                    if let Some(pb) = &progress_bar {
                        pb.abandon_with_message("interrupted");
                    }
                    return Err(NetworkError::Interrupted.into());
                }
                chunk = stream.next() => chunk,
            };
            let Some(chunk) = chunk else { break };

            let chunk = chunk.map_err(NetworkError::Reqwest)?;
            file.write_all(&chunk)
                .await
                .map_err(|e| NetworkError::DownloadFailed {
                    url: url.clone(),
                    message: format!("failed to write to {}: {}", output.display(), e),
                })?;

            if let Some(pb) = &progress_bar {
                pb.inc(chunk.len() as u64);
            }
        }

        file.flush()
            .await
            .map_err(|e| NetworkError::DownloadFailed {
                url: url.clone(),
                message: format!("failed to flush {}: {}", output.display(), e),
            })?;

        drop(file);
        tokio::fs::rename(&staging, output)
            .await
            .map_err(|e| NetworkError::DownloadFailed {
                url: url.clone(),
                message: format!("failed to move {} into place: {}", staging.display(), e),
            })?;
        guard.keep();

        if let Some(pb) = progress_bar {
            pb.finish_and_clear();
        }

        Ok(())
    }
}
