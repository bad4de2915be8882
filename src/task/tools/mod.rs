// cubes-mod: Cubes Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tool abstractions for task execution.
//!
//! ```text
//! Task --> ToolContext --> Tools
//!   javac, d8/dx, java      ProcessBuilder
//!   archive                 zip (blocking pool)
//!   downloader              reqwest
//! ToolContext: cancel token --> run_with_cancellation
//! ```
//!
//! All tools support cancellation via `CancellationToken` and honour dry-run.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::error::Result;

pub mod archive;
pub mod dex;
pub mod downloader;
pub mod java;
pub mod javac;

use futures_util::future::BoxFuture;

/// Context provided to tools during execution.
#[derive(Clone)]
pub struct ToolContext {
    /// Tools should check this token and abort if cancelled.
    cancel_token: CancellationToken,

    /// When true, tools log what they would do without making changes.
    dry_run: bool,

    config: Arc<Config>,
}

impl ToolContext {
    #[must_use]
    pub const fn new(config: Arc<Config>, cancel_token: CancellationToken, dry_run: bool) -> Self {
        Self {
            cancel_token,
            dry_run,
            config,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &Arc<Config> {
        &self.config
    }

    #[must_use]
    pub const fn cancel_token(&self) -> &CancellationToken {
        &self.cancel_token
    }

    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}

/// A single external operation (compile, convert, package, launch, fetch).
///
/// Tools are the building blocks of tasks. Implementations use
/// `ProcessBuilder::run_with_cancellation()` for processes and only log
/// their actions when `ctx.is_dry_run()`.
pub trait Tool: Send + Sync {
    /// Returns the name of this tool (e.g., "javac", "d8", "archive").
    fn name(&self) -> &str;

    /// Executes the tool's operation.
    fn run<'a>(&'a self, ctx: &'a ToolContext) -> BoxFuture<'a, Result<()>>;
}

#[cfg(test)]
pub(crate) mod test_utils;
#[cfg(test)]
mod tests;
