// cubes-mod: Cubes Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Task manager for orchestrating task execution.
//!
//! ```text
//! TaskManager::new(config)
//!   .with_cancel_token()  .with_dry_run()
//!   .add(task) ...         (already in execution order)
//!   .run_all().await
//!       one task at a time, stop at the first failure
//!       each task runs inside a `task` span
//! ```

use std::sync::Arc;

use anyhow::Context;
use tokio_util::sync::CancellationToken;
use tracing::Instrument;

use crate::config::Config;
use crate::error::Result;

use super::{Task, TaskContext, Taskable};

/// Runs tasks sequentially in the order they were added.
pub struct TaskManager {
    tasks: Vec<Task>,

    /// Cancellation token for cooperative cancellation.
    cancel_token: CancellationToken,

    config: Arc<Config>,

    dry_run: bool,
}

impl TaskManager {
    #[must_use]
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            tasks: Vec::new(),
            cancel_token: CancellationToken::new(),
            config,
            dry_run: false,
        }
    }

    /// Shares an externally owned token, e.g. one cancelled by Ctrl+C.
    #[must_use]
    pub fn with_cancel_token(mut self, token: CancellationToken) -> Self {
        self.cancel_token = token;
        self
    }

    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    #[must_use]
    pub const fn task_count(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }

    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Triggers cancellation. Running processes are killed and no further
    /// task is started.
    pub fn interrupt_all(&self) {
        tracing::info!("Interrupting all tasks");
        self.cancel_token.cancel();
    }

    fn create_context(&self) -> TaskContext {
        TaskContext::new(Arc::clone(&self.config), self.cancel_token.clone())
            .with_dry_run(self.dry_run)
    }

    /// Runs all tasks sequentially.
    ///
    /// Checks for cancellation between tasks.
    ///
    /// # Errors
    ///
    /// Returns the first task failure, or an error if cancellation is
    /// requested before all tasks ran.
    pub async fn run_all(&self) -> Result<()> {
        if self.tasks.is_empty() {
            tracing::debug!("No tasks to run");
            return Ok(());
        }

        tracing::info!(task_count = self.tasks.len(), "Starting task execution");

        let ctx = self.create_context();

        for (i, task) in self.tasks.iter().enumerate() {
            if self.is_cancelled() {
                anyhow::bail!("Task execution interrupted before task {}", task.name());
            }

            tracing::info!(
                task = %task.name(),
                index = i + 1,
                total = self.tasks.len(),
                "Running task"
            );

            // Span close events carry the task duration into the file log.
            task.run(&ctx)
                .instrument(tracing::info_span!("task", name = %task.name()))
                .await
                .with_context(|| format!("Task '{}' failed", task.name()))?;
        }

        tracing::info!("All tasks completed successfully");
        Ok(())
    }
}
