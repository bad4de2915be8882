// cubes-mod: Cubes Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build command implementation.
//!
//! ```text
//! requested patterns --registry--> task names
//!   --finalized graph--> execution order --> TaskManager
//! ```

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::cli::build::BuildArgs;
use crate::config::Config;
use crate::error::Result;
use crate::task::graph::TaskGraphBuilder;
use crate::task::manager::TaskManager;
use crate::task::registry::TaskRegistry;
use crate::task::{Task, TaskName};

/// Every task that `args` runs, dependencies first.
///
/// # Errors
///
/// Returns an error if a pattern matches no task or the graph has a cycle.
pub fn plan(args: &BuildArgs, config: &Config) -> Result<Vec<TaskName>> {
    let registry = TaskRegistry::new(config.aliases.clone());
    let requested = registry.resolve(&args.requested())?;
    let graph = TaskGraphBuilder::register().finalize(&config.cubes);
    let order = graph.execution_order(&requested)?;

    tracing::info!(
        tasks = ?order.iter().map(|task| task.as_str()).collect::<Vec<_>>(),
        "Resolved tasks to run"
    );
    Ok(order)
}

/// Main handler for build command.
///
/// # Errors
///
/// Returns an error if task resolution fails or any task fails.
pub async fn run_build_command(args: &BuildArgs, config: &Config, dry_run: bool) -> Result<()> {
    let config = Arc::new(config.clone());
    let order = plan(args, &config)?;

    let cancel_token = CancellationToken::new();
    let mut manager = TaskManager::new(Arc::clone(&config))
        .with_cancel_token(cancel_token.clone())
        .with_dry_run(dry_run);

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Received Ctrl+C, interrupting tasks...");
            cancel_token.cancel();
        }
    });

    for name in order {
        manager.add(Task::new(name));
    }

    manager.run_all().await?;
    tracing::info!("Build completed successfully");
    Ok(())
}
