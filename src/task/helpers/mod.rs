// cubes-mod: Cubes Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Common task helper functions.
//!
//! | Function | Purpose |
//! |----------|---------|
//! | [`ensure_dir`] | Create directory if it doesn't exist (dry-run aware) |
//! | [`remove_dir`] | Delete a directory tree if present (dry-run aware) |
//! | [`resolve_scope`] | Resolve a dependency scope into jar paths |

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::info;

use crate::error::Result;
use crate::maven::{MavenResolver, Scope};
use crate::task::TaskContext;

/// Ensure a directory exists, creating it if necessary.
///
/// # Errors
///
/// Returns an error if the directory creation fails.
///
/// # Example
///
/// ```ignore
/// ensure_dir(ctx, &libs, "libs directory").await?;
/// ```
pub async fn ensure_dir(ctx: &TaskContext, path: &Path, label: &str) -> Result<()> {
    if path.exists() {
        return Ok(());
    }

    if ctx.is_dry_run() {
        info!(path = %path.display(), "[dry-run] Would create {}", label);
    } else {
        tokio::fs::create_dir_all(path)
            .await
            .with_context(|| format!("failed to create {}", path.display()))?;
    }

    Ok(())
}

/// Remove a directory tree. A missing directory is not an error.
///
/// # Errors
///
/// Returns an error if the deletion fails.
pub async fn remove_dir(ctx: &TaskContext, path: &Path, label: &str) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }

    if ctx.is_dry_run() {
        info!(path = %path.display(), "[dry-run] Would delete {}", label);
    } else {
        info!(path = %path.display(), "Deleting {}", label);
        tokio::fs::remove_dir_all(path)
            .await
            .with_context(|| format!("failed to delete {}", path.display()))?;
    }

    Ok(())
}

/// Resolve the jars of a dependency scope, downloading what the cache
/// lacks.
///
/// # Errors
///
/// Returns an error if a root coordinate is malformed or resolution fails.
pub async fn resolve_scope(ctx: &TaskContext, scope: Scope) -> Result<Vec<PathBuf>> {
    let resolver = MavenResolver::from_config(ctx.config())?;
    let roots = ctx.dependencies().roots(scope);
    resolver
        .resolve(&ctx.tool_context(), roots, scope)
        .await
        .with_context(|| format!("Failed to resolve {scope} dependencies"))
}
