// cubes-mod: Cubes Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::sync::Arc;

use tempfile::TempDir;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::DependenciesTask;
use crate::task::tools::test_utils::{dry_run_lines, project_config, run_with_logs};
use crate::task::{TaskContext, TaskName, Taskable};

#[test]
fn test_name() {
    assert_eq!(DependenciesTask::new().name(), TaskName::Dependencies);
}

#[tokio::test]
async fn test_resolves_every_scope_into_cache() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    for module in ["core", "client", "server"] {
        Mock::given(method("GET"))
            .and(path(format!(
                "/ethanjones/cubes/{module}/0.0.5/{module}-0.0.5.jar"
            )))
            .respond_with(ResponseTemplate::new(200).set_body_string(module))
            .expect(1)
            .mount(&server)
            .await;
    }

    let temp = TempDir::new()?;
    let mut config = project_config(temp.path())?;
    config.maven.repositories = vec![server.uri()];
    let cache = config.paths.cache()?.to_path_buf();
    let ctx = TaskContext::new(Arc::new(config), CancellationToken::new());

    DependenciesTask::new().run(&ctx).await?;
    // Second run is served from the cache; `expect(1)` checks it.
    DependenciesTask::new().run(&ctx).await?;

    for module in ["core", "client", "server"] {
        let jar = cache.join(format!(
            "ethanjones/cubes/{module}/0.0.5/{module}-0.0.5.jar"
        ));
        assert_eq!(std::fs::read_to_string(jar)?, module);
    }
    Ok(())
}

#[tokio::test]
async fn test_missing_artifact_fails() -> anyhow::Result<()> {
    let server = MockServer::start().await;

    let temp = TempDir::new()?;
    let mut config = project_config(temp.path())?;
    config.maven.repositories = vec![server.uri()];
    let ctx = TaskContext::new(Arc::new(config), CancellationToken::new());

    let err = DependenciesTask::new().run(&ctx).await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to resolve compile dependencies");
    assert!(format!("{err:#}").contains("could not find ethanjones.cubes:core:0.0.5"));
    Ok(())
}

#[tokio::test(flavor = "current_thread")]
async fn test_dry_run_fetches_nothing() -> anyhow::Result<()> {
    let temp = TempDir::new()?;
    let config = project_config(temp.path())?;
    let cache = config.paths.cache()?.to_path_buf();
    let ctx =
        TaskContext::new(Arc::new(config), CancellationToken::new()).with_dry_run(true);

    let task = DependenciesTask::new();
    let logs = run_with_logs(|| task.run(&ctx)).await?;

    let lines = dry_run_lines(&logs);
    assert_eq!(lines.len(), 3);
    assert!(
        lines
            .iter()
            .all(|l| l.starts_with("[dry-run] Would resolve dependencies"))
    );
    assert!(!cache.exists());
    Ok(())
}
