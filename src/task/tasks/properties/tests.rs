// cubes-mod: Cubes Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::sync::Arc;

use tempfile::TempDir;
use tokio_util::sync::CancellationToken;

use super::PropertiesTask;
use crate::config::Config;
use crate::config::cubes::CubesExtension;
use crate::task::tools::test_utils::{dry_run_lines, project_config, run_with_logs};
use crate::task::{TaskContext, TaskName, Taskable};

fn context(config: Config, dry_run: bool) -> TaskContext {
    TaskContext::new(Arc::new(config), CancellationToken::new()).with_dry_run(dry_run)
}

#[test]
fn test_name() {
    assert_eq!(PropertiesTask::new().name(), TaskName::ModProperties);
}

#[test]
fn test_properties_keys() {
    let cubes = CubesExtension {
        mod_class: "example.ExampleMod".to_string(),
        mod_name: "ExampleMod".to_string(),
        mod_version: "1.0".to_string(),
        ..CubesExtension::default()
    };
    insta::assert_snapshot!(PropertiesTask::properties(&cubes).render(), @r"
    modClass=example.ExampleMod
    modName=ExampleMod
    modVersion=1.0
    ");
}

#[test]
fn test_blank_values_are_written() {
    let rendered = PropertiesTask::properties(&CubesExtension::default()).render();
    assert_eq!(rendered, "modClass=\nmodName=\nmodVersion=\n");
}

#[tokio::test]
async fn test_writes_byte_identical_file() -> anyhow::Result<()> {
    let temp = TempDir::new()?;
    let ctx = context(project_config(temp.path())?, false);
    let path = temp.path().join("build/libs/mod.properties");

    PropertiesTask::new().run(&ctx).await?;
    let first = std::fs::read(&path)?;
    PropertiesTask::new().run(&ctx).await?;
    let second = std::fs::read(&path)?;

    assert_eq!(first, second);
    assert_eq!(
        String::from_utf8(first)?,
        "modClass=example.ExampleMod\nmodName=ExampleMod\nmodVersion=1.0\n"
    );
    Ok(())
}

#[tokio::test(flavor = "current_thread")]
async fn test_dry_run() -> anyhow::Result<()> {
    let temp = TempDir::new()?;
    let ctx = context(project_config(temp.path())?, true);

    let task = PropertiesTask::new();
    let logs = run_with_logs(|| task.run(&ctx)).await?;

    let lines = dry_run_lines(&logs);
    assert_eq!(lines.len(), 2);
    assert!(lines[1].starts_with("[dry-run] Would write mod properties"));
    assert!(!temp.path().join("build").exists());
    Ok(())
}
