// cubes-mod: Cubes Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;
use std::sync::Arc;

use tempfile::TempDir;
use tokio_util::sync::CancellationToken;

use super::ArchiveTask;
use crate::config::Config;
use crate::task::tools::test_utils::project_config;
use crate::task::{TaskContext, TaskName, Taskable};

fn write(path: &Path, content: &str) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

/// A project with every possible input present.
fn project(root: &Path, desktop: bool, android: bool) -> Config {
    let libs = root.join("build/libs");
    write(&libs.join("mod.jar"), "jar");
    write(&libs.join("mod.dex"), "dex");
    write(&libs.join("mod.properties"), "modName=ExampleMod\n");
    write(&root.join("assets/textures/block.png"), "png");
    write(&root.join("json/blocks.json"), "{}");

    let mut config = project_config(root).unwrap();
    config.cubes.build_desktop = desktop;
    config.cubes.build_android = android;
    config
}

#[test]
fn test_name() {
    assert_eq!(ArchiveTask::new().name(), TaskName::Cm);
}

#[test]
fn test_archive_path() {
    let temp = TempDir::new().unwrap();
    let config = project_config(temp.path()).unwrap();
    assert_eq!(
        ArchiveTask::archive_path(&config).unwrap(),
        temp.path().join("build/libs/ExampleMod.cm")
    );
}

#[test]
fn test_entries_desktop() {
    let temp = TempDir::new().unwrap();
    let config = project(temp.path(), true, false);

    assert_eq!(
        ArchiveTask::archive(&config).unwrap().entries().unwrap(),
        [
            "assets/textures/block.png",
            "json/blocks.json",
            "mod.jar",
            "mod.properties",
        ]
    );
}

#[test]
fn test_entries_desktop_and_android() {
    let temp = TempDir::new().unwrap();
    let config = project(temp.path(), true, true);

    assert_eq!(
        ArchiveTask::archive(&config).unwrap().entries().unwrap(),
        [
            "assets/textures/block.png",
            "json/blocks.json",
            "mod.dex",
            "mod.jar",
            "mod.properties",
        ]
    );
}

#[test]
fn test_entries_android_only() {
    let temp = TempDir::new().unwrap();
    let config = project(temp.path(), false, true);

    let entries = ArchiveTask::archive(&config).unwrap().entries().unwrap();
    assert!(entries.contains(&"mod.dex".to_string()));
    assert!(!entries.contains(&"mod.jar".to_string()));
}

#[test]
fn test_missing_asset_folders_add_nothing() {
    let temp = TempDir::new().unwrap();
    let mut config = project(temp.path(), true, false);
    config.cubes.assets_folder = "missing-assets".into();
    config.cubes.json_folder = "missing-json".into();

    assert_eq!(
        ArchiveTask::archive(&config).unwrap().entries().unwrap(),
        ["mod.jar", "mod.properties"]
    );
}

#[tokio::test]
async fn test_missing_properties_fails() -> anyhow::Result<()> {
    let temp = TempDir::new()?;
    let config = project(temp.path(), true, false);
    let properties = temp.path().join("build/libs/mod.properties");
    std::fs::remove_file(&properties)?;
    let ctx = TaskContext::new(Arc::new(config), CancellationToken::new());

    let err = ArchiveTask::new().run(&ctx).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("archive error: archive input not found: {}", properties.display())
    );
    assert!(!temp.path().join("build/libs/ExampleMod.cm").exists());
    Ok(())
}

#[tokio::test]
async fn test_writes_archive_and_rebuilds_identically() -> anyhow::Result<()> {
    let temp = TempDir::new()?;
    let ctx = TaskContext::new(
        Arc::new(project(temp.path(), true, true)),
        CancellationToken::new(),
    );
    let cm = temp.path().join("build/libs/ExampleMod.cm");

    ArchiveTask::new().run(&ctx).await?;
    let first = std::fs::read(&cm)?;
    ArchiveTask::new().run(&ctx).await?;
    let second = std::fs::read(&cm)?;
    assert_eq!(first, second);

    let mut zip = zip::ZipArchive::new(std::fs::File::open(&cm)?)?;
    assert_eq!(zip.len(), 5);
    let mut properties = String::new();
    std::io::Read::read_to_string(&mut zip.by_name("mod.properties")?, &mut properties)?;
    assert_eq!(properties, "modName=ExampleMod\n");
    Ok(())
}
