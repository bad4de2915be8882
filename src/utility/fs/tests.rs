// cubes-mod: Cubes Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::walk::{WalkOptions, find_files, is_default_excluded, parallel_walk};
use std::ffi::OsStr;
use std::path::PathBuf;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn relative_sorted(root: &std::path::Path, files: &[PathBuf]) -> Vec<String> {
    let mut names: Vec<String> = files
        .iter()
        .map(|p| {
            p.strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();
    names.sort();
    names
}

#[test]
fn test_parallel_walk() {
    let temp = temp_dir();

    std::fs::create_dir(temp.path().join("blocks")).unwrap();
    std::fs::write(temp.path().join("texture.png"), "").unwrap();
    std::fs::write(temp.path().join("blocks/stone.png"), "").unwrap();

    let result = parallel_walk(temp.path(), &WalkOptions::default()).unwrap();

    assert_eq!(result.error_count(), 0);
    assert_eq!(
        relative_sorted(temp.path(), result.files()),
        ["blocks/stone.png", "texture.png"]
    );
}

#[test]
fn test_parallel_walk_hidden_files() {
    let temp = temp_dir();
    std::fs::write(temp.path().join(".DS_Store"), "").unwrap();
    std::fs::write(temp.path().join("block.json"), "{}").unwrap();

    let default = parallel_walk(temp.path(), &WalkOptions::default()).unwrap();
    assert_eq!(relative_sorted(temp.path(), default.files()), ["block.json"]);

    let hidden = WalkOptions::builder().with_include_hidden(true).build();
    let outputs = parallel_walk(temp.path(), &hidden).unwrap();
    assert_eq!(
        relative_sorted(temp.path(), outputs.files()),
        [".DS_Store", "block.json"]
    );
}

#[test]
fn test_parallel_walk_default_excludes_keep_dotfiles() {
    let temp = temp_dir();
    std::fs::create_dir_all(temp.path().join(".meta")).unwrap();
    std::fs::create_dir_all(temp.path().join(".git/objects")).unwrap();
    std::fs::write(temp.path().join(".meta/a.png"), "png").unwrap();
    std::fs::write(temp.path().join(".blockinfo"), "").unwrap();
    std::fs::write(temp.path().join(".git/objects/ab"), "").unwrap();
    std::fs::write(temp.path().join(".DS_Store"), "").unwrap();
    std::fs::write(temp.path().join("block.json~"), "").unwrap();
    std::fs::write(temp.path().join("block.json"), "{}").unwrap();

    let options = WalkOptions::builder()
        .with_include_hidden(true)
        .with_default_excludes(true)
        .build();
    let result = parallel_walk(temp.path(), &options).unwrap();
    assert_eq!(
        relative_sorted(temp.path(), result.files()),
        [".blockinfo", ".meta/a.png", "block.json"]
    );
}

#[test]
fn test_default_excluded_names() {
    for name in [
        ".git",
        ".svn",
        "CVS",
        ".DS_Store",
        "._icon.png",
        "Mod.java~",
        "#draft#",
        ".#lock",
    ] {
        assert!(is_default_excluded(OsStr::new(name)), "{name}");
    }
    for name in [".blockinfo", ".meta", "#", "icon.png", "git"] {
        assert!(!is_default_excluded(OsStr::new(name)), "{name}");
    }
}

#[test]
fn test_parallel_walk_ignores_gitignore_by_default() {
    let temp = temp_dir();
    std::fs::create_dir(temp.path().join(".git")).unwrap();
    std::fs::write(temp.path().join(".gitignore"), "build/\n").unwrap();
    std::fs::create_dir_all(temp.path().join("build/classes")).unwrap();
    std::fs::write(temp.path().join("build/classes/Mod.class"), "").unwrap();

    let classes = temp.path().join("build/classes");
    let result = parallel_walk(&classes, &WalkOptions::default()).unwrap();
    assert_eq!(relative_sorted(&classes, result.files()), ["Mod.class"]);
}

#[test]
fn test_parallel_walk_missing_root() {
    let temp = temp_dir();
    let err = parallel_walk(temp.path().join("missing"), &WalkOptions::default()).unwrap_err();
    assert!(err.to_string().starts_with("root directory does not exist"));
}

#[test]
fn test_find_files() {
    let temp = temp_dir();

    std::fs::create_dir_all(temp.path().join("com/example")).unwrap();
    std::fs::write(temp.path().join("com/example/ExampleMod.java"), "").unwrap();
    std::fs::write(temp.path().join("com/example/notes.txt"), "").unwrap();
    std::fs::write(temp.path().join("Root.java"), "").unwrap();

    let sources = find_files(temp.path(), "**/*.java", &WalkOptions::default()).unwrap();

    assert_eq!(
        relative_sorted(temp.path(), &sources),
        ["Root.java", "com/example/ExampleMod.java"]
    );
}

#[test]
fn test_find_files_invalid_pattern() {
    let temp = temp_dir();
    assert!(find_files(temp.path(), "**/{", &WalkOptions::default()).is_err());
}
