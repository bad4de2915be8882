// cubes-mod: Cubes Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns.

use std::path::PathBuf;

use clap::Parser;
use cubes_mod::cli::build::BuildArgs;
use cubes_mod::cli::global::GlobalOptions;
use cubes_mod::cli::{Cli, Command};

// =============================================================================
// Version Command
// =============================================================================

#[test]
fn cli_version_command() {
    let cli = Cli::try_parse_from(["cubes", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_version_alias() {
    let cli = Cli::try_parse_from(["cubes", "-v"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

// =============================================================================
// Build Command
// =============================================================================

#[test]
fn cli_build_no_args_defaults_to_cm() {
    let cli = Cli::try_parse_from(["cubes", "build"]).unwrap();
    let Some(Command::Build(args)) = cli.command else {
        panic!("expected build command");
    };
    assert!(args.tasks.is_empty());
    assert_eq!(args.requested(), vec!["cm"]);
}

#[test]
fn cli_build_with_tasks() {
    let cli = Cli::try_parse_from(["cubes", "build", "clean", "run*", "modDex"]).unwrap();
    let Some(Command::Build(args)) = cli.command else {
        panic!("expected build command");
    };
    assert_eq!(args.requested(), vec!["clean", "run*", "modDex"]);
}

#[test]
fn cli_build_with_global_options() {
    let cli = Cli::try_parse_from([
        "cubes",
        "--dry",
        "-l",
        "4",
        "-d",
        "mods/example",
        "build",
        "runServer",
    ])
    .unwrap();

    assert!(cli.global.dry);
    assert_eq!(cli.global.log_level, Some(4));
    assert_eq!(cli.global.project_dir, Some(PathBuf::from("mods/example")));
    assert!(matches!(cli.command, Some(Command::Build(_))));
}

#[test]
fn cli_build_unknown_flag_rejected() {
    let result = Cli::try_parse_from(["cubes", "build", "--new"]);
    assert!(result.is_err());
}

// =============================================================================
// List Command
// =============================================================================

#[test]
fn cli_list_flags() {
    let cli = Cli::try_parse_from(["cubes", "list"]).unwrap();
    let Some(Command::List(args)) = cli.command else {
        panic!("expected list command");
    };
    assert!(!args.deps);
    assert!(!args.aliases);

    let cli = Cli::try_parse_from(["cubes", "list", "--deps", "-i"]).unwrap();
    let Some(Command::List(args)) = cli.command else {
        panic!("expected list command");
    };
    assert!(args.deps);
    assert!(args.aliases);
}

// =============================================================================
// Config Commands
// =============================================================================

#[test]
fn cli_options_and_configs() {
    let cli = Cli::try_parse_from(["cubes", "options"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Options)));

    let cli = Cli::try_parse_from(["cubes", "-c", "a.toml", "-c", "b.toml", "configs"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Configs)));
    assert_eq!(
        cli.global.configs,
        vec![PathBuf::from("a.toml"), PathBuf::from("b.toml")]
    );
}

#[test]
fn cli_no_command() {
    let cli = Cli::try_parse_from(["cubes"]).unwrap();
    assert!(cli.command.is_none());
}

#[test]
fn cli_log_level_out_of_range() {
    let result = Cli::try_parse_from(["cubes", "-l", "7", "build"]);
    assert!(result.is_err());
}

// =============================================================================
// Overrides
// =============================================================================

#[test]
fn overrides_flags_after_set_options() {
    let cli = Cli::try_parse_from([
        "cubes",
        "-s",
        "cubes.mod_version=2.0",
        "--set",
        "global.dry=false",
        "--dry",
        "--log-file",
        "logs/cubes.log",
        "-l",
        "2",
        "build",
    ])
    .unwrap();

    insta::assert_debug_snapshot!(cli.global.to_config_overrides(), @r#"
    [
        "cubes.mod_version=2.0",
        "global.dry=false",
        "global.output_log_level=2",
        "global.file_log_level=2",
        "global.log_file=logs/cubes.log",
        "global.dry=true",
    ]
    "#);
}

#[test]
fn project_config_follows_project_dir() {
    let global = GlobalOptions::default();
    assert_eq!(global.project_config(), PathBuf::from("./cubes.toml"));

    let global = GlobalOptions {
        project_dir: Some(PathBuf::from("/work/mod")),
        ..GlobalOptions::default()
    };
    assert_eq!(global.project_config(), PathBuf::from("/work/mod/cubes.toml"));
}

#[test]
fn build_args_default_is_empty() {
    let args = BuildArgs::default();
    assert_eq!(args.requested(), vec!["cm"]);
}
