// cubes-mod: Cubes Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::{Path, PathBuf};

use super::{LogConfig, LogLevel};
use crate::config::types::GlobalConfig;

#[test]
fn test_log_level_range() {
    assert_eq!(LogLevel::new(0).ok(), Some(LogLevel::SILENT));
    assert_eq!(LogLevel::new(6).ok(), Some(LogLevel::DUMP));

    let err = LogLevel::new(7).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"invalid value for 'log_level' in section '[global]': log level must be 0-6, got 7");
}

#[test]
fn test_filter_strings() {
    let filters: Vec<_> = (0..=6)
        .map(|n| LogLevel::new(n).unwrap().to_filter_string())
        .collect();
    assert_eq!(
        filters,
        ["off", "error", "warn", "info", "debug", "info,cubes_mod=trace", "trace"]
    );
}

#[test]
fn test_log_level_serde() {
    let level: LogLevel = serde_json::from_str("4").unwrap();
    assert_eq!(level, LogLevel::DEBUG);
    assert_eq!(serde_json::to_string(&level).unwrap(), "4");
    assert!(serde_json::from_str::<LogLevel>("9").is_err());
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::INFO);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert!(config.log_file().is_none());
    assert!(!config.show_target());
}

#[test]
fn test_log_config_from_global() {
    let global = GlobalConfig {
        output_log_level: LogLevel::DEBUG,
        file_log_level: LogLevel::DUMP,
        log_file: Some(PathBuf::from("build/cubes.log")),
        ..GlobalConfig::default()
    };

    let config = LogConfig::from(&global);
    assert_eq!(config.console_level(), LogLevel::DEBUG);
    assert_eq!(config.file_level(), LogLevel::DUMP);
    assert_eq!(config.log_file(), Some(Path::new("build/cubes.log")));
    assert!(config.show_target());

    let config = LogConfig::from(&GlobalConfig::default());
    assert!(config.log_file().is_none());
    assert!(!config.show_target());
}
