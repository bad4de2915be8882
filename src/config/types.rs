// cubes-mod: Cubes Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for cubes-mod.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, CubesExtension, PathsConfig, ToolsConfig, MavenConfig
//! Aliases: alias name -> [task patterns]
//! ```
//!
//! # Dex Backend
//!
//! ```text
//! DexBackend: D8 (default) | Dx (legacy build-tools)
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::logging::LogLevel;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log actions instead of touching the filesystem or spawning tools.
    pub dry: bool,
    /// Log level for stdout output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Log file, relative paths are taken from the working directory.
    /// No file is written when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            dry: false,
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// Task aliases mapping alias names to task patterns.
pub type Aliases = BTreeMap<String, Vec<String>>;

/// Jar to dex converter flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DexBackend {
    /// `d8 --output <dir>`, writes `classes.dex` into a directory.
    #[default]
    D8,
    /// `dx --dex --output=<file>`, writes the dex file directly.
    Dx,
}

impl std::fmt::Display for DexBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::D8 => write!(f, "d8"),
            Self::Dx => write!(f, "dx"),
        }
    }
}

impl std::str::FromStr for DexBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "d8" => Ok(Self::D8),
            "dx" => Ok(Self::Dx),
            _ => Err(ConfigError::InvalidValue {
                section: "tools".to_string(),
                key: "dex_backend".to_string(),
                message: format!("expected 'd8' or 'dx', got '{s}'"),
            }),
        }
    }
}

/// External tool configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolsConfig {
    /// Java launcher used by the run tasks.
    pub java: PathBuf,
    /// Java compiler used by the jar task.
    pub javac: PathBuf,
    /// Dex converter executable.
    pub dex: PathBuf,
    pub dex_backend: DexBackend,
    /// `android.jar` passed to d8 as `--lib`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub android_jar: Option<PathBuf>,
    /// Minimum Android API level passed to d8.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dex_min_api: Option<u32>,
    /// `javac --release` value.
    pub java_release: u32,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            java: PathBuf::from("java"),
            javac: PathBuf::from("javac"),
            dex: PathBuf::from("d8"),
            dex_backend: DexBackend::default(),
            android_jar: None,
            dex_min_api: None,
            java_release: 17,
        }
    }
}

/// Maven Central, the only repository the Cubes artifacts are published to.
pub const MAVEN_CENTRAL: &str = "https://repo.maven.apache.org/maven2/";

/// Repository configuration for dependency resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MavenConfig {
    /// Repository base URLs, tried in order.
    pub repositories: Vec<String>,
}

impl Default for MavenConfig {
    fn default() -> Self {
        Self {
            repositories: vec![MAVEN_CENTRAL.to_string()],
        }
    }
}
