// cubes-mod: Cubes Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The `[cubes]` section: mod metadata and build flags.
//!
//! ```toml
//! [cubes]
//! cubes_version = "0.0.5"
//! mod_name = "ExampleMod"
//! mod_version = "1.0"
//! mod_class = "example.ExampleMod"
//! build_android = true
//! ```
//!
//! The camelCase names used by mod build scripts (`cubesVersion`,
//! `modName`, ...) are accepted as aliases.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::OnceLock;

/// Mod configuration, read once per invocation and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CubesExtension {
    /// Cubes release the mod is built against.
    #[serde(alias = "cubesVersion", alias = "cubesversion")]
    pub cubes_version: String,
    #[serde(alias = "modVersion", alias = "modversion")]
    pub mod_version: String,
    /// Fully qualified entry class of the mod.
    #[serde(alias = "modClass", alias = "modclass")]
    pub mod_class: String,
    /// Display name, also the archive file stem.
    #[serde(alias = "modName", alias = "modname")]
    pub mod_name: String,
    /// Directory packaged under `assets/`.
    #[serde(alias = "assetsFolder", alias = "assetsfolder")]
    pub assets_folder: PathBuf,
    /// Directory packaged under `json/`.
    #[serde(alias = "jsonFolder", alias = "jsonfolder")]
    pub json_folder: PathBuf,
    #[serde(alias = "runClientHeapSize", alias = "runclientheapsize")]
    pub run_client_heap_size: String,
    #[serde(alias = "runClientArguments", alias = "runclientarguments")]
    pub run_client_arguments: Vec<String>,
    #[serde(alias = "runServerHeapSize", alias = "runserverheapsize")]
    pub run_server_heap_size: String,
    #[serde(alias = "runServerArguments", alias = "runserverarguments")]
    pub run_server_arguments: Vec<String>,
    /// Convert the mod to dex and ship `mod.dex`.
    #[serde(alias = "buildAndroid", alias = "buildandroid")]
    pub build_android: bool,
    /// Ship `mod.jar`.
    #[serde(alias = "buildDesktop", alias = "builddesktop")]
    pub build_desktop: bool,
}

impl Default for CubesExtension {
    fn default() -> Self {
        Self {
            cubes_version: String::new(),
            mod_version: String::new(),
            mod_class: String::new(),
            mod_name: String::new(),
            assets_folder: PathBuf::from("assets/"),
            json_folder: PathBuf::from("json/"),
            run_client_heap_size: "2G".to_string(),
            run_client_arguments: Vec::new(),
            run_server_heap_size: "2G".to_string(),
            run_server_arguments: Vec::new(),
            build_android: false,
            build_desktop: true,
        }
    }
}

/// `-Xmx` accepts a byte count with an optional k/m/g/t suffix.
fn is_valid_heap_size(value: &str) -> bool {
    static HEAP_SIZE: OnceLock<Option<Regex>> = OnceLock::new();
    HEAP_SIZE
        .get_or_init(|| Regex::new(r"^[0-9]+[kKmMgGtT]?$").ok())
        .as_ref()
        .is_some_and(|re| re.is_match(value))
}

impl CubesExtension {
    /// File name of the packaged archive, `<modName>.cm`.
    #[must_use]
    pub fn archive_name(&self) -> String {
        format!("{}.cm", self.mod_name)
    }

    /// Collect diagnostics for values that will fail later in the build.
    ///
    /// Nothing here is fatal: blank fields are written as-is and surface
    /// downstream (malformed coordinate, `.cm` with an empty stem).
    #[must_use]
    pub fn check(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        let required = [
            ("cubes_version", &self.cubes_version),
            ("mod_version", &self.mod_version),
            ("mod_class", &self.mod_class),
            ("mod_name", &self.mod_name),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                warnings.push(format!("cubes.{key} is not set"));
            }
        }

        for (key, value) in [
            ("run_client_heap_size", &self.run_client_heap_size),
            ("run_server_heap_size", &self.run_server_heap_size),
        ] {
            if !is_valid_heap_size(value) {
                warnings.push(format!("cubes.{key} '{value}' is not a valid -Xmx size"));
            }
        }

        if !self.build_android && !self.build_desktop {
            warnings.push("neither build_android nor build_desktop is enabled".to_string());
        }

        warnings
    }
}
