// cubes-mod: Cubes Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for cubes-mod.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low -> high)
//! 1. defaults
//! 2. <project>/cubes.toml
//! 3. --config
//! 4. CUBES_* env vars
//! 5. --set and CLI flags
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! CUBES_GLOBAL__DRY=true              -> global.dry = true
//! CUBES_CUBES__MOD_NAME=ExampleMod    -> cubes.mod_name = "ExampleMod"
//! CUBES_TOOLS__DEX_BACKEND=dx         -> tools.dex_backend = "dx"
//! ```

pub mod cubes;
pub mod loader;
pub mod paths;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::Result;

use cubes::CubesExtension;
use loader::ConfigLoader;
use paths::PathsConfig;
use types::{Aliases, GlobalConfig, MavenConfig, ToolsConfig};

/// File name of the project configuration.
pub const PROJECT_CONFIG: &str = "cubes.toml";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Mod metadata and build flags.
    pub cubes: CubesExtension,
    /// Task aliases.
    pub aliases: Aliases,
    /// External tools.
    pub tools: ToolsConfig,
    /// Dependency repositories.
    pub maven: MavenConfig,
    /// Project layout.
    pub paths: PathsConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use cubes_mod::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("cubes.toml")
    ///     .with_env_prefix("CUBES")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Resolve all paths against the project directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the project directory cannot be made absolute.
    pub fn resolve_and_validate(&mut self) -> Result<()> {
        self.paths.resolve()
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_cubes_options(&mut options);
        self.format_tools_options(&mut options);
        self.format_maven_options(&mut options);
        self.format_paths_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("global.dry".into(), self.global.dry.to_string());
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        if let Some(log_file) = &self.global.log_file {
            options.insert("global.log_file".into(), log_file.display().to_string());
        }
    }

    fn format_cubes_options(&self, options: &mut BTreeMap<String, String>) {
        let cubes = &self.cubes;
        let list = |args: &[String]| format!("[{}]", args.join(", "));

        options.insert("cubes.cubes_version".into(), cubes.cubes_version.clone());
        options.insert("cubes.mod_version".into(), cubes.mod_version.clone());
        options.insert("cubes.mod_class".into(), cubes.mod_class.clone());
        options.insert("cubes.mod_name".into(), cubes.mod_name.clone());
        options.insert(
            "cubes.assets_folder".into(),
            cubes.assets_folder.display().to_string(),
        );
        options.insert(
            "cubes.json_folder".into(),
            cubes.json_folder.display().to_string(),
        );
        options.insert(
            "cubes.run_client_heap_size".into(),
            cubes.run_client_heap_size.clone(),
        );
        options.insert(
            "cubes.run_client_arguments".into(),
            list(&cubes.run_client_arguments),
        );
        options.insert(
            "cubes.run_server_heap_size".into(),
            cubes.run_server_heap_size.clone(),
        );
        options.insert(
            "cubes.run_server_arguments".into(),
            list(&cubes.run_server_arguments),
        );
        options.insert("cubes.build_android".into(), cubes.build_android.to_string());
        options.insert("cubes.build_desktop".into(), cubes.build_desktop.to_string());
    }

    fn format_tools_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("tools.java".into(), self.tools.java.display().to_string());
        options.insert("tools.javac".into(), self.tools.javac.display().to_string());
        options.insert("tools.dex".into(), self.tools.dex.display().to_string());
        options.insert(
            "tools.dex_backend".into(),
            self.tools.dex_backend.to_string(),
        );
        if let Some(android_jar) = &self.tools.android_jar {
            options.insert(
                "tools.android_jar".into(),
                android_jar.display().to_string(),
            );
        }
        if let Some(min_api) = self.tools.dex_min_api {
            options.insert("tools.dex_min_api".into(), min_api.to_string());
        }
        options.insert(
            "tools.java_release".into(),
            self.tools.java_release.to_string(),
        );
    }

    fn format_maven_options(&self, options: &mut BTreeMap<String, String>) {
        for (i, repo) in self.maven.repositories.iter().enumerate() {
            options.insert(format!("maven.repositories[{i}]"), repo.clone());
        }
    }

    fn format_paths_options(&self, options: &mut BTreeMap<String, String>) {
        let fmt = |p: &Option<PathBuf>| {
            p.as_ref()
                .map_or_else(String::new, |p| p.display().to_string())
        };

        options.insert("paths.project".into(), fmt(&self.paths.project));
        options.insert("paths.build".into(), fmt(&self.paths.build));
        options.insert("paths.sources".into(), fmt(&self.paths.sources));
        options.insert("paths.resources".into(), fmt(&self.paths.resources));
        options.insert("paths.cache".into(), fmt(&self.paths.cache));
    }
}
