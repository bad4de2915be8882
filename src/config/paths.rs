// cubes-mod: Cubes Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Path configuration.
//!
//! ```text
//! project/
//!   cubes.toml
//!   src/main/java/        (sources)
//!   src/main/resources/   (resources)
//!   .cubes/libraries/     (cache, Maven layout)
//!   build/
//!     classes/
//!     libs/      mod.jar  mod.dex  mod.properties  <modName>.cm
//!     run/
//!       client/
//!       server/
//! ```
//!
//! Every path is optional and resolved from `project` if not set.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Name of the compiled mod jar inside `build/libs`.
pub const MOD_JAR: &str = "mod.jar";
/// Name of the converted dex file inside `build/libs`.
pub const MOD_DEX: &str = "mod.dex";
/// Name of the metadata file inside `build/libs`.
pub const MOD_PROPERTIES: &str = "mod.properties";

/// Project layout configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Project root (default: current directory).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<PathBuf>,
    /// Build output directory (default: project/build).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build: Option<PathBuf>,
    /// Java sources (default: project/src/main/java).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<PathBuf>,
    /// Jar resources (default: project/src/main/resources).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<PathBuf>,
    /// Dependency cache (default: project/.cubes/libraries).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache: Option<PathBuf>,
}

impl PathsConfig {
    /// Make `project` absolute and resolve every other path against it.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn resolve(&mut self) -> Result<()> {
        let project = self
            .project
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        let project = std::path::absolute(&project)?;

        let resolve = |path: &mut Option<PathBuf>, default: &str| match path {
            Some(p) if p.is_relative() => {
                *path = Some(project.join(p.clone()));
            }
            None => {
                *path = Some(project.join(default));
            }
            _ => {}
        };

        resolve(&mut self.build, "build");
        resolve(&mut self.sources, "src/main/java");
        resolve(&mut self.resources, "src/main/resources");
        resolve(&mut self.cache, ".cubes/libraries");

        self.project = Some(project);
        Ok(())
    }

    fn required<'a>(path: Option<&'a PathBuf>, key: &str) -> Result<&'a Path> {
        path.map(PathBuf::as_path).ok_or_else(|| {
            ConfigError::MissingKey {
                section: "paths".to_string(),
                key: key.to_string(),
            }
            .into()
        })
    }

    /// # Errors
    ///
    /// Returns a `ConfigError::MissingKey` if paths were not resolved.
    pub fn project(&self) -> Result<&Path> {
        Self::required(self.project.as_ref(), "project")
    }

    /// # Errors
    ///
    /// Returns a `ConfigError::MissingKey` if paths were not resolved.
    pub fn build(&self) -> Result<&Path> {
        Self::required(self.build.as_ref(), "build")
    }

    /// # Errors
    ///
    /// Returns a `ConfigError::MissingKey` if paths were not resolved.
    pub fn sources(&self) -> Result<&Path> {
        Self::required(self.sources.as_ref(), "sources")
    }

    /// # Errors
    ///
    /// Returns a `ConfigError::MissingKey` if paths were not resolved.
    pub fn resources(&self) -> Result<&Path> {
        Self::required(self.resources.as_ref(), "resources")
    }

    /// # Errors
    ///
    /// Returns a `ConfigError::MissingKey` if paths were not resolved.
    pub fn cache(&self) -> Result<&Path> {
        Self::required(self.cache.as_ref(), "cache")
    }

    /// `build/libs`, where every packaged artifact lands.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::MissingKey` if paths were not resolved.
    pub fn libs_dir(&self) -> Result<PathBuf> {
        Ok(self.build()?.join("libs"))
    }

    /// `build/classes`, javac output.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::MissingKey` if paths were not resolved.
    pub fn classes_dir(&self) -> Result<PathBuf> {
        Ok(self.build()?.join("classes"))
    }

    /// `build/run/<mode>`, working directory of a run task.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::MissingKey` if paths were not resolved.
    pub fn run_dir(&self, mode: &str) -> Result<PathBuf> {
        Ok(self.build()?.join("run").join(mode))
    }

    /// Resolve a project-relative path (asset and json folders).
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::MissingKey` if paths were not resolved.
    pub fn in_project(&self, path: &Path) -> Result<PathBuf> {
        Ok(self.project()?.join(path))
    }
}
