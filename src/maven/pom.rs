// cubes-mod: Cubes Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Minimal POM model for transitive dependency resolution.
//!
//! ```text
//! <project>
//!   groupId / version      (fallback: <parent>)
//!   packaging              jar | pom | bundle ...
//!   <properties>           ${name} substitution
//!   <dependencyManagement> versions for version-less deps
//!   <dependencies>         scope, optional, type, classifier, exclusions
//! ```
//!
//! Parent POMs are not fetched; only the parent's coordinates are used.

use std::collections::BTreeMap;

use quick_xml::de::from_str;
use serde::Deserialize;

use crate::error::{CubesResult, MavenError};

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PomDocument {
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub artifact_id: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub packaging: Option<String>,
    #[serde(default)]
    pub parent: Option<PomParent>,
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
    #[serde(default)]
    pub dependencies: Option<PomDependencies>,
    #[serde(default)]
    pub dependency_management: Option<PomDependencyManagement>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PomParent {
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub artifact_id: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct PomDependencies {
    #[serde(default, rename = "dependency")]
    pub items: Vec<PomDependency>,
}

#[derive(Debug, Deserialize, Default)]
pub struct PomDependencyManagement {
    #[serde(default)]
    pub dependencies: Option<PomDependencies>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PomDependency {
    pub group_id: String,
    pub artifact_id: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub optional: Option<String>,
    #[serde(rename = "type", default)]
    pub dep_type: Option<String>,
    #[serde(default)]
    pub classifier: Option<String>,
    #[serde(default)]
    pub exclusions: Option<PomExclusions>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct PomExclusions {
    #[serde(default, rename = "exclusion")]
    pub items: Vec<PomExclusion>,
}

/// `<exclusion>`; `*` matches any group or artifact.
#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PomExclusion {
    pub group_id: String,
    pub artifact_id: String,
}

impl PomExclusion {
    #[must_use]
    pub fn matches(&self, group_id: &str, artifact_id: &str) -> bool {
        (self.group_id == "*" || self.group_id == group_id)
            && (self.artifact_id == "*" || self.artifact_id == artifact_id)
    }
}

impl PomDependency {
    #[must_use]
    pub fn is_optional(&self) -> bool {
        self.optional.as_deref().map(str::trim) == Some("true")
    }

    /// Declared scope, `compile` when absent.
    #[must_use]
    pub fn scope(&self) -> &str {
        self.scope.as_deref().map_or("compile", str::trim)
    }

    #[must_use]
    pub fn exclusions(&self) -> &[PomExclusion] {
        self.exclusions
            .as_ref()
            .map(|e| e.items.as_slice())
            .unwrap_or_default()
    }
}

/// Upper bound on nested `${...}` expansion.
const MAX_INTERPOLATION_DEPTH: usize = 8;

impl PomDocument {
    /// Parse POM XML.
    ///
    /// # Errors
    ///
    /// Returns `MavenError::PomParse` if the document is not a valid POM.
    pub fn parse(xml: &str, artifact: &str) -> CubesResult<Self> {
        from_str(xml).map_err(|e| {
            MavenError::PomParse {
                artifact: artifact.to_string(),
                message: e.to_string(),
            }
            .into()
        })
    }

    /// Effective `groupId`, inherited from `<parent>` when absent.
    #[must_use]
    pub fn effective_group_id(&self) -> Option<&str> {
        self.group_id
            .as_deref()
            .or_else(|| self.parent.as_ref()?.group_id.as_deref())
    }

    /// Effective `version`, inherited from `<parent>` when absent.
    #[must_use]
    pub fn effective_version(&self) -> Option<&str> {
        self.version
            .as_deref()
            .or_else(|| self.parent.as_ref()?.version.as_deref())
    }

    #[must_use]
    pub fn is_pom_packaging(&self) -> bool {
        self.packaging.as_deref().map(str::trim) == Some("pom")
    }

    fn property(&self, name: &str) -> Option<String> {
        let builtin = match name {
            "project.version" | "pom.version" | "version" => self.effective_version(),
            "project.groupId" | "pom.groupId" | "groupId" => self.effective_group_id(),
            "project.artifactId" | "pom.artifactId" | "artifactId" => self.artifact_id.as_deref(),
            "project.parent.version" | "parent.version" => {
                self.parent.as_ref().and_then(|p| p.version.as_deref())
            }
            "project.parent.groupId" | "parent.groupId" => {
                self.parent.as_ref().and_then(|p| p.group_id.as_deref())
            }
            _ => None,
        };
        builtin
            .map(str::to_string)
            .or_else(|| self.properties.get(name).cloned())
    }

    /// Expand `${name}` references from `<properties>` and the project model.
    ///
    /// Unknown references are left untouched.
    #[must_use]
    pub fn interpolate(&self, value: &str) -> String {
        let mut current = value.trim().to_string();
        for _ in 0..MAX_INTERPOLATION_DEPTH {
            let mut out = String::with_capacity(current.len());
            let mut rest = current.as_str();
            let mut changed = false;

            while let Some(start) = rest.find("${") {
                let Some(len) = rest[start + 2..].find('}') else {
                    break;
                };
                let name = &rest[start + 2..start + 2 + len];
                out.push_str(&rest[..start]);
                match self.property(name) {
                    Some(v) => {
                        out.push_str(v.trim());
                        changed = true;
                    }
                    None => out.push_str(&rest[start..start + 3 + len]),
                }
                rest = &rest[start + 3 + len..];
            }
            out.push_str(rest);

            current = out;
            if !changed {
                break;
            }
        }
        current
    }

    fn managed_version(&self, dep: &PomDependency) -> Option<&str> {
        self.dependency_management
            .as_ref()?
            .dependencies
            .as_ref()?
            .items
            .iter()
            .find(|m| m.group_id == dep.group_id && m.artifact_id == dep.artifact_id)?
            .version
            .as_deref()
    }

    /// Resolve a dependency version, falling back to `dependencyManagement`.
    ///
    /// Returns `None` if no concrete version remains after interpolation.
    #[must_use]
    pub fn resolve_version(&self, dep: &PomDependency) -> Option<String> {
        let raw = dep.version.as_deref().or_else(|| self.managed_version(dep))?;
        let version = self.interpolate(raw);
        if version.is_empty() || version.contains("${") {
            None
        } else {
            Some(version)
        }
    }

    /// Dependencies whose scope is accepted by `include_scope`.
    ///
    /// Optional dependencies are never transitive.
    pub fn dependencies_in<'a>(
        &'a self,
        include_scope: impl Fn(&str) -> bool + 'a,
    ) -> impl Iterator<Item = &'a PomDependency> + 'a {
        self.dependencies
            .iter()
            .flat_map(|d| d.items.iter())
            .filter(move |d| !d.is_optional() && include_scope(d.scope()))
    }
}
