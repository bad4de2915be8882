// cubes-mod: Cubes Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Maven coordinates and repository layout.
//!
//! ```text
//! ethanjones.cubes:core:0.0.5[:classifier][@ext]
//!        |
//!        v
//! <repo>/ethanjones/cubes/core/0.0.5/core-0.0.5[-classifier].<ext>
//! <cache>/ethanjones/cubes/core/0.0.5/core-0.0.5[-classifier].<ext>
//! ```

use std::fmt;
use std::path::PathBuf;

use crate::error::{CubesResult, MavenError};

/// A parsed `group:artifact:version[:classifier][@extension]` coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MavenArtifact {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub classifier: Option<String>,
    /// File extension, `jar` unless overridden with `@ext`.
    pub extension: String,
}

impl MavenArtifact {
    /// Parse a coordinate string.
    ///
    /// Every segment must be non-empty, so `ethanjones.cubes:core:` (a blank
    /// version) is rejected.
    ///
    /// # Errors
    ///
    /// Returns `MavenError::InvalidCoordinate` for malformed input.
    pub fn parse(coord: &str) -> CubesResult<Self> {
        let invalid = || MavenError::InvalidCoordinate(coord.to_string());

        let (coord_part, extension) = match coord.rsplit_once('@') {
            Some((head, ext)) => (head, ext),
            None => (coord, "jar"),
        };
        if extension.is_empty() {
            return Err(invalid().into());
        }

        let parts: Vec<&str> = coord_part.split(':').collect();
        if parts.iter().any(|p| p.trim().is_empty()) {
            return Err(invalid().into());
        }

        let (classifier, [group_id, artifact_id, version]) = match parts.as_slice() {
            [g, a, v] => (None, [*g, *a, *v]),
            [g, a, v, c] => (Some((*c).to_string()), [*g, *a, *v]),
            _ => return Err(invalid().into()),
        };

        Ok(Self {
            group_id: group_id.to_string(),
            artifact_id: artifact_id.to_string(),
            version: version.to_string(),
            classifier,
            extension: extension.to_string(),
        })
    }

    /// `group:artifact[:classifier]`, the identity used for conflict resolution.
    #[must_use]
    pub fn key(&self) -> String {
        match &self.classifier {
            Some(c) => format!("{}:{}:{}", self.group_id, self.artifact_id, c),
            None => format!("{}:{}", self.group_id, self.artifact_id),
        }
    }

    /// `ethanjones/cubes`
    #[must_use]
    pub fn group_path(&self) -> String {
        self.group_id.replace('.', "/")
    }

    /// `artifact-version[-classifier].ext`
    #[must_use]
    pub fn filename(&self) -> String {
        match &self.classifier {
            Some(c) => format!(
                "{}-{}-{}.{}",
                self.artifact_id, self.version, c, self.extension
            ),
            None => format!("{}-{}.{}", self.artifact_id, self.version, self.extension),
        }
    }

    /// Download URL below a repository base.
    #[must_use]
    pub fn url(&self, repo_base: &str) -> String {
        format!(
            "{}/{}/{}/{}/{}",
            repo_base.trim_end_matches('/'),
            self.group_path(),
            self.artifact_id,
            self.version,
            self.filename()
        )
    }

    /// Path relative to the local cache, mirroring the repository layout.
    #[must_use]
    pub fn local_path(&self) -> PathBuf {
        PathBuf::from(self.group_path())
            .join(&self.artifact_id)
            .join(&self.version)
            .join(self.filename())
    }

    /// The POM describing this artifact (classifier dropped).
    #[must_use]
    pub fn pom(&self) -> Self {
        Self {
            classifier: None,
            extension: "pom".to_string(),
            ..self.clone()
        }
    }
}

impl fmt::Display for MavenArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)?;
        if let Some(c) = &self.classifier {
            write!(f, ":{c}")?;
        }
        if self.extension != "jar" {
            write!(f, "@{}", self.extension)?;
        }
        Ok(())
    }
}
