// cubes-mod: Cubes Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Maven dependency resolution for the Cubes artifacts.
//!
//! ```text
//! DependencySets::wire(&cubes)  (scope -> root coordinates)
//!        |
//!        v
//! MavenResolver::resolve(ctx, roots, scope)
//!        |
//!        +--> MavenArtifact  (coordinate -> URL / cache path)
//!        +--> PomDocument    (quick-xml, scopes, properties)
//!        +--> DownloaderTool (repository fallback)
//!        |
//!        v
//!   Vec<PathBuf> classpath
//! ```

pub mod artifact;
pub mod pom;
pub mod resolver;
pub mod scope;


pub use artifact::MavenArtifact;
pub use pom::PomDocument;
pub use resolver::MavenResolver;
pub use scope::{DependencySets, Scope};

/// Join classpath entries with the platform separator.
#[must_use]
pub fn classpath(entries: &[std::path::PathBuf]) -> String {
    let separator = if cfg!(target_os = "windows") {
        ";"
    } else {
        ":"
    };
    entries
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(separator)
}
