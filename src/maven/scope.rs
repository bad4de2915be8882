// cubes-mod: Cubes Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Dependency scopes and the Cubes artifacts wired into them.
//!
//! ```text
//! cubes_version (final config)
//!        |
//!        v
//! compile    <- ethanjones.cubes:core:<v>
//! runClient  <- ethanjones.cubes:client:<v>
//! runServer  <- ethanjones.cubes:server:<v>
//! ```

use std::fmt;

use crate::config::cubes::CubesExtension;

/// Group of every artifact published by the game.
pub const CUBES_GROUP: &str = "ethanjones.cubes";

/// A named classpath.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Scope {
    /// Classpath for `javac`.
    Compile,
    /// Classpath of the client launcher.
    RunClient,
    /// Classpath of the server launcher.
    RunServer,
}

impl Scope {
    pub const ALL: [Self; 3] = [Self::Compile, Self::RunClient, Self::RunServer];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compile => "compile",
            Self::RunClient => "runClient",
            Self::RunServer => "runServer",
        }
    }

    /// Whether a transitive POM dependency with `pom_scope` belongs here.
    ///
    /// `test`, `provided` and `system` never do.
    #[must_use]
    pub fn includes(self, pom_scope: &str) -> bool {
        match self {
            Self::Compile => pom_scope == "compile",
            Self::RunClient | Self::RunServer => matches!(pom_scope, "compile" | "runtime"),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Root coordinates per scope.
///
/// Built from the finalized configuration; coordinates are kept as strings
/// so a blank `cubes_version` fails only when a scope is resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencySets {
    compile: Vec<String>,
    run_client: Vec<String>,
    run_server: Vec<String>,
}

impl DependencySets {
    /// Wire the Cubes artifacts for `cubes.cubes_version`.
    #[must_use]
    pub fn wire(cubes: &CubesExtension) -> Self {
        let coord = |module: &str| format!("{CUBES_GROUP}:{module}:{}", cubes.cubes_version);
        Self {
            compile: vec![coord("core")],
            run_client: vec![coord("client")],
            run_server: vec![coord("server")],
        }
    }

    #[must_use]
    pub fn roots(&self, scope: Scope) -> &[String] {
        match scope {
            Scope::Compile => &self.compile,
            Scope::RunClient => &self.run_client,
            Scope::RunServer => &self.run_server,
        }
    }
}
