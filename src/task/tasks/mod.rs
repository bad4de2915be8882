// cubes-mod: Cubes Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Concrete task implementations.
//!
//! ```text
//! task::tasks
//! Resolve:  DependenciesTask  (Maven -> cache)
//! Compile:  JarTask           (javac -> mod.jar)
//! Convert:  DexTask           (d8/dx -> mod.dex)
//! Generate: PropertiesTask    (mod.properties)
//! Package:  ArchiveTask       (<modName>.cm)
//! Launch:   RunTask           (client / server)
//! Clean:    CleanTask         (build/)
//! ```

pub mod archive;
pub mod clean;
pub mod dependencies;
pub mod dex;
pub mod jar;
pub mod properties;
pub mod run;
