// cubes-mod: Cubes Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem traversal.
//!
//! ```text
//! walk:  parallel_walk()  ignore::WalkParallel (multi-core)
//!        find_files()     wax glob on the root-relative path
//!        WalkOptions      max_depth, hidden, gitignore
//! ```

pub mod walk;

#[cfg(test)]
mod tests;
