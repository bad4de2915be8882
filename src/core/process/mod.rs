// cubes-mod: Cubes Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async process spawning for the external JDK and Android tools.
//!
//! ```text
//! ProcessBuilder::new("javac")
//!   .args() .cwd() .name() .capture_output() .inherit_stdio()
//!   .run_with_cancellation(token)
//!       --> tokio::process::Command
//!           stream stdout/stderr (or inherit)
//!           cancel => kill
//!       --> ProcessOutput { exit_code, stdout, stderr, interrupted }
//! ```

pub mod builder;
mod io;
mod runner;
