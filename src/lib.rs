// cubes-mod: Cubes Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |             build / list / config
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, layered settings  |
//!              '--+-----------+--------+---'
//!                 |           |        |
//!                 v           v        v
//!              task         maven     net
//!         graph/manager   POM, cache  HTTP/DL
//!               |
//!          +----+----+
//!          v         v
//!       tasks      tools
//!   jar/cm/run   javac/d8/java/zip
//!
//!   +-----------------------------------------+
//!   |  core         process                   |
//!   +-----------------------------------------+
//!   |  foundation   error, logging, utility,  |
//!   |               properties                |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod maven;
pub mod net;
pub mod properties;
pub mod task;
pub mod utility;
