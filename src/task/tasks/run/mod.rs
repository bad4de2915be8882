// cubes-mod: Cubes Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `runClient` and `runServer` tasks.
//!
//! ```text
//! RunTask(mode)
//!   cwd  build/run/<client|server>/
//!   java -Xmx<heap> -cp <runClient|runServer scope>
//!        ethanjones.cubes.core.platform.desktop.<Client|Server>Launcher
//!        --mod <abs build/libs/<modName>.cm> <user args...>
//! ```
//!
//! The game's exit code is reported by the process layer as-is.

use std::fmt;
use std::path::PathBuf;

use futures_util::future::BoxFuture;

use crate::config::Config;
use crate::error::Result;
use crate::maven::Scope;
use crate::task::helpers::{ensure_dir, resolve_scope};
use crate::task::tasks::archive::ArchiveTask;
use crate::task::tools::Tool;
use crate::task::tools::java::JavaTool;
use crate::task::{TaskContext, TaskName, Taskable};

/// Which side of the game to launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Client,
    Server,
}

impl RunMode {
    #[must_use]
    pub const fn main_class(self) -> &'static str {
        match self {
            Self::Client => "ethanjones.cubes.core.platform.desktop.ClientLauncher",
            Self::Server => "ethanjones.cubes.core.platform.desktop.ServerLauncher",
        }
    }

    /// Directory name below `build/run`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Server => "server",
        }
    }

    #[must_use]
    pub const fn scope(self) -> Scope {
        match self {
            Self::Client => Scope::RunClient,
            Self::Server => Scope::RunServer,
        }
    }

    #[must_use]
    pub const fn task_name(self) -> TaskName {
        match self {
            Self::Client => TaskName::RunClient,
            Self::Server => TaskName::RunServer,
        }
    }

    fn heap_size(self, config: &Config) -> &str {
        match self {
            Self::Client => &config.cubes.run_client_heap_size,
            Self::Server => &config.cubes.run_server_heap_size,
        }
    }

    fn arguments(self, config: &Config) -> &[String] {
        match self {
            Self::Client => &config.cubes.run_client_arguments,
            Self::Server => &config.cubes.run_server_arguments,
        }
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct RunTask {
    mode: RunMode,
}

impl RunTask {
    #[must_use]
    pub const fn new(mode: RunMode) -> Self {
        Self { mode }
    }

    #[must_use]
    pub const fn mode(&self) -> RunMode {
        self.mode
    }

    /// The `java` invocation for this mode with a resolved `classpath`.
    ///
    /// # Errors
    ///
    /// Returns an error if paths were not resolved.
    pub fn launcher(&self, config: &Config, classpath: Vec<PathBuf>) -> Result<JavaTool> {
        let archive = ArchiveTask::archive_path(config)?;
        Ok(JavaTool::new(self.mode.main_class())
            .heap_size(self.mode.heap_size(config))
            .classpath(classpath)
            .arg("--mod")
            .arg(archive.display().to_string())
            .args(self.mode.arguments(config).iter().cloned())
            .working_dir(config.paths.run_dir(self.mode.as_str())?))
    }

    /// Launches the game and blocks until it exits.
    ///
    /// # Errors
    ///
    /// Returns an error if the classpath cannot be resolved or the game
    /// exits non-zero.
    pub async fn execute(&self, ctx: &TaskContext) -> Result<()> {
        let config = ctx.config();
        let run_dir = config.paths.run_dir(self.mode.as_str())?;
        ensure_dir(ctx, &run_dir, "run directory").await?;

        let classpath = resolve_scope(ctx, self.mode.scope()).await?;
        self.launcher(config, classpath)?
            .run(&ctx.tool_context())
            .await
    }
}

impl Taskable for RunTask {
    fn name(&self) -> TaskName {
        self.mode.task_name()
    }

    fn run<'a>(&'a self, ctx: &'a TaskContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(self.execute(ctx))
    }
}
