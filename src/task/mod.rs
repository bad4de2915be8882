// cubes-mod: Cubes Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Task execution system.
//!
//! # Architecture
//!
//! ```text
//! TaskGraphBuilder::register()         static edges
//!      |
//!      v  finalize(&cubes)             flag-dependent cm edges
//! TaskGraph::execution_order(requested)
//!      |
//!      v
//! TaskManager (sequential, stop at first failure)
//!      |
//!      v
//!   Task enum ----> TaskContext (config, cancel token, dependency sets)
//!      |
//!      v
//!    Tools
//!  javac, d8/dx, archive, java, downloader
//! ```
//!
//! # Key Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`TaskName`] | The fixed set of task names |
//! | [`Task`] | Enum dispatching to concrete task implementations |
//! | [`Taskable`] | Trait defining the common task interface |
//! | [`TaskContext`] | Execution context shared by every task of a run |
//! | [`graph::TaskGraph`] | Finalized dependency graph |
//! | [`manager::TaskManager`] | Runs tasks in order with cancellation |
//!
//! The [`Task`] enum implements `Taskable` via the `impl_taskable_for_task!`
//! macro, which generates a match arm per variant delegating to the inner
//! type.

pub mod graph;
pub mod helpers;
pub mod manager;
pub mod registry;
pub mod tasks;
pub mod tools;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use futures_util::future::BoxFuture;
use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::error::{Result, TaskError};
use crate::maven::DependencySets;
use crate::task::tools::ToolContext;

use tasks::archive::ArchiveTask;
use tasks::clean::CleanTask;
use tasks::dependencies::DependenciesTask;
use tasks::dex::DexTask;
use tasks::jar::JarTask;
use tasks::properties::PropertiesTask;
use tasks::run::{RunMode, RunTask};

/// Every task the tool knows, in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TaskName {
    Dependencies,
    Jar,
    ModDex,
    ModProperties,
    Cm,
    RunClient,
    RunServer,
    Clean,
}

impl TaskName {
    pub const ALL: [Self; 8] = [
        Self::Dependencies,
        Self::Jar,
        Self::ModDex,
        Self::ModProperties,
        Self::Cm,
        Self::RunClient,
        Self::RunServer,
        Self::Clean,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dependencies => "dependencies",
            Self::Jar => "jar",
            Self::ModDex => "modDex",
            Self::ModProperties => "modProperties",
            Self::Cm => "cm",
            Self::RunClient => "runClient",
            Self::RunServer => "runServer",
            Self::Clean => "clean",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Dependencies => "Resolves the Cubes dependencies into the local cache",
            Self::Jar => "Compiles the mod and packages mod.jar",
            Self::ModDex => "Creates .dex to run on android",
            Self::ModProperties => "Creates mod properties file",
            Self::Cm => "Builds Cubes cm file",
            Self::RunClient => "Runs Cubes Client",
            Self::RunServer => "Runs Cubes Server",
            Self::Clean => "Deletes the build directory",
        }
    }
}

impl fmt::Display for TaskName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskName {
    type Err = TaskError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| TaskError::NotFound(s.to_string()))
    }
}

/// Common interface of all task types.
///
/// # Example
///
/// ```ignore
/// impl Taskable for MyTask {
///     fn name(&self) -> TaskName { TaskName::Jar }
///     fn run<'a>(&'a self, ctx: &'a TaskContext) -> BoxFuture<'a, Result<()>> {
///         Box::pin(self.execute(ctx))
///     }
/// }
/// ```
pub trait Taskable {
    fn name(&self) -> TaskName;

    /// Executes the task. Every invocation does the full work.
    fn run<'a>(&'a self, ctx: &'a TaskContext) -> BoxFuture<'a, Result<()>>;
}

/// Context provided to tasks during execution.
#[derive(Clone)]
pub struct TaskContext {
    config: Arc<Config>,

    cancel_token: CancellationToken,

    dry_run: bool,

    /// Root coordinates per scope, wired from the final configuration.
    dependencies: Arc<DependencySets>,
}

impl TaskContext {
    /// Creates a context and wires the dependency sets from `config.cubes`.
    #[must_use]
    pub fn new(config: Arc<Config>, cancel_token: CancellationToken) -> Self {
        let dependencies = Arc::new(DependencySets::wire(&config.cubes));
        Self {
            config,
            cancel_token,
            dry_run: false,
            dependencies,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &Arc<Config> {
        &self.config
    }

    #[must_use]
    pub const fn cancel_token(&self) -> &CancellationToken {
        &self.cancel_token
    }

    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    #[must_use]
    pub fn dependencies(&self) -> &DependencySets {
        &self.dependencies
    }

    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }

    #[must_use]
    pub fn tool_context(&self) -> ToolContext {
        ToolContext::new(
            Arc::clone(&self.config),
            self.cancel_token.clone(),
            self.dry_run,
        )
    }
}

/// A build task.
#[derive(Debug, Clone)]
pub enum Task {
    Dependencies(DependenciesTask),
    Jar(JarTask),
    ModDex(DexTask),
    ModProperties(PropertiesTask),
    Cm(ArchiveTask),
    Run(RunTask),
    Clean(CleanTask),
}

impl Task {
    /// Creates the task registered under `name`.
    #[must_use]
    pub const fn new(name: TaskName) -> Self {
        match name {
            TaskName::Dependencies => Self::Dependencies(DependenciesTask::new()),
            TaskName::Jar => Self::Jar(JarTask::new()),
            TaskName::ModDex => Self::ModDex(DexTask::new()),
            TaskName::ModProperties => Self::ModProperties(PropertiesTask::new()),
            TaskName::Cm => Self::Cm(ArchiveTask::new()),
            TaskName::RunClient => Self::Run(RunTask::new(RunMode::Client)),
            TaskName::RunServer => Self::Run(RunTask::new(RunMode::Server)),
            TaskName::Clean => Self::Clean(CleanTask::new()),
        }
    }
}

/// Macro to implement Taskable for Task enum by delegating to inner types.
macro_rules! impl_taskable_for_task {
    ($($variant:ident),+ $(,)?) => {
        impl Taskable for Task {
            fn name(&self) -> TaskName {
                match self {
                    $(Task::$variant(t) => Taskable::name(t),)+
                }
            }

            fn run<'a>(&'a self, ctx: &'a TaskContext) -> BoxFuture<'a, Result<()>> {
                match self {
                    $(Task::$variant(t) => Taskable::run(t, ctx),)+
                }
            }
        }
    };
}

impl_taskable_for_task!(
    Dependencies,
    Jar,
    ModDex,
    ModProperties,
    Cm,
    Run,
    Clean,
);
