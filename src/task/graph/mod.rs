// cubes-mod: Cubes Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Task dependency graph.
//!
//! The graph is built in two phases. Static edges are known at
//! registration; the `cm` edges depend on the platform flags and are only
//! added once configuration is final.
//!
//! ```text
//! register()            finalize(&cubes)
//!
//! modDex    -> jar      cm -> jar            (build_desktop)
//! runClient -> cm       cm -> modDex         (build_android)
//! runServer -> cm       cm -> modProperties  (always)
//! ```
//!
//! `dependencies` stands alone: `jar` and the run tasks resolve the scope
//! they need themselves.
//!
//! Only a finalized [`TaskGraph`] yields an execution order.

use std::collections::{BTreeMap, HashSet};

use tracing::{debug, warn};

use crate::config::cubes::CubesExtension;
use crate::error::{CubesResult, TaskError};

use super::TaskName;

type Edges = BTreeMap<TaskName, Vec<TaskName>>;

/// Graph under construction; static edges only.
#[derive(Debug, Clone, Default)]
pub struct TaskGraphBuilder {
    edges: Edges,
}

impl TaskGraphBuilder {
    /// Registers every task with its static dependencies.
    #[must_use]
    pub fn register() -> Self {
        let mut builder = Self::default();
        for name in TaskName::ALL {
            builder.edges.entry(name).or_default();
        }
        builder
            .depends_on(TaskName::ModDex, TaskName::Jar)
            .depends_on(TaskName::RunClient, TaskName::Cm)
            .depends_on(TaskName::RunServer, TaskName::Cm)
    }

    /// Adds an edge `task -> dependency`. Duplicate edges are ignored.
    #[must_use]
    pub fn depends_on(mut self, task: TaskName, dependency: TaskName) -> Self {
        let deps = self.edges.entry(task).or_default();
        if !deps.contains(&dependency) {
            deps.push(dependency);
        }
        self.edges.entry(dependency).or_default();
        self
    }

    /// Adds the platform-dependent archive edges and freezes the graph.
    ///
    /// Incomplete configuration is reported as warnings only.
    #[must_use]
    pub fn finalize(self, cubes: &CubesExtension) -> TaskGraph {
        for warning in cubes.check() {
            warn!("{warning}");
        }

        let mut builder = self;
        if cubes.build_desktop {
            builder = builder.depends_on(TaskName::Cm, TaskName::Jar);
        }
        if cubes.build_android {
            builder = builder.depends_on(TaskName::Cm, TaskName::ModDex);
        }
        builder = builder.depends_on(TaskName::Cm, TaskName::ModProperties);

        debug!(
            desktop = cubes.build_desktop,
            android = cubes.build_android,
            "task graph finalized"
        );
        TaskGraph {
            edges: builder.edges,
        }
    }
}

/// Finalized, immutable task graph.
#[derive(Debug, Clone)]
pub struct TaskGraph {
    edges: Edges,
}

impl TaskGraph {
    /// Direct dependencies of `task`, in declaration order.
    #[must_use]
    pub fn dependencies(&self, task: TaskName) -> &[TaskName] {
        self.edges.get(&task).map_or(&[], Vec::as_slice)
    }

    /// Returns `requested` plus everything they depend on, dependencies
    /// first. Each task appears once.
    ///
    /// # Errors
    ///
    /// Returns `TaskError::Cycle` if the graph contains a cycle.
    pub fn execution_order(&self, requested: &[TaskName]) -> CubesResult<Vec<TaskName>> {
        let mut order = Vec::new();
        let mut done = HashSet::new();
        let mut stack = Vec::new();

        for &task in requested {
            self.visit(task, &mut stack, &mut done, &mut order)?;
        }
        Ok(order)
    }

    fn visit(
        &self,
        task: TaskName,
        stack: &mut Vec<TaskName>,
        done: &mut HashSet<TaskName>,
        order: &mut Vec<TaskName>,
    ) -> CubesResult<()> {
        if done.contains(&task) {
            return Ok(());
        }
        if let Some(pos) = stack.iter().position(|&t| t == task) {
            let path = stack[pos..]
                .iter()
                .chain(std::iter::once(&task))
                .map(ToString::to_string)
                .collect();
            return Err(TaskError::Cycle { path }.into());
        }

        stack.push(task);
        for &dep in self.dependencies(task) {
            self.visit(dep, stack, done, order)?;
        }
        stack.pop();

        done.insert(task);
        order.push(task);
        Ok(())
    }
}
