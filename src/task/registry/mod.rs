// cubes-mod: Cubes Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Task registry for resolving task names and aliases.
//!
//! ```text
//! input ["package", "run*"]
//!   resolve_aliases: "package" --> [clean, cm]
//!   match_pattern:   "run*"    --> [runClient, runServer]
//!   dedupe + preserve order
//! ```

use std::collections::BTreeSet;

use anyhow::Context;
use wax::{Glob, Program};

use crate::config::types::Aliases;
use crate::error::{CubesError, Result, TaskError};

use super::TaskName;

/// Registry for looking up tasks by name, alias or glob pattern.
pub struct TaskRegistry {
    task_names: BTreeSet<TaskName>,

    /// Aliases mapping names to task patterns.
    aliases: Aliases,
}

impl TaskRegistry {
    /// Creates a registry holding every known task.
    #[must_use]
    pub fn new(aliases: Aliases) -> Self {
        Self {
            task_names: TaskName::ALL.into_iter().collect(),
            aliases,
        }
    }

    #[must_use]
    pub const fn all_tasks(&self) -> &BTreeSet<TaskName> {
        &self.task_names
    }

    #[must_use]
    pub const fn aliases(&self) -> &Aliases {
        &self.aliases
    }

    /// Expands aliases, recursively. Non-alias patterns are returned as-is.
    ///
    /// An alias that refers back to itself is left unexpanded at the point
    /// of recursion.
    #[must_use]
    pub fn resolve_aliases(&self, patterns: &[String]) -> Vec<String> {
        let mut result = Vec::new();
        self.expand(patterns, &mut Vec::new(), &mut result);
        result
    }

    fn expand<'a>(
        &'a self,
        patterns: &'a [String],
        active: &mut Vec<&'a str>,
        result: &mut Vec<String>,
    ) {
        for pattern in patterns {
            match self.aliases.get(pattern) {
                Some(targets) if !active.contains(&pattern.as_str()) => {
                    active.push(pattern);
                    self.expand(targets, active, result);
                    active.pop();
                }
                _ => result.push(pattern.clone()),
            }
        }
    }

    /// Matches a glob pattern against task names.
    ///
    /// - `"*"` matches all tasks
    /// - `"run*"` matches `runClient` and `runServer`
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is not a valid glob.
    pub fn match_pattern(&self, pattern: &str) -> Result<Vec<TaskName>> {
        if let Ok(name) = pattern.parse::<TaskName>() {
            return Ok(vec![name]);
        }

        let glob =
            Glob::new(pattern).with_context(|| format!("Invalid glob pattern: {pattern}"))?;

        Ok(self
            .task_names
            .iter()
            .copied()
            .filter(|name| glob.is_match(name.as_str()))
            .collect())
    }

    /// Resolves task patterns to concrete task names: aliases are
    /// expanded, globs matched, duplicates dropped, order kept.
    ///
    /// # Errors
    ///
    /// Returns an error if a pattern is not a valid glob or matches no task.
    pub fn resolve(&self, specs: &[String]) -> Result<Vec<TaskName>> {
        let expanded = self.resolve_aliases(specs);

        let mut result = Vec::new();
        let mut seen = BTreeSet::new();

        for pattern in &expanded {
            let matches = self.match_pattern(pattern)?;

            if matches.is_empty() {
                return Err(CubesError::from(TaskError::NotFound(pattern.clone())).into());
            }

            for name in matches {
                if seen.insert(name) {
                    result.push(name);
                }
            }
        }

        Ok(result)
    }
}
