// cubes-mod: Cubes Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! List command implementation.

use crate::cli::build::ListArgs;
use crate::config::Config;
use crate::task::graph::TaskGraphBuilder;
use crate::task::registry::TaskRegistry;

/// Lines printed by `list`.
#[must_use]
pub fn list_lines(args: &ListArgs, config: &Config) -> Vec<String> {
    let registry = TaskRegistry::new(config.aliases.clone());

    if args.aliases {
        if registry.aliases().is_empty() {
            return vec!["No aliases defined".to_string()];
        }
        return registry
            .aliases()
            .iter()
            .map(|(name, targets)| format!("{} = {}", name, targets.join(", ")))
            .collect();
    }

    let tasks = registry.all_tasks();
    let width = tasks
        .iter()
        .map(|name| name.as_str().len())
        .max()
        .unwrap_or(0);

    if args.deps {
        let graph = TaskGraphBuilder::register().finalize(&config.cubes);
        return tasks
            .iter()
            .map(|&name| {
                let deps: Vec<_> = graph
                    .dependencies(name)
                    .iter()
                    .map(|dep| dep.as_str())
                    .collect();
                format!("{:<width$} -> {}", name.as_str(), deps.join(", "))
                    .trim_end()
                    .to_string()
            })
            .collect();
    }

    tasks
        .iter()
        .map(|name| format!("{:<width$}  {}", name.as_str(), name.description()))
        .collect()
}

/// Main handler for list command.
pub fn run_list_command(args: &ListArgs, config: &Config) {
    for line in list_lines(args, config) {
        println!("{line}");
    }
}
