// cubes-mod: Cubes Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Breadth-first transitive resolution.
//!
//! ```text
//! roots --> queue (BFS)
//!             |
//!             v
//!   seen(group:artifact)? --yes--> skip (nearest wins)
//!             |no
//!             v
//!   POM: cache hit | repo 1..n | 404 => no deps
//!             |
//!   packaging != pom --> jar: cache hit | repo 1..n | missing => error
//!             |
//!   <dependencies> in scope, not optional, not excluded
//!             |
//!             v
//!        push children
//! ```

use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{debug, info, warn};

use super::artifact::MavenArtifact;
use super::pom::{PomDependency, PomDocument, PomExclusion};
use super::scope::Scope;
use crate::config::Config;
use crate::error::{CubesError, MavenError, Result};
use crate::net::ProgressDisplay;
use crate::task::tools::downloader::DownloaderTool;
use crate::task::tools::{Tool, ToolContext};

struct Node {
    artifact: MavenArtifact,
    exclusions: Vec<PomExclusion>,
    depth: usize,
}

/// Resolves coordinates into local jar paths through a Maven-layout cache.
#[derive(Debug, Clone)]
pub struct MavenResolver {
    repositories: Vec<String>,
    cache: PathBuf,
}

impl MavenResolver {
    #[must_use]
    pub fn new(repositories: Vec<String>, cache: impl Into<PathBuf>) -> Self {
        Self {
            repositories,
            cache: cache.into(),
        }
    }

    /// Resolver for `[maven] repositories` and `paths.cache`.
    ///
    /// # Errors
    ///
    /// Returns an error if `paths.cache` is not resolved.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(
            config.maven.repositories.clone(),
            config.paths.cache()?,
        ))
    }

    #[must_use]
    pub fn cache(&self) -> &Path {
        &self.cache
    }

    /// Resolve `roots` and their transitive dependencies for `scope`.
    ///
    /// Returns jar paths in breadth-first order, one per `group:artifact`.
    /// In dry-run mode only the roots are reported, nothing is fetched.
    ///
    /// # Errors
    ///
    /// Returns an error if a coordinate is malformed, a jar is not hosted by
    /// any repository, or a download fails for a reason other than 404.
    pub async fn resolve(
        &self,
        ctx: &ToolContext,
        roots: &[String],
        scope: Scope,
    ) -> Result<Vec<PathBuf>> {
        let mut queue = VecDeque::new();
        for coord in roots {
            queue.push_back(Node {
                artifact: MavenArtifact::parse(coord)?,
                exclusions: Vec::new(),
                depth: 0,
            });
        }

        if ctx.is_dry_run() {
            let paths: Vec<_> = queue
                .iter()
                .map(|node| self.cache.join(node.artifact.local_path()))
                .collect();
            info!(scope = %scope, roots = ?roots, "[dry-run] Would resolve dependencies");
            return Ok(paths);
        }

        let mut seen = HashSet::new();
        let mut jars = Vec::new();

        while let Some(node) = queue.pop_front() {
            if ctx.is_cancelled() {
                anyhow::bail!("dependency resolution interrupted");
            }
            if !seen.insert(node.artifact.key()) {
                debug!(artifact = %node.artifact, depth = node.depth, "already resolved at a nearer depth");
                continue;
            }

            let pom = self.load_pom(ctx, &node.artifact).await?;

            let is_pom_only = pom.as_ref().is_some_and(PomDocument::is_pom_packaging)
                || node.artifact.extension == "pom";
            if !is_pom_only {
                let jar = self
                    .fetch(ctx, &node.artifact, ProgressDisplay::Bar)
                    .await?
                    .ok_or_else(|| MavenError::ArtifactNotFound {
                        artifact: node.artifact.to_string(),
                        searched: self.repositories.join(", "),
                    })
                    .map_err(CubesError::from)?;
                jars.push(jar);
            }

            let Some(pom) = pom else { continue };
            for dep in pom.dependencies_in(|s| scope.includes(s)) {
                if let Some(child) = Self::child(&pom, dep, &node) {
                    queue.push_back(child);
                }
            }
        }

        debug!(scope = %scope, count = jars.len(), "resolved classpath");
        Ok(jars)
    }

    fn child(pom: &PomDocument, dep: &PomDependency, parent: &Node) -> Option<Node> {
        let group_id = pom.interpolate(&dep.group_id);
        let artifact_id = pom.interpolate(&dep.artifact_id);

        if parent
            .exclusions
            .iter()
            .any(|e| e.matches(&group_id, &artifact_id))
        {
            debug!(dependency = %format!("{group_id}:{artifact_id}"), "excluded");
            return None;
        }

        let Some(version) = pom.resolve_version(dep) else {
            warn!(
                dependency = %format!("{group_id}:{artifact_id}"),
                parent = %parent.artifact,
                "cannot determine version, skipping"
            );
            return None;
        };

        let extension = match dep.dep_type.as_deref().map(str::trim) {
            None | Some("jar" | "bundle") => "jar".to_string(),
            Some(other) => other.to_string(),
        };

        let mut exclusions = parent.exclusions.clone();
        exclusions.extend_from_slice(dep.exclusions());

        Some(Node {
            artifact: MavenArtifact {
                group_id,
                artifact_id,
                version,
                classifier: dep.classifier.as_deref().map(|c| pom.interpolate(c)),
                extension,
            },
            exclusions,
            depth: parent.depth + 1,
        })
    }

    async fn load_pom(
        &self,
        ctx: &ToolContext,
        artifact: &MavenArtifact,
    ) -> Result<Option<PomDocument>> {
        let Some(path) = self
            .fetch(ctx, &artifact.pom(), ProgressDisplay::Silent)
            .await?
        else {
            debug!(artifact = %artifact, "no POM published, assuming no dependencies");
            return Ok(None);
        };

        let xml = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;

        match PomDocument::parse(&xml, &artifact.to_string()) {
            Ok(pom) => Ok(Some(pom)),
            Err(e) => {
                warn!(artifact = %artifact, error = %e, "ignoring unreadable POM");
                Ok(None)
            }
        }
    }

    /// Local cache path of `artifact`, downloading it on a miss.
    ///
    /// `Ok(None)` means every repository answered "not found".
    async fn fetch(
        &self,
        ctx: &ToolContext,
        artifact: &MavenArtifact,
        progress: ProgressDisplay,
    ) -> Result<Option<PathBuf>> {
        let local = self.cache.join(artifact.local_path());
        if local.exists() {
            return Ok(Some(local));
        }

        let urls = self
            .repositories
            .iter()
            .map(|repo| artifact.url(repo))
            .collect();
        let tool = DownloaderTool::new()
            .urls(urls)
            .file(&local)
            .progress(progress);

        match tool.run(ctx).await {
            Ok(()) => Ok(Some(local)),
            Err(e)
                if e.downcast_ref::<CubesError>()
                    .is_some_and(CubesError::is_not_found) =>
            {
                Ok(None)
            }
            Err(e) => Err(e).with_context(|| format!("Failed to fetch {artifact}")),
        }
    }
}
