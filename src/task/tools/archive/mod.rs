// cubes-mod: Cubes Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Zip archive assembly for `mod.jar` and `<modName>.cm`.
//!
//! ```text
//! ArchiveTool
//!   file(name, path)      root entry, missing => ArchiveError::MissingInput
//!   dir(prefix, path)     prefix/<relative path>, missing dir => nothing
//!   generated(name, data) in-memory entry (manifest)
//!        |
//!        v
//!   collect + sort by entry name, META-INF/ first (duplicates rejected)
//!        |
//!        v
//!   spawn_blocking: ZipWriter --> NamedTempFile --> persist(output)
//! ```
//!
//! Entries carry a fixed timestamp so identical inputs yield identical
//! archives.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use tempfile::NamedTempFile;
use tracing::{debug, info};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use super::{BoxFuture, Tool, ToolContext};
use crate::error::{ArchiveError, CubesError, Result};
use crate::utility::fs::walk::{WalkOptions, parallel_walk};

const MANIFEST_ENTRY: &str = "META-INF/MANIFEST.MF";

#[derive(Debug, Clone)]
enum Source {
    File(PathBuf),
    Dir(PathBuf),
    Generated(Vec<u8>),
}

#[derive(Debug, Clone)]
enum EntryData {
    File(PathBuf),
    Bytes(Vec<u8>),
}

/// Builds a zip archive from files, directory trees and generated content.
#[derive(Debug, Clone, Default)]
pub struct ArchiveTool {
    output: Option<PathBuf>,
    sources: Vec<(String, Source)>,
}

impl ArchiveTool {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            output: None,
            sources: Vec::new(),
        }
    }

    #[must_use]
    pub fn output(mut self, path: impl AsRef<Path>) -> Self {
        self.output = Some(path.as_ref().to_path_buf());
        self
    }

    /// Adds a required file as entry `name`.
    #[must_use]
    pub fn file(mut self, name: impl Into<String>, path: impl AsRef<Path>) -> Self {
        self.sources
            .push((name.into(), Source::File(path.as_ref().to_path_buf())));
        self
    }

    /// Adds every file below `path` under `prefix` (empty for the root).
    ///
    /// A missing directory contributes nothing.
    #[must_use]
    pub fn dir(mut self, prefix: impl Into<String>, path: impl AsRef<Path>) -> Self {
        self.sources
            .push((prefix.into(), Source::Dir(path.as_ref().to_path_buf())));
        self
    }

    #[must_use]
    pub fn generated(mut self, name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        self.sources
            .push((name.into(), Source::Generated(data.into())));
        self
    }

    fn output_required(&self) -> Result<&Path> {
        self.output
            .as_deref()
            .context("ArchiveTool: output path is required")
    }

    /// Resolves all sources into the entry list in archive order: the
    /// manifest, other `META-INF/` entries, then everything else by name.
    ///
    /// # Errors
    ///
    /// Returns `ArchiveError::MissingInput` for a missing required file and
    /// `ArchiveError::DuplicateEntry` when two sources map to the same name.
    pub fn entries(&self) -> Result<Vec<String>> {
        Ok(self.collect()?.into_iter().map(|(name, _)| name).collect())
    }

    fn collect(&self) -> Result<Vec<(String, EntryData)>> {
        let mut entries = BTreeMap::new();
        let mut insert = |name: String, data: EntryData| -> Result<()> {
            if entries.contains_key(&name) {
                return Err(CubesError::from(ArchiveError::DuplicateEntry(name)).into());
            }
            entries.insert(name, data);
            Ok(())
        };

        for (name, source) in &self.sources {
            match source {
                Source::File(path) => {
                    if !path.is_file() {
                        return Err(CubesError::from(ArchiveError::MissingInput(
                            path.display().to_string(),
                        ))
                        .into());
                    }
                    insert(name.clone(), EntryData::File(path.clone()))?;
                }
                Source::Generated(data) => {
                    insert(name.clone(), EntryData::Bytes(data.clone()))?;
                }
                Source::Dir(root) => {
                    if !root.is_dir() {
                        debug!(path = %root.display(), "directory not found, nothing to add");
                        continue;
                    }
                    let walk = parallel_walk(root, &archive_walk_options())?;
                    if walk.error_count() > 0 {
                        anyhow::bail!(
                            "{} entries below {} could not be read",
                            walk.error_count(),
                            root.display()
                        );
                    }
                    for file in walk.into_files() {
                        let relative = file
                            .strip_prefix(root)
                            .with_context(|| format!("{} escaped {}", file.display(), root.display()))?;
                        insert(entry_name(name, relative), EntryData::File(file))?;
                    }
                }
            }
        }

        let mut entries: Vec<_> = entries.into_iter().collect();
        entries.sort_by_key(|(name, _)| entry_rank(name));
        Ok(entries)
    }

    async fn pack(&self, ctx: &ToolContext) -> Result<()> {
        let output = self.output_required()?.to_path_buf();

        if ctx.is_dry_run() {
            info!(
                archive = %output.display(),
                sources = self.sources.len(),
                "[dry-run] Would create archive"
            );
            return Ok(());
        }

        if ctx.is_cancelled() {
            anyhow::bail!("archive creation cancelled");
        }

        let entries = self.collect()?;
        let count = entries.len();
        debug!(archive = %output.display(), entries = count, "writing archive");

        let target = output.clone();
        tokio::task::spawn_blocking(move || write_zip(&target, &entries))
            .await
            .context("archive writer panicked")??;

        info!(archive = %output.display(), entries = count, "Archive created");
        Ok(())
    }
}

impl Tool for ArchiveTool {
    fn name(&self) -> &'static str {
        "archive"
    }

    fn run<'a>(&'a self, ctx: &'a ToolContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(self.pack(ctx))
    }
}

/// Dotfiles are packaged; VCS metadata and OS clutter are not.
fn archive_walk_options() -> WalkOptions {
    WalkOptions::builder()
        .with_include_hidden(true)
        .with_default_excludes(true)
        .build()
}

/// `JarInputStream` only sees a manifest stored ahead of other entries.
fn entry_rank(name: &str) -> u8 {
    if name == MANIFEST_ENTRY {
        0
    } else if name.starts_with("META-INF/") {
        1
    } else {
        2
    }
}

/// `prefix` joined with a relative path using `/` separators.
fn entry_name(prefix: &str, relative: &Path) -> String {
    let relative = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        relative
    } else {
        format!("{prefix}/{relative}")
    }
}

fn write_zip(output: &Path, entries: &[(String, EntryData)]) -> Result<()> {
    let parent = output
        .parent()
        .context("archive output has no parent directory")?;
    std::fs::create_dir_all(parent)
        .with_context(|| format!("failed to create {}", parent.display()))?;

    let temp = NamedTempFile::new_in(parent)
        .with_context(|| format!("Failed to create temp file in {}", parent.display()))?;
    let file = temp
        .reopen()
        .with_context(|| format!("Failed to reopen temp file {}", temp.path().display()))?;

    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default())
        .unix_permissions(0o644);

    let mut zip = ZipWriter::new(file);
    for (name, data) in entries {
        zip.start_file(name.as_str(), options)
            .map_err(|e| CubesError::from(ArchiveError::Zip(e)))?;
        match data {
            EntryData::File(path) => {
                let mut input = File::open(path)
                    .with_context(|| format!("failed to open {}", path.display()))?;
                io::copy(&mut input, &mut zip)
                    .with_context(|| format!("failed to add {}", path.display()))?;
            }
            EntryData::Bytes(bytes) => {
                zip.write_all(bytes)
                    .with_context(|| format!("failed to write entry {name}"))?;
            }
        }
    }
    zip.finish()
        .map_err(|e| CubesError::from(ArchiveError::Zip(e)))?;

    temp.persist(output)
        .with_context(|| format!("failed to move archive to {}", output.display()))?;
    Ok(())
}
