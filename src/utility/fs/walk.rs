// cubes-mod: Cubes Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::Result;
use bon::Builder;
use flume::unbounded;
use ignore::WalkBuilder;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::warn;

/// Options for parallel directory traversal.
#[derive(Debug, Clone, Builder)]
pub struct WalkOptions {
    /// Maximum depth to traverse (None = unlimited)
    #[builder(setters(name = with_max_depth))]
    max_depth: Option<usize>,
    /// Follow symbolic links
    #[builder(setters(name = with_follow_links), default = false)]
    follow_links: bool,
    /// Include hidden files/directories
    #[builder(setters(name = with_include_hidden), default = false)]
    include_hidden: bool,
    /// Skip version-control metadata and editor/OS clutter
    #[builder(setters(name = with_default_excludes), default = false)]
    default_excludes: bool,
    /// Respect .gitignore and .ignore files
    #[builder(setters(name = with_respect_gitignore), default = false)]
    respect_gitignore: bool,
    /// Number of threads (None = auto-detect based on CPU count)
    #[builder(setters(name = with_threads))]
    threads: Option<usize>,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl WalkOptions {
    #[must_use]
    pub const fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    #[must_use]
    pub const fn follow_links(&self) -> bool {
        self.follow_links
    }

    #[must_use]
    pub const fn include_hidden(&self) -> bool {
        self.include_hidden
    }

    #[must_use]
    pub const fn default_excludes(&self) -> bool {
        self.default_excludes
    }

    #[must_use]
    pub const fn respect_gitignore(&self) -> bool {
        self.respect_gitignore
    }

    #[must_use]
    pub const fn threads(&self) -> Option<usize> {
        self.threads
    }
}

/// Result of a parallel walk operation.
#[derive(Debug)]
pub struct WalkResult {
    files: Vec<PathBuf>,
    error_count: usize,
}

impl WalkResult {
    #[must_use]
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    #[must_use]
    pub fn into_files(self) -> Vec<PathBuf> {
        self.files
    }

    #[must_use]
    pub const fn error_count(&self) -> usize {
        self.error_count
    }
}

/// Names never packaged when default excludes are on.
const EXCLUDED_NAMES: &[&str] = &[
    ".git",
    ".gitignore",
    ".gitattributes",
    ".gitmodules",
    ".svn",
    "_svn",
    ".hg",
    ".hgignore",
    ".hgsub",
    ".hgsubstate",
    ".hgtags",
    ".bzr",
    ".bzrignore",
    "CVS",
    ".cvsignore",
    "SCCS",
    "vssver.scc",
    ".DS_Store",
];

/// Whether a file or directory name is version-control metadata, an editor
/// backup or macOS resource data.
#[must_use]
pub fn is_default_excluded(name: &OsStr) -> bool {
    let Some(name) = name.to_str() else {
        return false;
    };
    EXCLUDED_NAMES.contains(&name)
        || name.starts_with("._")
        || name.starts_with(".#")
        || name.ends_with('~')
        || (name.len() > 1 && name.starts_with('#') && name.ends_with('#'))
        || (name.len() > 1 && name.starts_with('%') && name.ends_with('%'))
}

fn build_walker(root: &Path, options: &WalkOptions) -> WalkBuilder {
    let mut builder = WalkBuilder::new(root);

    if let Some(depth) = options.max_depth() {
        builder.max_depth(Some(depth));
    }

    builder.follow_links(options.follow_links());
    builder.hidden(!options.include_hidden());
    if options.default_excludes() {
        builder.filter_entry(|entry| entry.depth() == 0 || !is_default_excluded(entry.file_name()));
    }

    let ignore_files = options.respect_gitignore();
    builder.git_ignore(ignore_files);
    builder.git_global(ignore_files);
    builder.git_exclude(ignore_files);
    builder.ignore(ignore_files);
    builder.parents(ignore_files);

    if let Some(threads) = options.threads() {
        builder.threads(threads);
    }

    builder
}

/// Collects every file below `root` using `ignore::WalkParallel`.
///
/// Order is unspecified; callers that need a stable order sort the result.
///
/// # Errors
///
/// Returns an error if the root directory does not exist.
pub fn parallel_walk<P: AsRef<Path>>(root: P, options: &WalkOptions) -> Result<WalkResult> {
    let root = root.as_ref();

    if !root.exists() {
        anyhow::bail!("root directory does not exist: {}", root.display());
    }

    let (file_tx, file_rx) = unbounded::<PathBuf>();
    let error_count = Arc::new(AtomicUsize::new(0));

    build_walker(root, options).build_parallel().run(|| {
        let file_tx = file_tx.clone();
        let error_count = Arc::clone(&error_count);

        Box::new(move |entry_result| {
            match entry_result {
                Ok(entry) => {
                    if entry.file_type().is_some_and(|ft| ft.is_file()) {
                        let _ = file_tx.send(entry.into_path());
                    }
                }
                Err(e) => {
                    warn!(error = %e, "walk error");
                    error_count.fetch_add(1, Ordering::Relaxed);
                }
            }
            ignore::WalkState::Continue
        })
    });

    drop(file_tx);

    Ok(WalkResult {
        files: file_rx.iter().collect(),
        error_count: error_count.load(Ordering::Relaxed),
    })
}

/// Finds files whose path relative to `root` matches a glob pattern.
///
/// # Errors
///
/// Returns an error if:
/// - The root directory does not exist.
/// - The glob pattern is invalid.
///
/// # Example
/// ```no_run
/// use cubes_mod::utility::fs::walk::{find_files, WalkOptions};
///
/// let sources = find_files("src/main/java", "**/*.java", &WalkOptions::default())?;
/// println!("{} source files", sources.len());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn find_files<P: AsRef<Path>>(
    root: P,
    pattern: &str,
    options: &WalkOptions,
) -> Result<Vec<PathBuf>> {
    use wax::{Glob, Program};

    let root = root.as_ref();

    if !root.exists() {
        anyhow::bail!("root directory does not exist: {}", root.display());
    }

    let glob =
        Glob::new(pattern).map_err(|e| anyhow::anyhow!("invalid glob pattern '{pattern}': {e}"))?;

    let (tx, rx) = unbounded::<PathBuf>();
    let glob = Arc::new(glob);
    let root_path = root.to_path_buf();

    build_walker(root, options).build_parallel().run(|| {
        let tx = tx.clone();
        let glob = Arc::clone(&glob);
        let root_path = root_path.clone();

        Box::new(move |entry_result| {
            if let Ok(entry) = entry_result
                && entry.file_type().is_some_and(|ft| ft.is_file())
                && let Ok(rel_path) = entry.path().strip_prefix(&root_path)
                && glob.is_match(rel_path)
            {
                let _ = tx.send(entry.path().to_path_buf());
            }
            ignore::WalkState::Continue
        })
    });

    drop(tx);
    Ok(rx.iter().collect())
}
