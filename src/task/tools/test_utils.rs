// cubes-mod: Cubes Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shared helpers for tool and task tests: log capture for dry-run
//! assertions and a resolved project configuration.

use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

use crate::config::Config;

#[derive(Clone)]
struct BufferWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer
            .lock()
            .map_err(|_| std::io::Error::other("buffer poisoned"))?
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for BufferWriter {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Runs an async closure with a thread-local subscriber and returns the
/// captured INFO-and-above output. Use a `current_thread` runtime.
pub(crate) async fn run_with_logs<F, Fut>(f: F) -> Result<String>
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = Result<()>>,
{
    let buffer = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::fmt::Subscriber::builder()
        .with_writer(BufferWriter {
            buffer: Arc::clone(&buffer),
        })
        .with_max_level(Level::INFO)
        .with_ansi(false)
        .with_target(false)
        .with_level(false)
        .without_time()
        .finish();

    let _guard = tracing::subscriber::set_default(subscriber);
    f().await?;

    let guard = buffer
        .lock()
        .map_err(|_| anyhow::anyhow!("log buffer poisoned"))?;
    Ok(String::from_utf8_lossy(&guard).to_string())
}

/// The `[dry-run] ...` part of every dry-run line.
pub(crate) fn dry_run_lines(logs: &str) -> Vec<&str> {
    logs.lines()
        .filter_map(|line| line.find("[dry-run]").map(|idx| &line[idx..]))
        .collect()
}

/// A fully resolved configuration for a mod project rooted at `dir`.
pub(crate) fn project_config(dir: &Path) -> Result<Config> {
    let mut config = Config::default();
    config.cubes.cubes_version = "0.0.5".to_string();
    config.cubes.mod_name = "ExampleMod".to_string();
    config.cubes.mod_version = "1.0".to_string();
    config.cubes.mod_class = "example.ExampleMod".to_string();
    config.paths.project = Some(dir.to_path_buf());
    config.paths.resolve()?;
    Ok(config)
}

/// Places POM and jar of the given Cubes `modules` (`core`, `client`,
/// `server`) in the configured cache so resolving them needs no network.
pub(crate) fn seed_cubes_cache(config: &Config, modules: &[&str]) -> Result<()> {
    let cache = config.paths.cache()?;
    let version = &config.cubes.cubes_version;
    for module in modules {
        let dir = cache.join("ethanjones/cubes").join(module).join(version);
        std::fs::create_dir_all(&dir)?;
        std::fs::write(
            dir.join(format!("{module}-{version}.pom")),
            format!(
                "<project><groupId>ethanjones.cubes</groupId>\
                 <artifactId>{module}</artifactId><version>{version}</version></project>"
            ),
        )?;
        std::fs::write(dir.join(format!("{module}-{version}.jar")), module)?;
    }
    Ok(())
}

/// Writes an executable `/bin/sh` script standing in for an external tool.
#[cfg(unix)]
pub(crate) fn fake_tool(dir: &Path, name: &str, body: &str) -> Result<std::path::PathBuf> {
    use std::os::unix::fs::PermissionsExt;

    let script = dir.join(name);
    std::fs::write(&script, format!("#!/bin/sh\n{body}\n"))?;
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755))?;
    Ok(script)
}
