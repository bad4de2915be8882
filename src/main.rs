// cubes-mod: Cubes Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse()
//!     |
//!     +-- version / configs ------------------> print
//!     |
//!     v
//! cubes.toml -> --config -> CUBES_* env -> --set / flags
//!     |
//!     v
//! Config --> init_logging([global]) --> options | build | list
//! ```

use std::process::ExitCode;

use anyhow::Context;
use cubes_mod::cli::global::GlobalOptions;
use cubes_mod::cli::{self, Cli, Command};
use cubes_mod::cmd::build::run_build_command;
use cubes_mod::cmd::config::{run_configs_command, run_options_command};
use cubes_mod::cmd::list::run_list_command;
use cubes_mod::config::Config;
use cubes_mod::config::loader::ConfigLoader;
use cubes_mod::error::Result;
use cubes_mod::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Prefix of `CUBES_<SECTION>__<KEY>` environment overrides.
const ENV_PREFIX: &str = "CUBES";

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    match dispatch_command(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn dispatch_command(cli: &Cli) -> Result<()> {
    let command = match &cli.command {
        Some(Command::Version) => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Some(Command::Configs) => {
            let loader = build_config_loader(&cli.global)?;
            run_configs_command(&loader.format_loaded_files());
            return Ok(());
        }
        Some(command) => command,
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            anyhow::bail!("No command specified");
        }
    };

    let config = load_config(&cli.global)?;
    let _log_guard =
        init_logging(&LogConfig::from(&config.global)).context("Failed to initialize logging")?;

    match command {
        Command::Options => run_options_command(&config),
        Command::Build(args) => run_build_command(args, &config, config.global.dry).await?,
        Command::List(args) => run_list_command(args, &config),
        Command::Version | Command::Configs => {}
    }
    Ok(())
}

/// Project `cubes.toml`, then `--config` files, then environment, then
/// `--set` and flag overrides.
fn build_config_loader(global: &GlobalOptions) -> Result<ConfigLoader> {
    let mut loader = ConfigLoader::new().add_toml_file_optional(global.project_config());
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader = loader.with_env_prefix(ENV_PREFIX);
    for option in global.to_config_overrides() {
        loader = loader.set_option(&option)?;
    }
    Ok(loader)
}

fn load_config(global: &GlobalOptions) -> Result<Config> {
    build_config_loader(global)?
        .build()
        .context("Failed to load configuration")
}
