// cubes-mod: Cubes Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Config, ConfigLoader, CubesExtension, PathsConfig, ToolsConfig};
use crate::config::types::{DexBackend, MAVEN_CENTRAL};
use crate::logging::LogLevel;
use std::path::{Path, PathBuf};

#[test]
fn test_cubes_extension_defaults() {
    let cubes = CubesExtension::default();
    assert_eq!(cubes.cubes_version, "");
    assert_eq!(cubes.mod_version, "");
    assert_eq!(cubes.mod_class, "");
    assert_eq!(cubes.mod_name, "");
    assert_eq!(cubes.assets_folder, PathBuf::from("assets/"));
    assert_eq!(cubes.json_folder, PathBuf::from("json/"));
    assert_eq!(cubes.run_client_heap_size, "2G");
    assert_eq!(cubes.run_server_heap_size, "2G");
    assert!(cubes.run_client_arguments.is_empty());
    assert!(cubes.run_server_arguments.is_empty());
    assert!(!cubes.build_android);
    assert!(cubes.build_desktop);
}

#[test]
fn test_default_config() {
    let config = Config::default();
    assert!(!config.global.dry);
    assert_eq!(config.global.output_log_level, LogLevel::INFO);
    assert!(config.global.log_file.is_none());
    assert_eq!(config.maven.repositories, vec![MAVEN_CENTRAL.to_string()]);
    assert!(config.aliases.is_empty());
}

#[test]
fn test_tools_default() {
    let tools = ToolsConfig::default();
    assert_eq!(tools.java, PathBuf::from("java"));
    assert_eq!(tools.javac, PathBuf::from("javac"));
    assert_eq!(tools.dex, PathBuf::from("d8"));
    assert_eq!(tools.dex_backend, DexBackend::D8);
    assert_eq!(tools.java_release, 17);
    assert!(tools.android_jar.is_none());
}

#[test]
fn test_dex_backend_parse() {
    assert_eq!("d8".parse::<DexBackend>().ok(), Some(DexBackend::D8));
    assert_eq!("DX".parse::<DexBackend>().ok(), Some(DexBackend::Dx));

    let err = "r8".parse::<DexBackend>().unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"invalid value for 'dex_backend' in section '[tools]': expected 'd8' or 'dx', got 'r8'");
}

#[test]
fn test_config_parse() {
    let toml = r#"
[global]
dry = true
output_log_level = 4

[cubes]
cubes_version = "0.0.5"
mod_name = "ExampleMod"
mod_version = "1.0"
mod_class = "example.ExampleMod"
build_android = true
run_client_arguments = ["--debug", "--fast"]

[tools]
dex_backend = "dx"

[paths]
project = "/work/example"
"#;

    let config = Config::parse(toml).unwrap();
    assert!(config.global.dry);
    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(config.cubes.cubes_version, "0.0.5");
    assert_eq!(config.cubes.mod_name, "ExampleMod");
    assert_eq!(config.cubes.mod_version, "1.0");
    assert_eq!(config.cubes.mod_class, "example.ExampleMod");
    assert!(config.cubes.build_android);
    assert!(config.cubes.build_desktop);
    assert_eq!(config.cubes.run_client_arguments, ["--debug", "--fast"]);
    assert_eq!(config.tools.dex_backend, DexBackend::Dx);
}

#[test]
fn test_config_accepts_camel_case_names() {
    let toml = r#"
[cubes]
cubesVersion = "0.0.5"
modName = "ExampleMod"
modVersion = "2.1"
modClass = "example.ExampleMod"
buildAndroid = true
buildDesktop = false
runServerHeapSize = "512M"
"#;

    let config = Config::parse(toml).unwrap();
    assert_eq!(config.cubes.cubes_version, "0.0.5");
    assert_eq!(config.cubes.mod_name, "ExampleMod");
    assert_eq!(config.cubes.mod_version, "2.1");
    assert_eq!(config.cubes.mod_class, "example.ExampleMod");
    assert!(config.cubes.build_android);
    assert!(!config.cubes.build_desktop);
    assert_eq!(config.cubes.run_server_heap_size, "512M");
}

#[test]
fn test_paths_resolve() {
    let project = std::env::temp_dir().join("cubes-paths");
    let mut paths = PathsConfig {
        project: Some(project.clone()),
        cache: Some(PathBuf::from("libs-cache")),
        ..Default::default()
    };

    paths.resolve().unwrap();

    assert_eq!(paths.project().unwrap(), project.as_path());
    assert_eq!(paths.build().unwrap(), project.join("build"));
    assert_eq!(paths.sources().unwrap(), project.join("src/main/java"));
    assert_eq!(paths.resources().unwrap(), project.join("src/main/resources"));
    assert_eq!(paths.cache().unwrap(), project.join("libs-cache"));
    assert_eq!(paths.libs_dir().unwrap(), project.join("build").join("libs"));
    assert_eq!(
        paths.run_dir("client").unwrap(),
        project.join("build").join("run").join("client")
    );
}

#[test]
fn test_paths_keep_absolute_overrides() {
    let project = std::env::temp_dir().join("cubes-project");
    let out = std::env::temp_dir().join("cubes-out");
    let mut paths = PathsConfig {
        project: Some(project),
        build: Some(out.clone()),
        ..Default::default()
    };

    paths.resolve().unwrap();
    assert_eq!(paths.build().unwrap(), out.as_path());
}

#[test]
fn test_paths_project_defaults_to_cwd() {
    let mut paths = PathsConfig::default();
    paths.resolve().unwrap();

    let project = paths.project().unwrap();
    assert!(project.is_absolute());
    assert_eq!(
        paths.build().unwrap(),
        project.join("build"),
        "build defaults below the project"
    );
}

#[test]
fn test_unresolved_paths_report_missing_key() {
    let paths = PathsConfig::default();
    let err = paths.build().unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"missing required config key 'build' in section '[paths]'");
}

#[test]
fn test_check_reports_blank_fields() {
    let warnings = CubesExtension::default().check();
    assert_eq!(
        warnings,
        [
            "cubes.cubes_version is not set",
            "cubes.mod_version is not set",
            "cubes.mod_class is not set",
            "cubes.mod_name is not set",
        ]
    );
}

#[test]
fn test_check_heap_sizes_and_platforms() {
    let cubes = CubesExtension {
        cubes_version: "0.0.5".into(),
        mod_version: "1.0".into(),
        mod_class: "a.B".into(),
        mod_name: "B".into(),
        run_client_heap_size: "2 gigs".into(),
        run_server_heap_size: "1024m".into(),
        build_desktop: false,
        ..Default::default()
    };

    let warnings = cubes.check();
    assert_eq!(
        warnings,
        [
            "cubes.run_client_heap_size '2 gigs' is not a valid -Xmx size",
            "neither build_android nor build_desktop is enabled",
        ]
    );
}

#[test]
fn test_heap_size_forms() {
    let warns = |size: &str| {
        CubesExtension {
            run_client_heap_size: size.into(),
            ..Default::default()
        }
        .check()
        .iter()
        .any(|w| w.contains("-Xmx"))
    };

    for size in ["2G", "512m", "1048576", "4t", "64K"] {
        assert!(!warns(size), "{size}");
    }
    for size in ["", "2GB", "-1G", "1.5G", "G"] {
        assert!(warns(size), "{size}");
    }
}

#[test]
fn test_archive_name() {
    let cubes = CubesExtension {
        mod_name: "ExampleMod".into(),
        ..Default::default()
    };
    assert_eq!(cubes.archive_name(), "ExampleMod.cm");
    assert_eq!(CubesExtension::default().archive_name(), ".cm");
}

#[test]
fn test_config_loader_set_overrides() {
    let config = ConfigLoader::new()
        .add_toml_str("[cubes]\nmod_name = \"FromFile\"")
        .set("cubes.mod_name", "FromCli")
        .unwrap()
        .set("global.dry", true)
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.cubes.mod_name, "FromCli");
    assert!(config.global.dry);
}

#[test]
fn test_config_loader_set_option_strings() {
    let config = ConfigLoader::new()
        .set_option("cubes.mod_version=1.10")
        .unwrap()
        .set_option("global.dry=true")
        .unwrap()
        .set_option("global.output_log_level=4")
        .unwrap()
        .set_option("tools.dex_backend=dx")
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.cubes.mod_version, "1.10");
    assert!(config.global.dry);
    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(config.tools.dex_backend, DexBackend::Dx);
}

#[test]
fn test_config_loader_set_option_rejects_malformed() {
    let err = ConfigLoader::new().set_option("cubes.mod_name").err().unwrap();
    insta::assert_snapshot!(err.to_string(), @"invalid option 'cubes.mod_name', expected section.key=value");
    assert!(ConfigLoader::new().set_option("=value").is_err());
}

#[test]
fn test_config_loader_format_loaded_files() {
    let loader = ConfigLoader::new()
        .add_toml_str("[global]\n dry = true")
        .add_toml_file_optional("/nonexistent/cubes.toml")
        .add_toml_str("[cubes]\n mod_name = \"Test\"");

    assert_eq!(
        loader.format_loaded_files(),
        ["1. [string] <string>", "2. [string] <string>"]
    );
}

#[test]
fn test_config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cubes.toml");
    std::fs::write(&path, "[cubes]\nmod_name = \"OnDisk\"\n").unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.cubes.mod_name, "OnDisk");
}

#[test]
fn test_missing_required_file_fails() {
    let result = Config::from_file(Path::new("/nonexistent/cubes.toml"));
    assert!(result.is_err());
}

#[test]
fn test_format_options_deterministic() {
    let config = Config::parse(
        r#"
[cubes]
mod_name = "ExampleMod"
run_client_arguments = ["--debug"]

[paths]
project = "/work/example"
"#,
    )
    .unwrap();

    let result1 = config.format_options();
    let result2 = config.format_options();
    assert_eq!(result1, result2);

    let keys: Vec<_> = result1
        .iter()
        .map(|line| line.split_whitespace().next().unwrap_or_default().to_string())
        .collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted, "keys should be sorted");

    let joined = result1.join("\n");
    assert!(joined.contains("cubes.mod_name"));
    assert!(joined.contains("ExampleMod"));
    assert!(joined.contains("[--debug]"));
    assert!(joined.contains("maven.repositories[0]"));
}

#[test]
fn test_deny_unknown_fields_top_level() {
    let toml = r#"
[global]
dry = true

[unknown_section]
foo = "bar"
"#;
    assert!(Config::parse(toml).is_err());
}

#[test]
fn test_deny_unknown_fields_cubes() {
    let toml = r#"
[cubes]
mod_nmae = "Typo"
"#;
    assert!(Config::parse(toml).is_err());
}
