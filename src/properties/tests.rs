// cubes-mod: Cubes Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::PropertiesFile;

#[test]
fn test_render_sorted_keys() {
    let props = PropertiesFile::new()
        .property("modVersion", "1.0")
        .property("modName", "ExampleMod")
        .property("modClass", "example.ExampleMod");

    assert_eq!(
        props.render(),
        "modClass=example.ExampleMod\nmodName=ExampleMod\nmodVersion=1.0\n"
    );
}

#[test]
fn test_render_empty_values() {
    let props = PropertiesFile::new()
        .property("modClass", "")
        .property("modName", "");
    assert_eq!(props.render(), "modClass=\nmodName=\n");
}

#[test]
fn test_escape_separators_and_whitespace() {
    let props = PropertiesFile::new()
        .property("a key", " lead and inner space")
        .property("url", "http://x=y#z!")
        .property("path", "C:\\mods\ttab\nline");

    assert_eq!(
        props.render(),
        "a\\ key=\\ lead and inner space\n\
         path=C\\:\\\\mods\\ttab\\nline\n\
         url=http\\://x\\=y\\#z\\!\n"
    );
}

#[test]
fn test_unicode_is_written_verbatim() {
    let props = PropertiesFile::new().property("modName", "Kübe ⛏");
    assert_eq!(props.render(), "modName=Kübe ⛏\n");
}

#[test]
fn test_property_replaces_value() {
    let props = PropertiesFile::new()
        .property("modName", "Old")
        .property("modName", "New");
    assert_eq!(props.len(), 1);
    assert_eq!(props.get("modName"), Some("New"));
    assert!(!props.is_empty());
}

#[tokio::test]
async fn test_write_is_byte_identical_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mod.properties");
    let props = PropertiesFile::new()
        .property("modClass", "example.ExampleMod")
        .property("modName", "ExampleMod")
        .property("modVersion", "1.0");

    props.write(&path).await.unwrap();
    let first = std::fs::read(&path).unwrap();
    props.write(&path).await.unwrap();
    let second = std::fs::read(&path).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        first,
        b"modClass=example.ExampleMod\nmodName=ExampleMod\nmodVersion=1.0\n"
    );
}
