// cubes-mod: Cubes Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Java `.properties` writer.
//!
//! ```text
//! PropertiesFile (BTreeMap, sorted keys)
//!   .property("modClass", ..)
//!   .render()  --> "modClass=..\nmodName=..\nmodVersion=..\n"
//!   .write(path)
//!
//! Escaping follows Properties.store(Writer):
//!   key:   leading/inner ' ' -> "\ "
//!   value: leading ' '       -> "\ "
//!   both:  \ = : # !  -> backslash-prefixed
//!          \t \n \r \f -> escape sequences
//!   non-ASCII is written verbatim (UTF-8)
//! ```
//!
//! No `#<date>` comment is emitted, so unchanged input renders to
//! byte-identical output.

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use tracing::debug;

use crate::error::Result;

/// Ordered set of string properties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertiesFile {
    entries: BTreeMap<String, String>,
}

impl PropertiesFile {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Sets a property, replacing any previous value.
    #[must_use]
    pub fn property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders `key=value` lines in key order.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (key, value) in &self.entries {
            escape_into(&mut out, key, true);
            out.push('=');
            escape_into(&mut out, value, false);
            out.push('\n');
        }
        out
    }

    /// Writes the rendered file, replacing any existing one.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub async fn write(&self, path: &Path) -> Result<()> {
        debug!(path = %path.display(), entries = self.len(), "writing properties");
        tokio::fs::write(path, self.render())
            .await
            .with_context(|| format!("Failed to write {}", path.display()))
    }
}

fn escape_into(out: &mut String, text: &str, is_key: bool) {
    for (i, c) in text.chars().enumerate() {
        match c {
            ' ' if i == 0 || is_key => out.push_str("\\ "),
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{c}' => out.push_str("\\f"),
            '=' | ':' | '#' | '!' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
}
