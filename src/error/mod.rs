// cubes-mod: Cubes Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!              CubesError (~24 bytes)
//!                     |
//!   +-------+-------+-+-----+-------+-------+
//!   |   |   |   |   |   |   |   |   |   |
//!   v   v   v   v   v   v   v   v   v   v
//!  Net Cfg Task Proc Fs Maven Arch Io Other
//!  Box Box Box  Box Box  Box  Box Box Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Network  Reqwest, HttpError, Interrupted
//!   Config   ParseError, MissingKey, InvalidValue
//!   Task     NotFound, Cycle, Interrupted
//!   Process  ExecutableNotFound, NonZeroExit
//!   Fs       NotFound, IoError
//!   Maven    InvalidCoordinate, ArtifactNotFound, PomParse
//!   Archive  Zip, MissingInput, DuplicateEntry
//!
//! All variants boxed => CubesError fits in 24 bytes.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`CubesError`].
pub type CubesResult<T> = std::result::Result<T, CubesError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum CubesError {
    /// Network operation failed.
    #[error("network error: {0}")]
    Network(#[from] Box<NetworkError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Task execution error.
    #[error("task error: {0}")]
    Task(#[from] Box<TaskError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// Maven resolution error.
    #[error("maven error: {0}")]
    Maven(#[from] Box<MavenError>),

    /// Archive assembly error.
    #[error("archive error: {0}")]
    Archive(#[from] Box<ArchiveError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

impl CubesError {
    /// Returns true if this error is an HTTP "not found" response.
    ///
    /// Repositories answer 404 (or 410) for artifacts they do not host.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Network(err) if matches!(**err, NetworkError::HttpError { status: 404 | 410, .. })
        )
    }
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for CubesError {
                fn from(err: $error) -> Self {
                    CubesError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    NetworkError => Network,
    ConfigError => Config,
    TaskError => Task,
    ProcessError => Process,
    FsError => Fs,
    MavenError => Maven,
    ArchiveError => Archive,
    std::io::Error => Io,
}

// --- Network Errors ---

/// Network operation errors.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Download failed.
    #[error("download failed: {url} - {message}")]
    DownloadFailed { url: String, message: String },

    /// Download was interrupted by user or signal.
    #[error("download interrupted")]
    Interrupted,

    /// HTTP error response.
    #[error("http error {status}: {url}")]
    HttpError { status: u16, url: String },

    /// Error from reqwest library.
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Invalid URL.
    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Task Errors ---

/// Task execution errors.
#[derive(Debug, Error)]
pub enum TaskError {
    /// Task was not found.
    #[error("task '{0}' not found")]
    NotFound(String),

    /// The task graph contains a dependency cycle.
    #[error("task dependency cycle: {}", path.join(" -> "))]
    Cycle { path: Vec<String> },

    /// Task was interrupted.
    #[error("task '{0}' was interrupted")]
    Interrupted(String),
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Process exited with non-zero status.
    #[error("{command} exited with code {code}")]
    NonZeroExit { command: String, code: i32 },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path not found.
    #[error("path not found: {0}")]
    NotFound(String),

    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// --- Maven Errors ---

/// Maven coordinate and repository errors.
#[derive(Debug, Error)]
pub enum MavenError {
    /// Coordinate is not `group:artifact:version[:classifier][@ext]`.
    #[error("malformed dependency coordinate '{0}'")]
    InvalidCoordinate(String),

    /// No configured repository hosts the artifact.
    #[error("could not find {artifact} in any repository ({searched})")]
    ArtifactNotFound { artifact: String, searched: String },

    /// POM document could not be parsed.
    #[error("failed to parse POM for {artifact}: {message}")]
    PomParse { artifact: String, message: String },
}

// --- Archive Errors ---

/// Archive assembly errors.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// Error from the zip library.
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// A required input file is missing.
    #[error("archive input not found: {0}")]
    MissingInput(String),

    /// Two inputs map to the same entry name.
    #[error("duplicate archive entry '{0}'")]
    DuplicateEntry(String),
}
