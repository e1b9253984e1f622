//! # Error Types
//!
//! Library modules return [`Result`] with the [`Error`] enum below. Only the
//! conditions that abort a run live here: missing mandatory inputs, malformed
//! `;`-separated tables, an empty playlist directory and bad configuration.
//! Everything else (unknown artists, tracks without an override, override
//! paths that vanished from disk) is logged and collected into reports instead.
//!
//! The binary wraps these in `anyhow` for display.

use std::path::PathBuf;

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal errors raised while loading tables, building playlists or writing them.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A mandatory input file (or an explicitly requested config file) is absent
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// A delimited table line did not split into exactly two fields
    #[error(
        "Malformed record in {} at line {line}: expected 2 `;`-separated fields, found {fields}",
        path.display()
    )]
    MalformedRecord {
        path: PathBuf,
        line: usize,
        fields: usize,
    },

    /// Padding width cannot be derived without any playlist ids
    #[error("Configuration error: the playlist directory is empty")]
    EmptyPlaylistDirectory,

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// Config file exists but is not valid TOML for [`crate::config::Config`]
    #[error("Failed to parse config file {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// File I/O error on a specific path
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// True for errors the user fixes by editing config or tables.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Error::EmptyPlaylistDirectory | Error::Config(_) | Error::ConfigParse { .. }
        )
    }
}
