//! Configuration error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config file {path}")]
    Read {
        /// Offending file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("Failed to parse config file {path}")]
    Parse {
        /// Offending file
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },

    /// Explicitly requested config file does not exist
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    /// Both selection modes were configured
    #[error("Conflicting configuration: `include` cannot be combined with `exclude_dirs`/`exclude_files`")]
    ConflictingSelection,

    /// A name list contains an empty entry
    #[error("{field} contains an empty name")]
    EmptyName {
        /// Field holding the name
        field: &'static str,
    },

    /// Names are matched by basename and may not contain separators or be `.`/`..`
    #[error("{field} entry '{name}' must be a plain name, not a path")]
    NotABasename {
        /// Field holding the name
        field: &'static str,
        /// Offending name
        name: String,
    },

    /// Two renames map onto the same docs directory
    #[error("Renames '{first}' and '{second}' both map to '{target}'")]
    RenameCollision {
        /// First source name
        first: String,
        /// Second source name
        second: String,
        /// Shared destination name
        target: String,
    },
}
