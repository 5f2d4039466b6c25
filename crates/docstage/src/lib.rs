//! # docstage
//!
//! Core library for staging a source tree into a static-site `docs/`
//! directory.
//!
//! Two independent operations are provided:
//! - [`mirror`]: copies selected top-level directories and Markdown files of a
//!   source root into the docs root, skipping unchanged Markdown files.
//! - [`index`]: writes a `file_list.md` into each docs subdirectory listing the
//!   git-tracked non-Markdown files it contains.

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::path::Path;

/// Core error types for the docstage library
pub mod error {
    /// Result type alias using `anyhow::Error`
    pub type Result<T> = anyhow::Result<T>;
}

/// Modification-time staleness checks
pub mod comparison;

/// Configuration defaults, file loading and validation
pub mod config;

/// Per-subdirectory file index generation
pub mod index;

/// Source tree mirroring into the docs root
pub mod mirror;

/// Top-level entry selection
pub mod scanner;

use config::{ConfigManager, IndexConfig};
use index::{GitLsFiles, IndexGenerator, IndexReport};
use mirror::{Mirror, MirrorReport};

/// Mirror the current directory into `docs/` using the default configuration
/// (or `docstage.toml` when present).
///
/// This is the entry point a documentation build hook calls before rendering.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or a filesystem
/// operation fails.
pub fn prepare_docs() -> error::Result<MirrorReport> {
    let config = ConfigManager::load(None)?;
    Mirror::new(config.mirror_config()).run()
}

/// Generate `file_list.md` for every subdirectory of `docs/`, asking git in
/// the current directory for tracked files.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the docs root cannot
/// be read.
pub fn generate_file_lists() -> error::Result<IndexReport> {
    let config = ConfigManager::load(None)?;
    let index_config: IndexConfig = config.index_config();
    IndexGenerator::new(index_config, GitLsFiles::new(Path::new("."))).run()
}
