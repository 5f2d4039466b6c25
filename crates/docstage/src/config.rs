//! Configuration defaults, file loading, and validation
//!
//! This module handles:
//! - Built-in defaults for the docs staging layout
//! - Discovery of `docstage.toml` (or an explicit path)
//! - Overlaying file values onto the defaults
//! - Validation and error reporting
//! - Splitting the result into per-operation configs

mod discovery;
mod error;
mod merge;
mod types;
mod validation;

#[cfg(test)]
mod integration_tests;

use std::path::{Path, PathBuf};

pub use discovery::{CONFIG_FILE_NAME, ConfigDiscovery};
pub use error::ConfigError;
pub use merge::ConfigMerger;
pub use types::{
    Config, ConfigFile, DEFAULT_EXCLUDE_DIRS, DEFAULT_EXCLUDE_FILES, DEFAULT_INDEX_FILE_NAME,
    IndexConfig, MARKDOWN_EXTENSION, MirrorConfig, Selection,
};
pub use validation::ConfigValidator;

use crate::error::Result;

/// Configuration manager that coordinates discovery, parsing, merging, and validation
pub struct ConfigManager;

impl ConfigManager {
    /// Create a new configuration manager
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Load configuration relative to the current directory
    ///
    /// # Errors
    ///
    /// Returns an error if the config file is invalid or cannot be read.
    pub fn load(cli_config_path: Option<&Path>) -> Result<Config> {
        Self::load_in(Path::new("."), cli_config_path)
    }

    /// Load configuration relative to `base_dir`
    ///
    /// Relative `source` and `docs` roots are resolved against `base_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file is invalid or cannot be read.
    pub fn load_in(base_dir: &Path, cli_config_path: Option<&Path>) -> Result<Config> {
        let mut config = Config::default();

        if let Some(path) = ConfigDiscovery::discover(base_dir, cli_config_path)? {
            log::debug!("Loading config file {}", path.display());
            let file = ConfigMerger::load_file(&path)?;
            ConfigMerger::apply(&mut config, file);
        }

        ConfigValidator::validate(&config)?;
        Ok(Self::resolve_roots(config, base_dir))
    }

    /// Built-in defaults resolved against `base_dir`, ignoring any config file
    #[must_use]
    pub fn defaults_in(base_dir: &Path) -> Config {
        Self::resolve_roots(Config::default(), base_dir)
    }

    fn resolve_roots(mut config: Config, base_dir: &Path) -> Config {
        config.source = Self::resolve(base_dir, config.source);
        config.docs = Self::resolve(base_dir, config.docs);
        config
    }

    fn resolve(base_dir: &Path, path: PathBuf) -> PathBuf {
        if path.is_absolute() || base_dir == Path::new(".") {
            path
        } else {
            base_dir.join(path)
        }
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
