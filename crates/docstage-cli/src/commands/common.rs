//! Common types and utilities for command execution

use std::path::{Path, PathBuf};

use anyhow::Context;
use docstage::config::{Config, ConfigManager};

/// Execution options shared by all commands
pub struct CommandOptions<'a> {
    /// Enable verbose output
    pub verbose: bool,
    /// Preview changes without applying (dry-run)
    pub dry_run: bool,
    /// Path to custom config file
    pub config_path: Option<&'a Path>,
    /// Skip loading config files
    pub no_config: bool,
    /// Source root override
    pub source: Option<&'a Path>,
    /// Docs root override
    pub docs: Option<&'a Path>,
}

impl CommandOptions<'_> {
    /// Load the configuration and apply command-line overrides
    pub fn load_config(&self) -> anyhow::Result<Config> {
        let base_dir = Path::new(".");
        let mut config = if self.no_config {
            ConfigManager::defaults_in(base_dir)
        } else {
            ConfigManager::load_in(base_dir, self.config_path)
                .context("Failed to load configuration")?
        };

        if let Some(source) = self.source {
            config.source = PathBuf::from(source);
        }
        if let Some(docs) = self.docs {
            config.docs = PathBuf::from(docs);
        }
        if self.dry_run {
            config.dry_run = true;
        }

        log::debug!("Effective configuration: {config:?}");

        if self.verbose {
            println!("Source path: {}", config.source.display());
            println!("Docs path: {}", config.docs.display());
        }

        Ok(config)
    }
}
