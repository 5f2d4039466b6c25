//! Configuration file discovery

use std::path::{Path, PathBuf};

use super::error::ConfigError;

/// File name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "docstage.toml";

/// Config file discovery
pub struct ConfigDiscovery;

impl ConfigDiscovery {
    /// Create a new config discovery instance
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Locate the config file to load, if any
    ///
    /// An explicit path must exist. Otherwise `docstage.toml` in `base_dir`
    /// is used when present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] if the explicit path does not exist.
    pub fn discover(base_dir: &Path, cli_path: Option<&Path>) -> Result<Option<PathBuf>, ConfigError> {
        if let Some(path) = cli_path {
            return if path.is_file() {
                Ok(Some(path.to_path_buf()))
            } else {
                Err(ConfigError::NotFound(path.to_path_buf()))
            };
        }

        let candidate = base_dir.join(CONFIG_FILE_NAME);
        Ok(candidate.is_file().then_some(candidate))
    }
}

impl Default for ConfigDiscovery {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_discover_no_configs() {
        let tmp = TempDir::new().unwrap();
        let found = ConfigDiscovery::discover(tmp.path(), None).unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn test_discover_project_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE_NAME), "# config").unwrap();

        let found = ConfigDiscovery::discover(tmp.path(), None).unwrap();
        assert_eq!(found, Some(tmp.path().join(CONFIG_FILE_NAME)));
    }

    #[test]
    fn test_discover_cli_config_wins() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE_NAME), "# project").unwrap();
        let cli_config = tmp.path().join("custom.toml");
        fs::write(&cli_config, "# custom").unwrap();

        let found = ConfigDiscovery::discover(tmp.path(), Some(&cli_config)).unwrap();
        assert_eq!(found, Some(cli_config));
    }

    #[test]
    fn test_discover_cli_config_nonexistent() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nonexistent.toml");

        let result = ConfigDiscovery::discover(tmp.path(), Some(&missing));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }
}
