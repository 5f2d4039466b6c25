//! Applying a config file on top of the built-in defaults
//!
//! Every field present in the file replaces the default outright; lists are
//! not concatenated. Setting `include` switches the mirror to include mode.

use std::fs;
use std::path::Path;

use super::error::ConfigError;
use super::types::{Config, ConfigFile};
use super::validation::ConfigValidator;

/// Configuration merger
pub struct ConfigMerger;

impl ConfigMerger {
    /// Create a new config merger
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Read and parse a config file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or
    /// mixes include and exclude settings.
    pub fn load_file(path: &Path) -> Result<ConfigFile, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let file: ConfigFile = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        ConfigValidator::validate_file(&file)?;
        Ok(file)
    }

    /// Overlay the fields set in `file` onto `base`
    pub fn apply(base: &mut Config, file: ConfigFile) {
        if let Some(source) = file.source {
            base.source = source;
        }
        if let Some(docs) = file.docs {
            base.docs = docs;
        }
        if let Some(dirs) = file.exclude_dirs {
            base.exclude_dirs = dirs;
        }
        if let Some(files) = file.exclude_files {
            base.exclude_files = files;
        }
        if file.include.is_some() {
            base.include = file.include;
        }
        if let Some(cleanup) = file.cleanup_excluded {
            base.cleanup_excluded = cleanup;
        }
        if let Some(skip_hidden) = file.skip_hidden {
            base.skip_hidden = skip_hidden;
        }
        if let Some(name) = file.index_file_name {
            base.index_file_name = name;
        }
        if let Some(dry_run) = file.dry_run {
            base.dry_run = dry_run;
        }
        if let Some(renames) = file.renames {
            base.renames = renames;
        }
    }
}

impl Default for ConfigMerger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_apply_empty_file_keeps_defaults() {
        let mut config = Config::default();
        ConfigMerger::apply(&mut config, ConfigFile::default());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_and_apply_overrides() {
        let tmp = TempDir::new().unwrap();
        let config_file = tmp.path().join("docstage.toml");
        fs::write(
            &config_file,
            r#"
docs = "staging"
exclude_dirs = ["build"]
cleanup_excluded = false

[renames]
layouts = "Layouts"
"#,
        )
        .unwrap();

        let file = ConfigMerger::load_file(&config_file).unwrap();
        let mut config = Config::default();
        ConfigMerger::apply(&mut config, file);

        assert_eq!(config.docs, PathBuf::from("staging"));
        assert_eq!(config.exclude_dirs, vec!["build".to_string()]);
        assert!(!config.cleanup_excluded);
        assert_eq!(config.renames.len(), 1);
        assert_eq!(config.renames.get("layouts").map(String::as_str), Some("Layouts"));
        // Untouched fields keep their defaults
        assert_eq!(config.index_file_name, "file_list.md");
        assert!(config.skip_hidden);
    }

    #[test]
    fn test_load_unknown_field() {
        let tmp = TempDir::new().unwrap();
        let config_file = tmp.path().join("docstage.toml");
        fs::write(&config_file, "follow_symlinks = true").unwrap();

        let result = ConfigMerger::load_file(&config_file);
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_load_conflicting_selection() {
        let tmp = TempDir::new().unwrap();
        let config_file = tmp.path().join("docstage.toml");
        fs::write(
            &config_file,
            r#"
include = ["guides"]
exclude_files = ["mkdocs.yml"]
"#,
        )
        .unwrap();

        let result = ConfigMerger::load_file(&config_file);
        assert!(matches!(result, Err(ConfigError::ConflictingSelection)));
    }
}
