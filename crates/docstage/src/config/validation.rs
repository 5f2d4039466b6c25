//! Configuration validation and error reporting

use std::collections::HashMap;

use super::error::ConfigError;
use super::types::{Config, ConfigFile};

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Create a new config validator
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Reject a config file that mixes both selection modes
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ConflictingSelection`] when `include` is set
    /// together with an exclude list.
    pub fn validate_file(file: &ConfigFile) -> Result<(), ConfigError> {
        if file.include.is_some() && (file.exclude_dirs.is_some() || file.exclude_files.is_some()) {
            return Err(ConfigError::ConflictingSelection);
        }
        Ok(())
    }

    /// Validate the effective configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a name is empty or path-like, or two renames
    /// collide.
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        Self::validate_names("exclude_dirs", &config.exclude_dirs)?;
        Self::validate_names("exclude_files", &config.exclude_files)?;
        if let Some(include) = &config.include {
            Self::validate_names("include", include)?;
        }
        Self::validate_names("renames", config.renames.keys())?;
        Self::validate_names("renames", config.renames.values())?;
        Self::validate_names("index_file_name", [&config.index_file_name])?;

        let mut targets: HashMap<&str, &str> = HashMap::new();
        for (from, to) in &config.renames {
            if let Some(previous) = targets.insert(to.as_str(), from.as_str()) {
                return Err(ConfigError::RenameCollision {
                    first: previous.to_string(),
                    second: from.clone(),
                    target: to.clone(),
                });
            }
        }

        Ok(())
    }

    fn validate_names<'a>(
        field: &'static str,
        names: impl IntoIterator<Item = &'a String>,
    ) -> Result<(), ConfigError> {
        for name in names {
            if name.trim().is_empty() {
                return Err(ConfigError::EmptyName { field });
            }
            if matches!(name.as_str(), "." | "..")
                || name.contains('/')
                || name.contains('\\')
            {
                return Err(ConfigError::NotABasename {
                    field,
                    name: name.clone(),
                });
            }
        }
        Ok(())
    }
}

impl Default for ConfigValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_default_config() {
        assert!(ConfigValidator::validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_empty_name() {
        let mut config = Config::default();
        config.exclude_dirs.push("   ".to_string());

        let result = ConfigValidator::validate(&config);

        assert!(matches!(
            result,
            Err(ConfigError::EmptyName {
                field: "exclude_dirs"
            })
        ));
    }

    #[test]
    fn test_validate_path_like_name() {
        let config = Config {
            include: Some(vec!["guides/intro".to_string()]),
            ..Config::default()
        };

        let err = ConfigValidator::validate(&config).unwrap_err();
        assert!(err.to_string().contains("must be a plain name"));
    }

    #[test]
    fn test_validate_rejects_dot_components() {
        let mut config = Config::default();
        config
            .renames
            .insert("templates".to_string(), "..".to_string());
        assert!(matches!(
            ConfigValidator::validate(&config),
            Err(ConfigError::NotABasename { field: "renames", .. })
        ));

        let config = Config {
            include: Some(vec!["guides".to_string(), ".".to_string()]),
            ..Config::default()
        };
        assert!(matches!(
            ConfigValidator::validate(&config),
            Err(ConfigError::NotABasename { field: "include", ref name }) if name == "."
        ));
    }

    #[test]
    fn test_validate_rename_collision() {
        let mut config = Config::default();
        config
            .renames
            .insert("layouts".to_string(), "Templates".to_string());

        let err = ConfigValidator::validate(&config).unwrap_err();
        assert!(matches!(err, ConfigError::RenameCollision { ref target, .. } if target == "Templates"));
    }

    #[test]
    fn test_validate_file_conflicting_selection() {
        let file = ConfigFile {
            include: Some(vec!["guides".to_string()]),
            exclude_dirs: Some(vec!["site".to_string()]),
            ..ConfigFile::default()
        };

        assert!(matches!(
            ConfigValidator::validate_file(&file),
            Err(ConfigError::ConflictingSelection)
        ));
    }

    #[test]
    fn test_validate_file_include_only() {
        let file = ConfigFile {
            include: Some(vec!["guides".to_string()]),
            ..ConfigFile::default()
        };

        assert!(ConfigValidator::validate_file(&file).is_ok());
    }
}
