//! Integration tests for configuration module

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use super::{CONFIG_FILE_NAME, ConfigManager, Selection};

#[test]
fn test_full_config_workflow() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(CONFIG_FILE_NAME),
        r#"
source = "repo"
docs = "site-docs"
include = ["guides", "assets"]
skip_hidden = false
index_file_name = "files.md"
"#,
    )
    .unwrap();

    let config = ConfigManager::load_in(tmp.path(), None).unwrap();

    assert_eq!(config.source, tmp.path().join("repo"));
    assert_eq!(config.docs, tmp.path().join("site-docs"));

    let mirror = config.mirror_config();
    assert_eq!(
        mirror.selection,
        Selection::Include {
            dirs: vec!["guides".to_string(), "assets".to_string()]
        }
    );
    assert!(!mirror.skip_hidden);

    let index = config.index_config();
    assert_eq!(index.docs_root, tmp.path().join("site-docs"));
    assert_eq!(index.index_file_name, "files.md");
}

#[test]
fn test_explicit_config_path() {
    let tmp = TempDir::new().unwrap();
    let custom = tmp.path().join("custom.toml");
    fs::write(&custom, "docs = \"/abs/docs\"").unwrap();

    let config = ConfigManager::load_in(tmp.path(), Some(&custom)).unwrap();
    assert_eq!(config.docs, PathBuf::from("/abs/docs"));
}

#[test]
fn test_no_config_file_uses_defaults() {
    let tmp = TempDir::new().unwrap();

    let config = ConfigManager::load_in(tmp.path(), None).unwrap();
    assert_eq!(config, ConfigManager::defaults_in(tmp.path()));
}

#[test]
fn test_invalid_config_validation() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(CONFIG_FILE_NAME),
        r#"
[renames]
templates = "Shared"
layouts = "Shared"
"#,
    )
    .unwrap();

    let result = ConfigManager::load_in(tmp.path(), None);

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("both map to 'Shared'"));
}

#[test]
fn test_rename_to_parent_directory_rejected() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(CONFIG_FILE_NAME),
        r#"
[renames]
templates = ".."
"#,
    )
    .unwrap();

    let result = ConfigManager::load_in(tmp.path(), None);

    assert!(result.unwrap_err().to_string().contains("must be a plain name"));
}
