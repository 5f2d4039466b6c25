//! Configuration types and structures

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Directory names never mirrored into the docs root
pub const DEFAULT_EXCLUDE_DIRS: &[&str] = &[
    "docs",
    ".git",
    ".github",
    "site",
    "venv",
    ".venv",
    "__pycache__",
    ".mypy_cache",
];

/// Top-level file names never mirrored into the docs root
pub const DEFAULT_EXCLUDE_FILES: &[&str] = &["mkdocs.yml", "requirements.txt", "readthedocs.yml"];

/// Name of the generated index document inside each docs subdirectory
pub const DEFAULT_INDEX_FILE_NAME: &str = "file_list.md";

/// Extension of files treated as Markdown
pub const MARKDOWN_EXTENSION: &str = "md";

/// Effective configuration after defaults, config file and CLI overrides
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Root of the tree being mirrored
    pub source: PathBuf,

    /// Docs root receiving the mirrored tree
    pub docs: PathBuf,

    /// Top-level directory names skipped in exclude mode
    pub exclude_dirs: Vec<String>,

    /// Top-level file names skipped in exclude mode
    pub exclude_files: Vec<String>,

    /// Allow-list of top-level directories; switches the mirror to include mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,

    /// Remove excluded directories from the docs root before copying
    pub cleanup_excluded: bool,

    /// Skip top-level entries starting with `.` in exclude mode
    pub skip_hidden: bool,

    /// File name of the generated index document
    pub index_file_name: String,

    /// Report actions without touching the docs root
    pub dry_run: bool,

    /// Top-level directory renames applied at the destination (source name -> docs name)
    pub renames: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: PathBuf::from("."),
            docs: PathBuf::from("docs"),
            exclude_dirs: DEFAULT_EXCLUDE_DIRS.iter().map(ToString::to_string).collect(),
            exclude_files: DEFAULT_EXCLUDE_FILES.iter().map(ToString::to_string).collect(),
            include: None,
            cleanup_excluded: true,
            skip_hidden: true,
            index_file_name: DEFAULT_INDEX_FILE_NAME.to_string(),
            dry_run: false,
            renames: BTreeMap::from([("templates".to_string(), "Templates".to_string())]),
        }
    }
}

impl Config {
    /// Build the configuration consumed by the mirror
    #[must_use]
    pub fn mirror_config(&self) -> MirrorConfig {
        let selection = match &self.include {
            Some(dirs) => Selection::Include { dirs: dirs.clone() },
            None => {
                let mut dirs: BTreeSet<String> = self.exclude_dirs.iter().cloned().collect();
                // The docs root must never be mirrored into itself.
                if let Some(name) = self.docs.file_name() {
                    dirs.insert(name.to_string_lossy().into_owned());
                }
                Selection::Exclude {
                    dirs,
                    files: self.exclude_files.iter().cloned().collect(),
                }
            }
        };

        MirrorConfig {
            source_root: self.source.clone(),
            dest_root: self.docs.clone(),
            selection,
            renames: self.renames.clone(),
            cleanup_excluded: self.cleanup_excluded,
            skip_hidden: self.skip_hidden,
            dry_run: self.dry_run,
        }
    }

    /// Build the configuration consumed by the index generator
    #[must_use]
    pub fn index_config(&self) -> IndexConfig {
        IndexConfig {
            docs_root: self.docs.clone(),
            index_file_name: self.index_file_name.clone(),
            skip_extension: MARKDOWN_EXTENSION.to_string(),
            dry_run: self.dry_run,
        }
    }
}

/// Which top-level entries of the source root are mirrored
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Everything except the named directories and files
    Exclude {
        /// Excluded directory names
        dirs: BTreeSet<String>,
        /// Excluded file names
        files: BTreeSet<String>,
    },
    /// Only the named directories, in the given order; top-level files are ignored
    Include {
        /// Allow-listed directory names
        dirs: Vec<String>,
    },
}

impl Selection {
    /// Directory names removed from the docs root by the cleanup pass
    pub fn cleanup_targets(&self) -> impl Iterator<Item = &str> {
        let dirs = match self {
            Self::Exclude { dirs, .. } => Some(dirs),
            Self::Include { .. } => None,
        };
        dirs.into_iter().flatten().map(String::as_str)
    }
}

/// Settings for one mirror run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorConfig {
    /// Root whose top-level entries are mirrored
    pub source_root: PathBuf,
    /// Destination docs root
    pub dest_root: PathBuf,
    /// Top-level entry selection policy
    pub selection: Selection,
    /// Top-level directory renames (source name -> destination name)
    pub renames: BTreeMap<String, String>,
    /// Remove excluded directories from the destination before copying
    pub cleanup_excluded: bool,
    /// Skip hidden top-level entries in exclude mode
    pub skip_hidden: bool,
    /// Report without writing
    pub dry_run: bool,
}

impl MirrorConfig {
    /// Mirror everything under `source_root` into `dest_root` with no exclusions
    #[must_use]
    pub fn new(source_root: impl Into<PathBuf>, dest_root: impl Into<PathBuf>) -> Self {
        Self {
            source_root: source_root.into(),
            dest_root: dest_root.into(),
            selection: Selection::Exclude {
                dirs: BTreeSet::new(),
                files: BTreeSet::new(),
            },
            renames: BTreeMap::new(),
            cleanup_excluded: false,
            skip_hidden: false,
            dry_run: false,
        }
    }

    /// Destination name of a top-level directory
    #[must_use]
    pub fn destination_name<'a>(&'a self, name: &'a str) -> &'a str {
        self.renames.get(name).map_or(name, String::as_str)
    }

    /// Destination path of a top-level directory
    #[must_use]
    pub fn destination_dir(&self, name: &str) -> PathBuf {
        self.dest_root.join(self.destination_name(name))
    }
}

/// Settings for one index generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexConfig {
    /// Docs root whose immediate subdirectories are indexed
    pub docs_root: PathBuf,
    /// File name written inside each subdirectory
    pub index_file_name: String,
    /// Extension of tracked files left out of the listing
    pub skip_extension: String,
    /// Report without writing
    pub dry_run: bool,
}

impl IndexConfig {
    /// Index `docs_root` with the default file name and Markdown exclusion
    #[must_use]
    pub fn new(docs_root: impl Into<PathBuf>) -> Self {
        Self {
            docs_root: docs_root.into(),
            index_file_name: DEFAULT_INDEX_FILE_NAME.to_string(),
            skip_extension: MARKDOWN_EXTENSION.to_string(),
            dry_run: false,
        }
    }

    /// Path of the index document for a subdirectory
    #[must_use]
    pub fn index_path(&self, subdir: &Path) -> PathBuf {
        subdir.join(&self.index_file_name)
    }
}

/// Shape of `docstage.toml`; every field is optional and overrides the defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Source root
    pub source: Option<PathBuf>,
    /// Docs root
    pub docs: Option<PathBuf>,
    /// Excluded directory names
    pub exclude_dirs: Option<Vec<String>>,
    /// Excluded file names
    pub exclude_files: Option<Vec<String>>,
    /// Include allow-list
    pub include: Option<Vec<String>>,
    /// Cleanup pass toggle
    pub cleanup_excluded: Option<bool>,
    /// Hidden entry toggle
    pub skip_hidden: Option<bool>,
    /// Index file name
    pub index_file_name: Option<String>,
    /// Dry run toggle
    pub dry_run: Option<bool>,
    /// Directory renames
    pub renames: Option<BTreeMap<String, String>>,
}
