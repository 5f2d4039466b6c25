//! Selection of the source root's top-level entries
//!
//! Only the top level is filtered:
//! - Directories admitted by the [`EntryFilter`] are mirrored recursively
//! - Markdown files admitted in exclude mode are copied into the docs root
//! - Everything below an admitted directory is copied as-is (see [`tree`])

mod filters;
pub mod tree;


use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

pub use filters::EntryFilter;

use crate::comparison::is_markdown;
use crate::error::Result;

/// Kind of a selected top-level entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Directory mirrored recursively
    Directory,
    /// Markdown file copied into the docs root
    MarkdownFile,
}

/// A selected top-level entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    /// Basename in the source root
    pub name: String,
    /// Full source path
    pub path: PathBuf,
    /// Directory or Markdown file
    pub kind: EntryKind,
}

/// Result of a top-level scan
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    /// Entries to mirror, sorted by name (exclude mode) or in allow-list order
    pub entries: Vec<SourceEntry>,
    /// Allow-listed names with no matching directory in the source root
    pub missing: Vec<String>,
}

/// Top-level scanner
pub struct Scanner {
    filter: EntryFilter,
}

impl Scanner {
    /// Create a new scanner with the given filter
    #[must_use]
    pub const fn new(filter: EntryFilter) -> Self {
        Self { filter }
    }

    /// Scan the top level of `source_root`
    ///
    /// # Errors
    ///
    /// Returns an error if the source root cannot be read.
    pub fn scan(&self, source_root: &Path) -> Result<ScanResult> {
        match &self.filter {
            EntryFilter::Include { dirs } => Ok(Self::scan_include(source_root, dirs)),
            EntryFilter::Exclude { .. } => self.scan_exclude(source_root),
        }
    }

    fn scan_include(source_root: &Path, dirs: &[String]) -> ScanResult {
        let mut result = ScanResult::default();

        for name in dirs {
            let path = source_root.join(name);
            if path.is_dir() {
                result.entries.push(SourceEntry {
                    name: name.clone(),
                    path,
                    kind: EntryKind::Directory,
                });
            } else {
                result.missing.push(name.clone());
            }
        }

        result
    }

    fn scan_exclude(&self, source_root: &Path) -> Result<ScanResult> {
        let mut result = ScanResult::default();

        let read_dir = fs::read_dir(source_root)
            .with_context(|| format!("Failed to read directory: {}", source_root.display()))?;

        let mut entries = Vec::new();
        for entry in read_dir {
            let entry = entry
                .with_context(|| format!("Failed to read entry in {}", source_root.display()))?;
            entries.push(entry.path());
        }
        entries.sort();

        for path in entries {
            let Some(name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
                continue;
            };

            if !self.filter.admits(&name) {
                log::debug!("Excluded top-level entry: {name}");
                continue;
            }

            let kind = if path.is_dir() {
                EntryKind::Directory
            } else if path.is_file() && is_markdown(&path) {
                EntryKind::MarkdownFile
            } else {
                log::debug!("Ignoring top-level non-Markdown entry: {name}");
                continue;
            };

            result.entries.push(SourceEntry { name, path, kind });
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_kind_types() {
        assert_eq!(EntryKind::Directory, EntryKind::Directory);
        assert_ne!(EntryKind::Directory, EntryKind::MarkdownFile);
    }

    #[test]
    fn test_scan_missing_source_root() {
        let scanner = Scanner::new(EntryFilter::Exclude {
            names: std::collections::BTreeSet::new(),
            skip_hidden: false,
        });
        assert!(scanner.scan(Path::new("/nonexistent/source/root")).is_err());
    }
}
