//! Index generation over the docs root

use std::fs;
use std::path::PathBuf;

use anyhow::Context;

use super::IndexReport;
use super::document::IndexDocument;
use super::tracked::TrackedFiles;
use crate::config::IndexConfig;
use crate::error::Result;

/// Writes one index document per docs subdirectory
pub struct IndexGenerator<T> {
    config: IndexConfig,
    tracked: T,
}

impl<T: TrackedFiles> IndexGenerator<T> {
    /// Create a generator querying `tracked` for file listings
    #[must_use]
    pub const fn new(config: IndexConfig, tracked: T) -> Self {
        Self { config, tracked }
    }

    /// Generate the index for every immediate subdirectory of the docs root
    ///
    /// A failed tracked-file query is recorded in the report and leaves that
    /// subdirectory's index untouched; the remaining subdirectories are still
    /// processed.
    ///
    /// # Errors
    ///
    /// Returns an error if the docs root cannot be read or an index cannot be
    /// written.
    pub fn run(&self) -> Result<IndexReport> {
        let mut report = IndexReport::default();

        log::info!("Generating indexes under {}", self.config.docs_root.display());

        for (name, dir) in self.subdirectories()? {
            let tracked = match self.tracked.tracked_files(&dir) {
                Ok(tracked) => tracked,
                Err(e) => {
                    eprintln!("Warning: skipping index for {}: {e}", dir.display());
                    report.errors.push(format!("{}: {e}", dir.display()));
                    continue;
                }
            };

            let document = IndexDocument::new(&name, &tracked, &self.config.skip_extension);
            let target = self.config.index_path(&dir);

            if self.config.dry_run {
                println!(
                    "[DRY RUN] Would write index: {} ({} files)",
                    target.display(),
                    document.files().len()
                );
            } else {
                fs::write(&target, document.render())
                    .with_context(|| format!("Failed to write index: {}", target.display()))?;
                println!(
                    "Wrote index: {} ({} files)",
                    target.display(),
                    document.files().len()
                );
            }

            report.written += 1;
            report.listed += document.files().len();
        }

        Ok(report)
    }

    /// Immediate subdirectories of the docs root, sorted by name
    fn subdirectories(&self) -> Result<Vec<(String, PathBuf)>> {
        let docs_root = &self.config.docs_root;
        let read_dir = fs::read_dir(docs_root)
            .with_context(|| format!("Failed to read directory: {}", docs_root.display()))?;

        let mut dirs = Vec::new();
        for entry in read_dir {
            let entry = entry
                .with_context(|| format!("Failed to read entry in {}", docs_root.display()))?;
            let path = entry.path();
            if path.is_dir() {
                dirs.push((entry.file_name().to_string_lossy().into_owned(), path));
            }
        }
        dirs.sort();

        Ok(dirs)
    }
}
