//! Mirror orchestration - coordinates the cleanup, scan and copy workflow

use std::path::{Path, PathBuf};

use anyhow::bail;

use super::MirrorReport;
use super::actions::{MirrorAction, MirrorActionResolver};
use super::executor::FileOperationExecutor;
use crate::comparison::{FileComparator, FileTimes, FsTimes};
use crate::config::MirrorConfig;
use crate::error::Result;
use crate::scanner::tree::{self, TreeEntryKind};
use crate::scanner::{EntryFilter, EntryKind, Scanner};

/// Main mirror engine
pub struct Mirror<T = FsTimes> {
    config: MirrorConfig,
    comparator: FileComparator<T>,
    executor: FileOperationExecutor,
}

impl Mirror<FsTimes> {
    /// Create a mirror reading timestamps from the filesystem
    #[must_use]
    pub fn new(config: MirrorConfig) -> Self {
        Self::with_comparator(config, FileComparator::new())
    }
}

impl<T: FileTimes> Mirror<T> {
    /// Create a mirror with a custom comparator
    #[must_use]
    pub fn with_comparator(config: MirrorConfig, comparator: FileComparator<T>) -> Self {
        let executor = FileOperationExecutor::new(config.dry_run);
        Self {
            config,
            comparator,
            executor,
        }
    }

    /// Execute the mirror operation
    ///
    /// # Errors
    ///
    /// Returns an error if the source root cannot be read, the docs root is
    /// the source root itself, or any filesystem operation fails. Missing
    /// allow-listed entries are not errors.
    pub fn run(&self) -> Result<MirrorReport> {
        let mut report = MirrorReport::default();
        let dest_root = &self.config.dest_root;

        log::info!(
            "Mirroring {} into {}",
            self.config.source_root.display(),
            dest_root.display()
        );

        self.executor.execute(
            &MirrorAction::CreateDirectory {
                path: dest_root.clone(),
            },
            &mut report,
        )?;

        let resolved_dest = resolve(dest_root);
        if resolved_dest == resolve(&self.config.source_root) {
            bail!(
                "Docs root {} is the source root; it must be a separate directory",
                dest_root.display()
            );
        }

        if self.config.cleanup_excluded {
            self.remove_excluded(&mut report)?;
        }

        let filter = EntryFilter::from_selection(&self.config.selection, self.config.skip_hidden);
        let scan = Scanner::new(filter).scan(&self.config.source_root)?;

        for name in scan.missing {
            println!("Missing include entry, skipping: {name}");
            report.missing.push(name);
        }

        for entry in &scan.entries {
            match entry.kind {
                EntryKind::Directory => {
                    // A docs root nested in this directory would be copied into itself
                    if resolved_dest.starts_with(resolve(&entry.path)) {
                        report.warnings.push(format!(
                            "Skipped {}/: it contains the docs root {}",
                            entry.name,
                            dest_root.display()
                        ));
                        continue;
                    }

                    let dest_name = self.config.destination_name(&entry.name);
                    println!("Cloning folder: {} → {dest_name}/", entry.name);
                    self.copy_tree(
                        &entry.path,
                        &self.config.destination_dir(&entry.name),
                        &mut report,
                    )?;
                    report.directories += 1;
                }
                EntryKind::MarkdownFile => {
                    self.copy_file(&entry.path, &dest_root.join(&entry.name), &mut report)?;
                }
            }
        }

        for warning in &report.warnings {
            eprintln!("Warning: {warning}");
        }

        Ok(report)
    }

    /// Remove docs subdirectories whose names are excluded
    fn remove_excluded(&self, report: &mut MirrorReport) -> Result<()> {
        let dest_root = &self.config.dest_root;
        if !dest_root.is_dir() {
            return Ok(());
        }

        for name in self.config.selection.cleanup_targets() {
            let path = dest_root.join(name);
            if path.is_dir() {
                self.executor
                    .execute(&MirrorAction::RemoveExcluded { path }, report)?;
            }
        }

        Ok(())
    }

    /// Recreate `source` below `dest`, copying every file it contains
    fn copy_tree(&self, source: &Path, dest: &Path, report: &mut MirrorReport) -> Result<()> {
        let listing = tree::walk(source)?;
        report.warnings.extend(listing.warnings);

        self.executor.execute(
            &MirrorAction::CreateDirectory {
                path: dest.to_path_buf(),
            },
            report,
        )?;

        for entry in listing.entries {
            let dest_path = dest.join(&entry.relative);
            match entry.kind {
                TreeEntryKind::Directory => {
                    log::debug!("Creating directory {}", dest_path.display());
                    self.executor
                        .execute(&MirrorAction::CreateDirectory { path: dest_path }, report)?;
                }
                TreeEntryKind::File => {
                    self.copy_file(&source.join(&entry.relative), &dest_path, report)?;
                }
            }
        }

        Ok(())
    }

    fn copy_file(&self, source: &Path, dest: &Path, report: &mut MirrorReport) -> Result<()> {
        let decision = self.comparator.compare(source, dest)?;
        log::debug!("{} -> {}: {decision:?}", source.display(), dest.display());

        let action = MirrorActionResolver::resolve(source.to_path_buf(), dest.to_path_buf(), decision);
        self.executor.execute(&action, report)
    }
}

/// Absolute, symlink-free form of `path`, as far as it exists
fn resolve(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    dunce::canonicalize(&absolute).unwrap_or(absolute)
}
