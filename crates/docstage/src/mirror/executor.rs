//! File operations executor

use std::fs::{self, File};
use std::io;
use std::path::Path;
use std::time::SystemTime;

use anyhow::Context;

use super::MirrorReport;
use super::actions::MirrorAction;
use crate::error::Result;

/// Executes mirror actions and prints one status line per file
pub struct FileOperationExecutor {
    dry_run: bool,
}

impl FileOperationExecutor {
    /// Create a new executor
    #[must_use]
    pub const fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Execute a mirror action
    ///
    /// # Errors
    ///
    /// Returns an error if file operations fail.
    pub fn execute(&self, action: &MirrorAction, report: &mut MirrorReport) -> Result<()> {
        match action {
            MirrorAction::RemoveExcluded { path } => {
                if self.dry_run {
                    println!("[DRY RUN] Would remove excluded dir: {}", path.display());
                } else {
                    println!("Removing excluded dir from docs: {}", path.display());
                    fs::remove_dir_all(path).with_context(|| {
                        format!("Failed to remove directory: {}", path.display())
                    })?;
                }
                report.removed += 1;
            }
            MirrorAction::CreateDirectory { path } => {
                if !self.dry_run {
                    fs::create_dir_all(path).with_context(|| {
                        format!("Failed to create directory: {}", path.display())
                    })?;
                }
            }
            MirrorAction::Create { source, dest } => {
                if self.dry_run {
                    println!("[DRY RUN] Would create: {}", dest.display());
                } else {
                    Self::copy_file(source, dest)?;
                    println!("Copied file: {}", dest.display());
                }
                report.created += 1;
            }
            MirrorAction::Overwrite { source, dest } => {
                if self.dry_run {
                    println!("[DRY RUN] Would overwrite: {}", dest.display());
                } else {
                    Self::copy_file(source, dest)?;
                    println!("Copied file: {}", dest.display());
                }
                report.overwritten += 1;
            }
            MirrorAction::Update { source, dest } => {
                if self.dry_run {
                    println!("[DRY RUN] Would update (source newer): {}", dest.display());
                } else {
                    Self::copy_file(source, dest)?;
                    println!("Updated .md file: {}", dest.display());
                }
                report.updated += 1;
            }
            MirrorAction::Unchanged { dest } => {
                if self.dry_run {
                    println!("[DRY RUN] Skipped unchanged .md: {}", dest.display());
                } else {
                    println!("Skipped unchanged .md: {}", dest.display());
                }
                report.unchanged += 1;
            }
        }
        Ok(())
    }

    /// Copy a file, carrying the source modification time over
    ///
    /// The destination timestamp is what the next run compares against, so
    /// an untouched Markdown source is skipped from then on.
    fn copy_file(source: &Path, dest: &Path) -> Result<()> {
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::copy(source, dest).with_context(|| {
            format!("Failed to copy {} to {}", source.display(), dest.display())
        })?;

        let modified = fs::metadata(source)
            .and_then(|m| m.modified())
            .with_context(|| format!("Failed to get modification time for: {}", source.display()))?;
        Self::set_modified(dest, modified)
            .with_context(|| format!("Failed to set modification time on: {}", dest.display()))?;

        Ok(())
    }

    fn set_modified(path: &Path, modified: SystemTime) -> io::Result<()> {
        // futimens needs ownership rather than write access, so read-only copies work
        #[cfg(unix)]
        let file = File::open(path)?;
        #[cfg(not(unix))]
        let file = File::options().write(true).open(path)?;
        file.set_modified(modified)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::Duration;
    use tempfile::TempDir;

    #[test]
    fn test_copy_preserves_mtime() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("a.md");
        let dest = tmp.path().join("out/nested/a.md");
        fs::write(&source, "# A").unwrap();
        let mtime = SystemTime::UNIX_EPOCH + Duration::from_secs(1_500_000_000);
        File::options()
            .write(true)
            .open(&source)
            .unwrap()
            .set_modified(mtime)
            .unwrap();

        let mut report = MirrorReport::default();
        FileOperationExecutor::new(false)
            .execute(
                &MirrorAction::Create {
                    source: source.clone(),
                    dest: dest.clone(),
                },
                &mut report,
            )
            .unwrap();

        assert_eq!(fs::read_to_string(&dest).unwrap(), "# A");
        assert_eq!(fs::metadata(&dest).unwrap().modified().unwrap(), mtime);
        assert_eq!(report.created, 1);
    }

    #[test]
    fn test_dry_run_touches_nothing() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("logo.png");
        fs::write(&source, "png").unwrap();
        let excluded = tmp.path().join("site");
        fs::create_dir(&excluded).unwrap();
        let dest = tmp.path().join("docs/logo.png");

        let executor = FileOperationExecutor::new(true);
        let mut report = MirrorReport::default();
        executor
            .execute(
                &MirrorAction::RemoveExcluded {
                    path: excluded.clone(),
                },
                &mut report,
            )
            .unwrap();
        executor
            .execute(
                &MirrorAction::CreateDirectory {
                    path: tmp.path().join("docs"),
                },
                &mut report,
            )
            .unwrap();
        executor
            .execute(
                &MirrorAction::Create {
                    source,
                    dest: dest.clone(),
                },
                &mut report,
            )
            .unwrap();

        assert!(excluded.exists());
        assert!(!dest.exists());
        assert!(!tmp.path().join("docs").exists());
        assert_eq!(report.removed, 1);
        assert_eq!(report.created, 1);
    }

    #[test]
    fn test_unchanged_counts_without_copying() {
        let mut report = MirrorReport::default();
        FileOperationExecutor::new(false)
            .execute(
                &MirrorAction::Unchanged {
                    dest: PathBuf::from("/nonexistent/a.md"),
                },
                &mut report,
            )
            .unwrap();

        assert_eq!(report.unchanged, 1);
        assert_eq!(report.total_operations(), 0);
    }

    #[test]
    fn test_copy_missing_source_fails() {
        let tmp = TempDir::new().unwrap();
        let mut report = MirrorReport::default();

        let result = FileOperationExecutor::new(false).execute(
            &MirrorAction::Overwrite {
                source: tmp.path().join("gone.png"),
                dest: tmp.path().join("docs/gone.png"),
            },
            &mut report,
        );

        assert!(result.is_err());
        assert_eq!(report.overwritten, 0);
    }
}
