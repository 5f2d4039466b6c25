//! Modification-time lookups and the staleness rule

use std::fs;
use std::io;
use std::path::Path;
use std::time::SystemTime;

use anyhow::Context;

use crate::error::Result;

/// Whether a destination needs refreshing from its source
///
/// A missing destination is always stale; otherwise the source must be
/// strictly newer. Equal timestamps count as up to date.
#[must_use]
pub fn is_stale(source_modified: SystemTime, dest_modified: Option<SystemTime>) -> bool {
    dest_modified.is_none_or(|dest| source_modified > dest)
}

/// Source of file modification times
pub trait FileTimes {
    /// Modification time of `path`, or `None` if it does not exist
    ///
    /// # Errors
    ///
    /// Returns an error if the metadata exists but cannot be read.
    fn modified(&self, path: &Path) -> Result<Option<SystemTime>>;
}

/// [`FileTimes`] backed by the real filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsTimes;

impl FileTimes for FsTimes {
    fn modified(&self, path: &Path) -> Result<Option<SystemTime>> {
        let metadata = match fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read metadata for: {}", path.display()));
            }
        };

        metadata
            .modified()
            .map(Some)
            .with_context(|| format!("Failed to get modification time for: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::time::Duration;
    use tempfile::TempDir;

    fn at(secs: u64) -> SystemTime {
        SystemTime::UNIX_EPOCH + Duration::from_secs(secs)
    }

    #[test]
    fn test_missing_destination_is_stale() {
        assert!(is_stale(at(100), None));
    }

    #[test]
    fn test_newer_source_is_stale() {
        assert!(is_stale(at(200), Some(at(100))));
    }

    #[test]
    fn test_equal_timestamps_are_fresh() {
        assert!(!is_stale(at(100), Some(at(100))));
    }

    #[test]
    fn test_newer_destination_is_fresh() {
        assert!(!is_stale(at(100), Some(at(200))));
    }

    #[test]
    fn test_fs_times_reads_mtime() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("file.txt");
        fs::write(&file, "content").unwrap();
        File::options()
            .write(true)
            .open(&file)
            .unwrap()
            .set_modified(at(1_000_000))
            .unwrap();

        assert_eq!(FsTimes.modified(&file).unwrap(), Some(at(1_000_000)));
    }

    #[test]
    fn test_fs_times_nonexistent_file() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("nonexistent.txt");

        assert_eq!(FsTimes.modified(&file).unwrap(), None);
    }
}
