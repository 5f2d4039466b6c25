//! Copy decisions for mirrored files
//!
//! Markdown files are copied only when the destination is missing or older
//! than the source. Every other file is copied on every run.

mod timestamp;

use std::path::Path;

pub use timestamp::{FileTimes, FsTimes, is_stale};

use crate::config::MARKDOWN_EXTENSION;
use crate::error::Result;

/// Outcome of comparing a source file with its destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyDecision {
    /// Destination does not exist yet
    Create,
    /// Non-Markdown destination exists and is replaced unconditionally
    Overwrite,
    /// Markdown destination exists but is older than the source
    Update,
    /// Markdown destination is at least as new as the source
    Unchanged,
}

/// Whether `path` has the Markdown extension
#[must_use]
pub fn is_markdown(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == MARKDOWN_EXTENSION)
}

/// File comparator applying the per-extension copy policy
pub struct FileComparator<T = FsTimes> {
    times: T,
}

impl FileComparator<FsTimes> {
    /// Create a comparator reading the real filesystem
    #[must_use]
    pub const fn new() -> Self {
        Self { times: FsTimes }
    }
}

impl Default for FileComparator<FsTimes> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FileTimes> FileComparator<T> {
    /// Create a comparator over a custom timestamp source
    #[must_use]
    pub const fn with_times(times: T) -> Self {
        Self { times }
    }

    /// Decide how `source` should be mirrored to `destination`
    ///
    /// # Errors
    ///
    /// Returns an error if metadata cannot be read or a Markdown source has
    /// disappeared.
    pub fn compare(&self, source: &Path, destination: &Path) -> Result<CopyDecision> {
        let dest_modified = self.times.modified(destination)?;

        if !is_markdown(source) {
            return Ok(if dest_modified.is_some() {
                CopyDecision::Overwrite
            } else {
                CopyDecision::Create
            });
        }

        let Some(source_modified) = self.times.modified(source)? else {
            anyhow::bail!("Source file does not exist: {}", source.display());
        };

        Ok(match dest_modified {
            None => CopyDecision::Create,
            Some(_) if is_stale(source_modified, dest_modified) => CopyDecision::Update,
            Some(_) => CopyDecision::Unchanged,
        })
    }
}
