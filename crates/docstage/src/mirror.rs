//! Source tree mirroring into the docs root
//!
//! A run goes through three steps:
//! 1. Optionally delete docs subdirectories named in the exclude set
//! 2. Select top-level source entries (exclude or include policy)
//! 3. Copy each selected directory recursively, and each selected top-level
//!    Markdown file into the docs root
//!
//! Markdown files are copied only when stale; every other file is copied on
//! every run.

mod actions;
mod executor;
mod orchestrator;
mod reporting;

pub use actions::{MirrorAction, MirrorActionResolver};
pub use orchestrator::Mirror;
pub use reporting::MirrorReporter;

/// Mirror run result with statistics
#[derive(Debug, Clone, Default)]
pub struct MirrorReport {
    /// Top-level directories mirrored
    pub directories: usize,
    /// Files copied to a new destination
    pub created: usize,
    /// Non-Markdown files copied over an existing destination
    pub overwritten: usize,
    /// Markdown files refreshed because the source was newer
    pub updated: usize,
    /// Markdown files left untouched
    pub unchanged: usize,
    /// Excluded docs directories removed
    pub removed: usize,
    /// Allow-listed names not found in the source root
    pub missing: Vec<String>,
    /// Entries that were skipped with a warning
    pub warnings: Vec<String>,
}

impl MirrorReport {
    /// Total write operations performed
    #[must_use]
    pub const fn total_operations(&self) -> usize {
        self.created + self.overwritten + self.updated + self.removed
    }
}
