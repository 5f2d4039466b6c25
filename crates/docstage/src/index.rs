//! Per-subdirectory file indexes
//!
//! Every immediate subdirectory of the docs root gets a `file_list.md`
//! listing the version-controlled files below it, Markdown files excluded.
//! Untracked files never appear.

mod document;
mod generator;
mod reporting;
mod tracked;

pub use document::IndexDocument;
pub use generator::IndexGenerator;
pub use reporting::IndexReporter;
pub use tracked::{GitLsFiles, TrackedFiles, TrackedFilesError};

/// Index run result with statistics
#[derive(Debug, Clone, Default)]
pub struct IndexReport {
    /// Index documents written
    pub written: usize,
    /// Files listed across all documents
    pub listed: usize,
    /// Subdirectories whose tracked-file query failed
    pub errors: Vec<String>,
}

impl IndexReport {
    /// Whether every subdirectory was indexed
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}
