//! Rendering of the per-directory index document

use std::path::Path;

/// Listing of one docs subdirectory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexDocument {
    directory: String,
    skip_extension: String,
    files: Vec<String>,
}

impl IndexDocument {
    /// Build the listing from tracked paths, dropping files with `skip_extension`
    /// and keeping only each path's basename
    #[must_use]
    pub fn new(directory: &str, tracked: &[impl AsRef<Path>], skip_extension: &str) -> Self {
        let suffix = format!(".{skip_extension}");
        let files = tracked
            .iter()
            .map(AsRef::<Path>::as_ref)
            .filter_map(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .filter(|name| !name.ends_with(&suffix))
            .collect();

        Self {
            directory: directory.to_string(),
            skip_extension: skip_extension.to_string(),
            files,
        }
    }

    /// Basenames listed in the document
    #[must_use]
    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// Heading line naming the directory
    #[must_use]
    pub fn heading(&self) -> String {
        format!(
            "# List of Files in the {} Directory (excluding .{} files)",
            self.directory, self.skip_extension
        )
    }

    /// Full Markdown text: heading, blank line, one link per file
    #[must_use]
    pub fn render(&self) -> String {
        let entries: Vec<String> = self
            .files
            .iter()
            .map(|file| format!("- [{file}]({file})"))
            .collect();

        format!("{}\n\n{}", self.heading(), entries.join("\n"))
    }
}
