//! Recursive listing of a directory tree to be copied

use std::path::{Path, PathBuf};

use anyhow::Context;
use walkdir::WalkDir;

use crate::error::Result;

/// Kind of an entry inside a copied tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeEntryKind {
    /// Directory to recreate
    Directory,
    /// File to copy
    File,
}

/// An entry relative to the tree root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    /// Path relative to the walked root
    pub relative: PathBuf,
    /// Directory or file
    pub kind: TreeEntryKind,
}

/// Everything below a root, parents listed before their children
#[derive(Debug, Clone, Default)]
pub struct TreeListing {
    /// Entries in walk order
    pub entries: Vec<TreeEntry>,
    /// Entries that were left out (symlinked directories, broken links)
    pub warnings: Vec<String>,
}

/// List all directories and files below `root`
///
/// Symlinked files are listed as files and copied through the link;
/// symlinked directories are not descended into.
///
/// # Errors
///
/// Returns an error if directory traversal fails due to permission issues
/// or I/O errors.
pub fn walk(root: &Path) -> Result<TreeListing> {
    let mut listing = TreeListing::default();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = entry.with_context(|| format!("Failed to walk {}", root.display()))?;
        let path = entry.path();
        let relative = path
            .strip_prefix(root)
            .with_context(|| format!("Failed to strip prefix from {}", path.display()))?
            .to_path_buf();

        let file_type = entry.file_type();
        let kind = if file_type.is_dir() {
            TreeEntryKind::Directory
        } else if file_type.is_file() {
            TreeEntryKind::File
        } else if file_type.is_symlink() && path.is_file() {
            TreeEntryKind::File
        } else if file_type.is_symlink() && path.is_dir() {
            listing
                .warnings
                .push(format!("Skipping symlinked directory: {}", path.display()));
            continue;
        } else {
            listing
                .warnings
                .push(format!("Skipping unsupported entry: {}", path.display()));
            continue;
        };

        listing.entries.push(TreeEntry { relative, kind });
    }

    Ok(listing)
}
