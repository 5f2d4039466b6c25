//! Top-level entry filtering by exact basename

use std::collections::BTreeSet;

use crate::config::Selection;

/// Decides which top-level names of the source root are mirrored
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryFilter {
    /// Admit every name not listed
    Exclude {
        /// Rejected names (directories and files alike)
        names: BTreeSet<String>,
        /// Also reject names starting with `.`
        skip_hidden: bool,
    },
    /// Admit only the listed directory names
    Include {
        /// Allow-listed names, in mirror order
        dirs: Vec<String>,
    },
}

impl EntryFilter {
    /// Build a filter from a mirror selection
    #[must_use]
    pub fn from_selection(selection: &Selection, skip_hidden: bool) -> Self {
        match selection {
            Selection::Exclude { dirs, files } => Self::Exclude {
                names: dirs.union(files).cloned().collect(),
                skip_hidden,
            },
            Selection::Include { dirs } => Self::Include { dirs: dirs.clone() },
        }
    }

    /// Check whether a top-level name should be mirrored
    #[must_use]
    pub fn admits(&self, name: &str) -> bool {
        match self {
            Self::Exclude { names, skip_hidden } => {
                !names.contains(name) && !(*skip_hidden && name.starts_with('.'))
            }
            Self::Include { dirs } => dirs.iter().any(|d| d == name),
        }
    }
}
