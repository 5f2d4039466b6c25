//! Mirror action determination logic

use std::path::PathBuf;

use crate::comparison::CopyDecision;

/// Mirror action to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MirrorAction {
    /// Delete an excluded directory left in the docs root
    RemoveExcluded { path: PathBuf },
    /// Create a directory (no-op if it exists)
    CreateDirectory { path: PathBuf },
    /// Copy a file that has no destination yet
    Create { source: PathBuf, dest: PathBuf },
    /// Replace a non-Markdown destination unconditionally
    Overwrite { source: PathBuf, dest: PathBuf },
    /// Replace a Markdown destination older than its source
    Update { source: PathBuf, dest: PathBuf },
    /// Leave an up-to-date Markdown destination alone
    Unchanged { dest: PathBuf },
}

/// Resolves copy decisions into mirror actions
pub struct MirrorActionResolver;

impl MirrorActionResolver {
    /// Determine the file action for a comparison outcome
    #[must_use]
    pub fn resolve(source: PathBuf, dest: PathBuf, decision: CopyDecision) -> MirrorAction {
        match decision {
            CopyDecision::Create => MirrorAction::Create { source, dest },
            CopyDecision::Overwrite => MirrorAction::Overwrite { source, dest },
            CopyDecision::Update => MirrorAction::Update { source, dest },
            CopyDecision::Unchanged => MirrorAction::Unchanged { dest },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_unchanged_keeps_only_destination() {
        let action = MirrorActionResolver::resolve(
            PathBuf::from("src/a.md"),
            PathBuf::from("docs/a.md"),
            CopyDecision::Unchanged,
        );
        assert_eq!(
            action,
            MirrorAction::Unchanged {
                dest: PathBuf::from("docs/a.md")
            }
        );
    }

    #[test]
    fn test_resolve_copy_decisions() {
        let src = PathBuf::from("src/logo.png");
        let dst = PathBuf::from("docs/logo.png");

        assert!(matches!(
            MirrorActionResolver::resolve(src.clone(), dst.clone(), CopyDecision::Create),
            MirrorAction::Create { .. }
        ));
        assert!(matches!(
            MirrorActionResolver::resolve(src.clone(), dst.clone(), CopyDecision::Overwrite),
            MirrorAction::Overwrite { .. }
        ));
        assert!(matches!(
            MirrorActionResolver::resolve(src, dst, CopyDecision::Update),
            MirrorAction::Update { .. }
        ));
    }
}
