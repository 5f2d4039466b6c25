//! Tracked-file queries against version control

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use thiserror::Error;

/// Errors raised while asking version control for tracked files
#[derive(Debug, Error)]
pub enum TrackedFilesError {
    /// The version-control binary could not be started
    #[error("Failed to run `{program}`")]
    Spawn {
        /// Program that was invoked
        program: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The query ran but reported failure
    #[error("`{program} ls-files` failed for {dir} ({status}): {stderr}")]
    Failed {
        /// Program that was invoked
        program: String,
        /// Directory that was queried
        dir: PathBuf,
        /// Exit status of the query
        status: ExitStatus,
        /// Trimmed standard error output
        stderr: String,
    },
}

/// Lists the tracked files below a directory
pub trait TrackedFiles {
    /// Tracked file paths under `dir`, in the order the backend reports them
    ///
    /// # Errors
    ///
    /// Returns an error if the query cannot be run or reports failure.
    fn tracked_files(&self, dir: &Path) -> Result<Vec<PathBuf>, TrackedFilesError>;
}

impl<T: TrackedFiles + ?Sized> TrackedFiles for &T {
    fn tracked_files(&self, dir: &Path) -> Result<Vec<PathBuf>, TrackedFilesError> {
        (**self).tracked_files(dir)
    }
}

/// [`TrackedFiles`] backed by `git ls-files`
#[derive(Debug, Clone)]
pub struct GitLsFiles {
    program: String,
    work_dir: PathBuf,
}

impl GitLsFiles {
    /// Query git from `work_dir`
    #[must_use]
    pub fn new(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: "git".to_string(),
            work_dir: work_dir.into(),
        }
    }

    /// Use a different git executable
    #[must_use]
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Split `ls-files` output into paths, dropping blank lines
    #[must_use]
    pub fn parse_output(stdout: &str) -> Vec<PathBuf> {
        stdout
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .map(PathBuf::from)
            .collect()
    }
}

impl TrackedFiles for GitLsFiles {
    fn tracked_files(&self, dir: &Path) -> Result<Vec<PathBuf>, TrackedFilesError> {
        // `dir` is relative to the process cwd, not `work_dir`. git resolves its
        // work tree through symlinks, so the absolute path must too.
        let absolute = std::path::absolute(dir).unwrap_or_else(|_| dir.to_path_buf());
        let dir = dunce::canonicalize(&absolute).unwrap_or(absolute);
        log::debug!("Running {} ls-files -- {}", self.program, dir.display());

        let output = Command::new(&self.program)
            .args(["-c", "core.quotePath=false", "ls-files", "--"])
            .arg(&dir)
            .current_dir(&self.work_dir)
            .output()
            .map_err(|source| TrackedFilesError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(TrackedFilesError::Failed {
                program: self.program.clone(),
                dir,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(Self::parse_output(&String::from_utf8_lossy(&output.stdout)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_output() {
        let files = GitLsFiles::parse_output("docs/a.md\ndocs/b.png\r\n\ndocs/sub/c.txt\n");
        assert_eq!(
            files,
            vec![
                PathBuf::from("docs/a.md"),
                PathBuf::from("docs/b.png"),
                PathBuf::from("docs/sub/c.txt"),
            ]
        );
    }

    #[test]
    fn test_parse_empty_output() {
        assert!(GitLsFiles::parse_output("").is_empty());
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let tmp = TempDir::new().unwrap();
        let git = GitLsFiles::new(tmp.path()).with_program("docstage-no-such-vcs-binary");

        let result = git.tracked_files(Path::new("docs"));
        assert!(matches!(result, Err(TrackedFilesError::Spawn { .. })));
    }
}
