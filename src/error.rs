//! Error types.
//!
//! [`PruneError`] says why a walk stopped, [`Aborted`] pairs it with the
//! counts gathered so far, and [`Error`] is what the command-line layer
//! returns.

use crate::config::ConfigError;
use crate::pruner::Stats;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Reasons a prune stops early.
#[derive(Error, Debug)]
pub enum PruneError {
    /// The walker could not read a directory or stat an entry.
    #[error("walking directory tree: {source}")]
    Traversal {
        path: Option<PathBuf>,
        source: walkdir::Error,
    },

    /// A prunable file could not be deleted.
    #[error("removing {}: {source}", .path.display())]
    Removal { path: PathBuf, source: io::Error },
}

impl PruneError {
    pub(crate) fn traversal(source: walkdir::Error) -> Self {
        Self::Traversal {
            path: source.path().map(Path::to_path_buf),
            source,
        }
    }

    /// Path of the entry that failed, when the walker knows it.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Traversal { path, .. } => path.as_deref(),
            Self::Removal { path, .. } => Some(path),
        }
    }

    /// Underlying OS error, if there is one.
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            Self::Traversal { source, .. } => source.io_error(),
            Self::Removal { source, .. } => Some(source),
        }
    }
}

/// A prune that stopped on its first error, together with what it had counted.
#[derive(Error, Debug)]
#[error("prune aborted after {} files: {error}", .stats.files_total)]
pub struct Aborted {
    pub stats: Stats,
    pub error: PruneError,
}

/// Errors surfaced by the command-line layer.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Prune(#[from] Aborted),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removal_display_names_action_and_path() {
        let err = PruneError::Removal {
            path: PathBuf::from("pkg/readme.md"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };

        assert_eq!(err.to_string(), "removing pkg/readme.md: denied");
        assert_eq!(err.path(), Some(Path::new("pkg/readme.md")));
        assert_eq!(
            err.io_error().map(io::Error::kind),
            Some(io::ErrorKind::PermissionDenied)
        );
    }

    #[test]
    fn test_traversal_from_missing_root() {
        let temp_dir = tempfile::tempdir().unwrap();
        let missing = temp_dir.path().join("missing");

        let walk_err = walkdir::WalkDir::new(&missing)
            .into_iter()
            .find_map(|entry| entry.err())
            .unwrap();
        let err = PruneError::traversal(walk_err);

        assert_eq!(err.path(), Some(missing.as_path()));
        assert_eq!(
            err.io_error().map(io::Error::kind),
            Some(io::ErrorKind::NotFound)
        );
    }

    #[test]
    fn test_aborted_carries_stats() {
        let aborted = Aborted {
            stats: Stats {
                files_total: 3,
                files_removed: 1,
                size_removed: 10,
            },
            error: PruneError::Removal {
                path: PathBuf::from("a.md"),
                source: io::Error::other("busy"),
            },
        };

        assert_eq!(aborted.to_string(), "prune aborted after 3 files: removing a.md: busy");
        let wrapped: Error = aborted.into();
        assert!(matches!(wrapped, Error::Prune(_)));
    }
}
