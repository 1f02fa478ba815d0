//! Error types for glyphsync-git.

use std::path::PathBuf;

use thiserror::Error;

use glyphsync_core::error::ProcessError;

/// All errors that can arise from git operations.
#[derive(Debug, Error)]
pub enum GitError {
    /// Failure invoking the `git` binary.
    #[error("git error: {0}")]
    Process(#[from] ProcessError),

    /// I/O error preparing a working directory.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The remote URL could not carry push credentials.
    #[error("invalid remote URL {url}: {message}")]
    InvalidRemote { url: String, message: String },
}

/// Convenience constructor for [`GitError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> GitError {
    GitError::Io {
        path: path.into(),
        source,
    }
}
