//! Error types for glyphsync-sync.

use std::path::PathBuf;

use thiserror::Error;

use glyphsync_core::error::ConfigError;
use glyphsync_dotnet::DotnetError;
use glyphsync_git::GitError;

/// All errors that can arise from a synchronization run.
#[derive(Debug, Error)]
pub enum SyncError {
    /// An error from the source-control collaborator.
    #[error("git error: {0}")]
    Git(#[from] GitError),

    /// An error from the package toolchain collaborator.
    #[error("package toolchain error: {0}")]
    Dotnet(#[from] DotnetError),

    /// A required environment variable is missing.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Cancellation was requested; the run unwound without cleanup.
    #[error("run cancelled")]
    Cancelled,
}

/// Convenience constructor for [`SyncError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SyncError {
    SyncError::Io {
        path: path.into(),
        source,
    }
}
