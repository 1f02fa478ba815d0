//! Error types for glyphsync-dotnet.

use thiserror::Error;

use glyphsync_core::error::ProcessError;

/// All errors that can arise from the package toolchain.
#[derive(Debug, Error)]
pub enum DotnetError {
    /// Failure invoking the `dotnet` binary.
    #[error("dotnet error: {0}")]
    Process(#[from] ProcessError),
}
