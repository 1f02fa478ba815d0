//! Error types for glyphsync-core.

use thiserror::Error;

/// Errors from strict configuration lookups.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is unset or empty.
    #[error("required environment variable {0} is not set")]
    MissingEnv(&'static str),
}

/// Errors from running an external tool as a subprocess.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The tool could not be spawned or its output could not be collected.
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The tool ran to completion but exited with a non-zero status.
    #[error("{program} exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    /// Cancellation was requested while the tool was running.
    #[error("cancelled while running {program}")]
    Cancelled { program: String },
}
