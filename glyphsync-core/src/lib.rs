//! Glyphsync core library — configuration, run types, subprocess plumbing.
//!
//! Public API surface:
//! - [`config`] — strict environment lookups and fixed layout constants
//! - [`error`] — [`ConfigError`], [`ProcessError`]
//! - [`process`] — cancellable subprocess execution
//! - [`types`] — run outcome and summary types

pub mod config;
pub mod error;
pub mod process;
pub mod types;

pub use error::{ConfigError, ProcessError};
pub use types::{RunOutcome, RunSummary};
