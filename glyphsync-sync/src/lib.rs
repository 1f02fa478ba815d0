//! # glyphsync-sync
//!
//! The one-shot synchronization workflow: change detection against the
//! stored hash marker, full-replace icon synchronization, and the
//! clone → detect → sync → build → publish → commit pipeline.
//!
//! Call [`runner::run`] to execute one run end to end.

pub mod detector;
pub mod error;
pub mod hasher;
pub mod marker;
pub mod runner;
pub mod synchronizer;

pub use detector::ChangeDecision;
pub use error::SyncError;
pub use runner::{run, RunOptions};
