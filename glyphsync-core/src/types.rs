//! Run outcome and summary types shared by the workflow and the CLI.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Result of one synchronization run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum RunOutcome {
    /// The upstream hash matches the stored marker; nothing to do.
    UpToDate,
    /// The package build failed. The run ends without publishing or touching
    /// the marker, so the next scheduled run detects the same difference and
    /// retries.
    BuildFailed,
    /// Icons were synchronized and the package was published.
    Published { icons_copied: usize, version: String },
}

/// Machine-readable summary emitted by the CLI after a run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    #[serde(flatten)]
    pub outcome: RunOutcome,
    pub started_at: DateTime<Utc>,
    pub duration_ms: u128,
}
