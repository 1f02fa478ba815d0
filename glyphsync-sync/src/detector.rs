//! Change detection — stored marker vs fresh upstream hash.

use std::path::Path;

use tokio_util::sync::CancellationToken;

use crate::error::SyncError;
use crate::{hasher, marker};

/// Outcome of the change check.
///
/// The fresh hash travels with the decision so the commit step never depends
/// on shared mutable state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeDecision {
    /// Whether the workflow should proceed with a full update.
    pub update_needed: bool,
    /// Fresh hash of the upstream icon directory. `None` when the marker was
    /// missing: fail-open, the update proceeds without computing a hash and
    /// the runner computes one at commit time.
    pub new_hash: Option<String>,
}

/// Decide whether the upstream icon set changed since the last run.
///
/// A missing marker always means "update" (fail-open): the first run, or any
/// run after marker loss, updates regardless of actual content state.
pub fn check(
    package_repo: &Path,
    upstream_icons: &Path,
    force: bool,
    cancel: &CancellationToken,
) -> Result<ChangeDecision, SyncError> {
    let Some(old_hash) = marker::read(package_repo)? else {
        tracing::debug!("no hash marker in the package repository, proceeding to update");
        return Ok(ChangeDecision {
            update_needed: true,
            new_hash: None,
        });
    };

    let new_hash = hasher::hash_directory(upstream_icons, cancel)?;

    if old_hash == new_hash {
        if force {
            tracing::warn!("hashes are equal but the force override is set, continuing");
        } else {
            tracing::info!("hashes are equal, no update needed");
            return Ok(ChangeDecision {
                update_needed: false,
                new_hash: Some(new_hash),
            });
        }
    }

    Ok(ChangeDecision {
        update_needed: true,
        new_hash: Some(new_hash),
    })
}
