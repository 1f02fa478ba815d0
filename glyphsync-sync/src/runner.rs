//! The one-shot synchronization workflow.
//!
//! Strictly sequential: clone both repositories, detect changes, and when an
//! update is needed synchronize the icons, build/pack/publish the package,
//! then commit the new hash marker. Everything after detection is skipped
//! when the hashes match.

use std::path::Path;

use tokio_util::sync::CancellationToken;

use glyphsync_core::{config, types::RunOutcome};
use glyphsync_dotnet::{artifact_path, project_path, PackageToolchain};
use glyphsync_git::Vcs;

use crate::error::SyncError;
use crate::{detector, hasher, marker, synchronizer};

/// Inputs for one run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Repository that owns the published package and the hash marker.
    pub package_repo_url: String,
    /// Upstream icon repository.
    pub upstream_repo_url: String,
    /// Library name; names the project file and the packed artifact.
    pub library: String,
    /// Proceed even when the stored and fresh hashes are equal.
    pub force_update: bool,
}

/// Execute one synchronization run.
///
/// Returns [`RunOutcome::BuildFailed`] without error when the package build
/// fails (soft stop): the marker stays untouched and the next scheduled
/// invocation retries from scratch.
pub async fn run<V: Vcs, T: PackageToolchain>(
    vcs: &V,
    toolchain: &T,
    opts: &RunOptions,
    cancel: &CancellationToken,
) -> Result<RunOutcome, SyncError> {
    let package_repo = vcs.clone_to_temp(&opts.package_repo_url, cancel).await?;
    let upstream = vcs.clone_to_temp(&opts.upstream_repo_url, cancel).await?;
    let upstream_icons = upstream.path().join(config::UPSTREAM_ICONS_DIR);
    let resource_dir = package_repo.path().join(config::RESOURCE_DIR);

    let decision = detector::check(
        package_repo.path(),
        &upstream_icons,
        opts.force_update,
        cancel,
    )?;
    if !decision.update_needed {
        return Ok(RunOutcome::UpToDate);
    }

    let icons_copied = synchronizer::sync_icons(&upstream_icons, &resource_dir, cancel)?;

    let project = project_path(package_repo.path(), &opts.library);
    toolchain.restore(&project, cancel).await?;
    if !toolchain.build(&project, cancel).await? {
        // Soft stop, not an error: the marker stays at its old value, so the
        // next scheduled run detects the same difference and retries.
        tracing::error!("build was not successful, exiting");
        return Ok(RunOutcome::BuildFailed);
    }

    let version = config::build_version()?;
    toolchain
        .pack(&project, &version, package_repo.path(), cancel)
        .await?;

    let api_key = config::nuget_token()?;
    let package = artifact_path(package_repo.path(), &opts.library, &version);
    toolchain.nuget_push(&package, &api_key, cancel).await?;

    let new_hash = match decision.new_hash {
        Some(hash) => hash,
        // First run: the marker was missing, so detection skipped the hash.
        // Compute it now from the same tree that was just synchronized.
        None => hasher::hash_directory(&upstream_icons, cancel)?,
    };
    commit_marker(vcs, package_repo.path(), &new_hash, cancel).await?;

    Ok(RunOutcome::Published {
        icons_copied,
        version,
    })
}

/// Write the new marker, then commit and push if that left the repository
/// dirty. A clean repository after the write is a no-op.
async fn commit_marker<V: Vcs>(
    vcs: &V,
    repo: &Path,
    hash: &str,
    cancel: &CancellationToken,
) -> Result<(), SyncError> {
    marker::write(repo, hash)?;
    let path = marker::marker_path(repo);
    vcs.add_if_not_tracked(repo, &path, cancel).await?;

    if vcs.is_dirty(repo, cancel).await? {
        tracing::info!("changes detected in the repository, committing and pushing");
        let (name, email) = config::commit_author()?;
        let (username, token) = config::push_credentials()?;
        vcs.commit(repo, config::COMMIT_MESSAGE, &name, &email, cancel)
            .await?;
        vcs.push(repo, &username, &token, cancel).await?;
    } else {
        tracing::info!("there are no changes to commit");
    }
    Ok(())
}
