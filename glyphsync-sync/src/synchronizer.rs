//! Full-replace icon synchronization into the package resource directory.
//!
//! The destination is cleared before copying, so icons renamed or removed
//! upstream never survive a sync. Upstream directory structure is discarded:
//! every icon lands in the destination flattened by filename.

use std::path::{Path, PathBuf};

use tokio_util::sync::CancellationToken;

use glyphsync_core::config;

use crate::error::{io_err, SyncError};

/// Replace the contents of `resource_dir` with every `.svg` file found
/// recursively under `upstream_icons`. Returns the number of files copied.
///
/// Cancellation is checked before each copy; a cancelled run may leave the
/// destination partially replaced.
pub fn sync_icons(
    upstream_icons: &Path,
    resource_dir: &Path,
    cancel: &CancellationToken,
) -> Result<usize, SyncError> {
    std::fs::create_dir_all(resource_dir).map_err(|e| io_err(resource_dir, e))?;
    clear_directory(resource_dir)?;

    let mut icons = Vec::new();
    collect_by_extension(upstream_icons, config::ICON_EXTENSION, &mut icons)?;
    icons.sort();

    let mut copied = 0;
    for src in &icons {
        if cancel.is_cancelled() {
            return Err(SyncError::Cancelled);
        }
        let Some(name) = src.file_name() else {
            continue;
        };
        // Duplicate basenames across upstream subdirectories collapse here;
        // the last copy wins.
        let dest = resource_dir.join(name);
        std::fs::copy(src, &dest).map_err(|e| io_err(src, e))?;
        copied += 1;
    }

    tracing::info!("copied {copied} icons to {}", resource_dir.display());
    Ok(copied)
}

/// Delete everything inside `dir`, leaving `dir` itself in place.
fn clear_directory(dir: &Path) -> Result<(), SyncError> {
    let entries = std::fs::read_dir(dir).map_err(|e| io_err(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        if path.is_dir() {
            std::fs::remove_dir_all(&path).map_err(|e| io_err(&path, e))?;
        } else {
            std::fs::remove_file(&path).map_err(|e| io_err(&path, e))?;
        }
    }
    Ok(())
}

fn collect_by_extension(
    dir: &Path,
    extension: &str,
    out: &mut Vec<PathBuf>,
) -> Result<(), SyncError> {
    let entries = std::fs::read_dir(dir).map_err(|e| io_err(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        if path.is_dir() {
            collect_by_extension(&path, extension, out)?;
        } else if path.extension().is_some_and(|ext| ext == extension) {
            out.push(path);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, rel: &str, contents: &str) {
        let path = dir.join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, contents).unwrap();
    }

    fn names_in(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn copies_icons_flattened_by_filename() {
        let cancel = CancellationToken::new();
        let upstream = TempDir::new().unwrap();
        write(upstream.path(), "arrow.svg", "<svg>arrow</svg>");
        write(upstream.path(), "shapes/star.svg", "<svg>star</svg>");
        let dest = TempDir::new().unwrap();

        let copied = sync_icons(upstream.path(), dest.path(), &cancel).unwrap();

        assert_eq!(copied, 2);
        assert_eq!(names_in(dest.path()), vec!["arrow.svg", "star.svg"]);
    }

    #[test]
    fn stale_destination_contents_are_removed() {
        let cancel = CancellationToken::new();
        let upstream = TempDir::new().unwrap();
        write(upstream.path(), "arrow.svg", "<svg/>");
        let dest = TempDir::new().unwrap();
        write(dest.path(), "removed-upstream.svg", "<svg/>");
        write(dest.path(), "leftover/deep.svg", "<svg/>");

        sync_icons(upstream.path(), dest.path(), &cancel).unwrap();

        assert_eq!(names_in(dest.path()), vec!["arrow.svg"]);
    }

    #[test]
    fn non_icon_files_are_ignored() {
        let cancel = CancellationToken::new();
        let upstream = TempDir::new().unwrap();
        write(upstream.path(), "arrow.svg", "<svg/>");
        write(upstream.path(), "README.md", "docs");
        write(upstream.path(), "meta/arrow.json", "{}");
        let dest = TempDir::new().unwrap();

        let copied = sync_icons(upstream.path(), dest.path(), &cancel).unwrap();

        assert_eq!(copied, 1);
        assert_eq!(names_in(dest.path()), vec!["arrow.svg"]);
    }

    #[test]
    fn missing_destination_directory_is_created() {
        let cancel = CancellationToken::new();
        let upstream = TempDir::new().unwrap();
        write(upstream.path(), "arrow.svg", "<svg/>");
        let root = TempDir::new().unwrap();
        let dest = root.path().join("src").join("Resources");

        sync_icons(upstream.path(), &dest, &cancel).unwrap();

        assert!(dest.join("arrow.svg").exists());
    }

    // Known collision risk: upstream subdirectories may carry duplicate
    // basenames, and flattening silently keeps the last copy in sort order.
    #[test]
    fn duplicate_basenames_collapse_to_the_last_copy() {
        let cancel = CancellationToken::new();
        let upstream = TempDir::new().unwrap();
        write(upstream.path(), "a/icon.svg", "from-a");
        write(upstream.path(), "b/icon.svg", "from-b");
        let dest = TempDir::new().unwrap();

        let copied = sync_icons(upstream.path(), dest.path(), &cancel).unwrap();

        // Both copies happen, but only one file survives.
        assert_eq!(copied, 2);
        assert_eq!(names_in(dest.path()), vec!["icon.svg"]);
        let contents = std::fs::read_to_string(dest.path().join("icon.svg")).unwrap();
        assert_eq!(contents, "from-b");
    }

    #[test]
    fn cancellation_before_the_first_copy_leaves_nothing_behind() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let upstream = TempDir::new().unwrap();
        write(upstream.path(), "arrow.svg", "<svg/>");
        let dest = TempDir::new().unwrap();

        assert!(matches!(
            sync_icons(upstream.path(), dest.path(), &cancel),
            Err(SyncError::Cancelled)
        ));
        assert!(names_in(dest.path()).is_empty());
    }
}
