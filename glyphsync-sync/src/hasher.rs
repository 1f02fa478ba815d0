//! Deterministic recursive directory hashing.
//!
//! One SHA-256 over every file's repository-relative path and content,
//! visited in sorted path order. Stable across runs for unchanged content;
//! renames, additions, removals and edits all change the digest. The digest
//! is treated as an opaque string everywhere else.

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tokio_util::sync::CancellationToken;

use crate::error::{io_err, SyncError};

/// Hash the directory tree rooted at `dir`.
pub fn hash_directory(dir: &Path, cancel: &CancellationToken) -> Result<String, SyncError> {
    let mut files = Vec::new();
    collect_files(dir, &mut files)?;
    files.sort();

    let mut hasher = Sha256::new();
    for path in &files {
        if cancel.is_cancelled() {
            return Err(SyncError::Cancelled);
        }
        let rel = path.strip_prefix(dir).unwrap_or(path);
        hasher.update(rel.to_string_lossy().as_bytes());
        hasher.update([0u8]);
        let contents = std::fs::read(path).map_err(|e| io_err(path, e))?;
        hasher.update(&contents);
    }
    Ok(hex::encode(hasher.finalize()))
}

fn collect_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), SyncError> {
    let entries = std::fs::read_dir(dir).map_err(|e| io_err(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        if path.is_dir() {
            collect_files(&path, out)?;
        } else {
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

    #[test]
    fn same_content_hashes_identically_across_trees() {
        let cancel = CancellationToken::new();
        let a = TempDir::new().unwrap();
        let b = TempDir::new().unwrap();
        for dir in [a.path(), b.path()] {
            write(dir, "arrow.svg", "<svg>arrow</svg>");
            write(dir, "nested/star.svg", "<svg>star</svg>");
        }

        assert_eq!(
            hash_directory(a.path(), &cancel).unwrap(),
            hash_directory(b.path(), &cancel).unwrap()
        );
    }

    #[test]
    fn creation_order_does_not_matter() {
        let cancel = CancellationToken::new();
        let a = TempDir::new().unwrap();
        write(a.path(), "a.svg", "first");
        write(a.path(), "b.svg", "second");

        let b = TempDir::new().unwrap();
        write(b.path(), "b.svg", "second");
        write(b.path(), "a.svg", "first");

        assert_eq!(
            hash_directory(a.path(), &cancel).unwrap(),
            hash_directory(b.path(), &cancel).unwrap()
        );
    }

    #[test]
    fn edited_content_changes_the_hash() {
        let cancel = CancellationToken::new();
        let dir = TempDir::new().unwrap();
        write(dir.path(), "arrow.svg", "<svg>v1</svg>");
        let before = hash_directory(dir.path(), &cancel).unwrap();

        write(dir.path(), "arrow.svg", "<svg>v2</svg>");
        let after = hash_directory(dir.path(), &cancel).unwrap();

        assert_ne!(before, after);
    }

    #[test]
    fn renamed_file_changes_the_hash() {
        let cancel = CancellationToken::new();
        let a = TempDir::new().unwrap();
        write(a.path(), "old.svg", "same");
        let b = TempDir::new().unwrap();
        write(b.path(), "new.svg", "same");

        assert_ne!(
            hash_directory(a.path(), &cancel).unwrap(),
            hash_directory(b.path(), &cancel).unwrap()
        );
    }

    #[test]
    fn cancellation_is_observed_between_files() {
        let cancel = CancellationToken::new();
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a.svg", "a");
        cancel.cancel();

        assert!(matches!(
            hash_directory(dir.path(), &cancel),
            Err(SyncError::Cancelled)
        ));
    }
}
