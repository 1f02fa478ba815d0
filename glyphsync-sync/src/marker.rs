//! Hash marker persistence — `hash.txt` at the package repository root.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use glyphsync_core::config;

use crate::error::{io_err, SyncError};

/// Path of the marker inside the package repository.
pub fn marker_path(repo: &Path) -> PathBuf {
    repo.join(config::HASH_MARKER_FILE)
}

/// Read the stored hash.
///
/// A missing marker is `Ok(None)` — the first-run signal, not an error.
pub fn read(repo: &Path) -> Result<Option<String>, SyncError> {
    let path = marker_path(repo);
    match std::fs::read_to_string(&path) {
        Ok(contents) => Ok(Some(contents.trim().to_string())),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(io_err(path, e)),
    }
}

/// Replace the marker with `hash`, deleting any previous marker first.
pub fn write(repo: &Path, hash: &str) -> Result<(), SyncError> {
    let path = marker_path(repo);
    match std::fs::remove_file(&path) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(io_err(&path, e)),
    }
    std::fs::write(&path, hash).map_err(|e| io_err(&path, e))
}
