use crate::models::error::{AppError, Phase};
use camino::Utf8Path;
use std::fs;
use tracing::debug;

/// Removes every immediate entry of `dir`, leaving `dir` itself in place.
/// Files and symlinks are unlinked, directories removed recursively. Links are never followed.
/// Returns the number of entries removed.
pub fn clear_dir(dir: &Utf8Path) -> Result<usize, AppError> {
    let entries = dir.read_dir_utf8().map_err(|e| AppError::io(Phase::Clear, dir, e))?;

    let mut removed = 0;
    for entry in entries {
        let entry = entry.map_err(|e| AppError::io(Phase::Clear, dir, e))?;
        remove_entry(entry.path())?;
        removed += 1;
    }
    Ok(removed)
}

fn remove_entry(path: &Utf8Path) -> Result<(), AppError> {
    let meta = path
        .symlink_metadata()
        .map_err(|e| AppError::io(Phase::Clear, path, e))?;

    let result = if meta.is_dir() {
        debug!("Removing directory {path}");
        fs::remove_dir_all(path)
    } else {
        debug!("Removing {path}");
        remove_file_or_link(path)
    };
    result.map_err(|e| AppError::io(Phase::Clear, path, e))
}

#[cfg(windows)]
fn remove_file_or_link(path: &Utf8Path) -> std::io::Result<()> {
    // Directory symlinks and junctions need remove_dir on Windows.
    fs::remove_file(path).or_else(|e| fs::remove_dir(path).map_err(|_| e))
}

#[cfg(not(windows))]
fn remove_file_or_link(path: &Utf8Path) -> std::io::Result<()> {
    fs::remove_file(path)
}
