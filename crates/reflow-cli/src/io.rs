//! File reads and atomic write-back with locking

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;

use fs2::FileExt;

use crate::error::{CliError, Result};

pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| CliError::io(path, e))
}

/// Replace the contents of `path` with `content`.
///
/// Writes a sibling temp file under an exclusive advisory lock, syncs it,
/// then renames it over the target. Readers see either the old or the new
/// file, never a partial one.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let file_name = path
        .file_name()
        .ok_or_else(|| CliError::user(format!("Not a file path: {}", path.display())))?;
    let temp_path = path.with_file_name(format!(
        ".{}.{}.tmp",
        file_name.to_string_lossy(),
        std::process::id()
    ));

    let temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| CliError::io(&temp_path, e))?;

    let replaced = fill_and_rename(temp_file, &temp_path, path, content);
    if replaced.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    replaced
}

fn fill_and_rename(mut temp_file: File, temp_path: &Path, path: &Path, content: &str) -> Result<()> {
    temp_file
        .lock_exclusive()
        .map_err(|_| CliError::LockFailed {
            path: path.to_path_buf(),
        })?;

    temp_file
        .write_all(content.as_bytes())
        .and_then(|()| temp_file.sync_all())
        .map_err(|e| CliError::io(temp_path, e))?;
    // The lock goes with the handle.
    drop(temp_file);

    fs::rename(temp_path, path).map_err(|e| CliError::io(path, e))
}
