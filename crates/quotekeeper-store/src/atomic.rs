//! Atomic file operations for crash-safe persistence.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::{Result, StoreError};

/// Writes data to a file atomically.
///
/// Writes to a temporary file in the target directory first, then renames
/// it over the target path, so the file is never observed in a partially
/// written state even if the process dies mid-write.
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).map_err(|source| StoreError::Directory {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    // Temp file must live in the same directory for the rename to stay on
    // one filesystem.
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut temp_file = tempfile::NamedTempFile::new_in(dir).map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    temp_file.write_all(data).map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    temp_file.flush().map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    temp_file.persist(path).map_err(|e| StoreError::Write {
        path: path.to_path_buf(),
        source: e.error,
    })?;

    Ok(())
}

/// Serializes a value as pretty-printed JSON and writes it atomically.
pub fn atomic_write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    atomic_write(path, json.as_bytes())
}

/// Reads and deserializes JSON from a file.
pub fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let data = fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let value = serde_json::from_str(&data)?;
    Ok(value)
}
