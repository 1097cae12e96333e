//! Directory scan over record files.

use std::fs;
use std::path::{Path, PathBuf};

use quotekeeper_models::Quote;

use crate::atomic::read_json;
use crate::error::{Result, StoreError};

/// Returns the record identifier encoded in a file name, if the file looks
/// like a record (`{digits}.json`). Filters out `last_id.txt`, `data.json`
/// and any stray files in the storage directory.
pub(crate) fn record_file_id(path: &Path) -> Option<u64> {
    if path.extension()? != "json" {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    if stem.is_empty() || !stem.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    stem.parse::<u64>().ok()
}

/// A lazy, finite, restartable scan over the record files of a storage
/// directory, yielding deserialized quotes in filesystem enumeration order.
///
/// Restarting means creating a new scan; each scan reads the directory
/// afresh. A missing directory yields an empty scan. Consumers that need a
/// deterministic order sort the drained records by id.
pub struct QuoteScan {
    dir: PathBuf,
    entries: Option<fs::ReadDir>,
}

impl QuoteScan {
    /// Opens a scan over the given storage directory.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        if !dir.exists() {
            return Ok(Self { dir, entries: None });
        }

        let entries = fs::read_dir(&dir).map_err(|source| StoreError::Read {
            path: dir.clone(),
            source,
        })?;

        Ok(Self {
            dir,
            entries: Some(entries),
        })
    }
}

impl Iterator for QuoteScan {
    type Item = Result<Quote>;

    fn next(&mut self) -> Option<Self::Item> {
        let dir = self.dir.clone();
        let entries = self.entries.as_mut()?;

        loop {
            let entry = match entries.next()? {
                Ok(entry) => entry,
                Err(source) => return Some(Err(StoreError::Read { path: dir, source })),
            };

            let path = entry.path();
            if record_file_id(&path).is_some() {
                return Some(read_json(&path));
            }
        }
    }
}
