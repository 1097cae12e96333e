//! Identifier allocation.
//!
//! The allocator tracks the highest identifier issued so far as a single
//! persisted counter. It is consulted rather than recomputed from a scan of
//! the record files, so the store can hand out the next identifier in O(1).

use std::cell::Cell;
use std::fs;
use std::path::PathBuf;

use crate::atomic::atomic_write;
use crate::error::{Result, StoreError};

/// Hands out sequential quote identifiers.
///
/// The store is injected with an allocator rather than reaching for a
/// global counter; `peek_last` and `advance` are the whole contract.
pub trait IdAllocator {
    /// Returns the last-issued identifier, or 0 when nothing has been
    /// issued yet.
    fn peek_last(&self) -> Result<u64>;

    /// Adds `delta` to the counter and persists it. +1 on insert, -1 when
    /// the current maximum is deleted.
    fn advance(&self, delta: i64) -> Result<()>;
}

/// Allocator backed by a plain-text counter file.
pub struct FileIdAllocator {
    path: PathBuf,
}

impl FileIdAllocator {
    /// Creates an allocator persisting its counter at the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl IdAllocator for FileIdAllocator {
    fn peek_last(&self) -> Result<u64> {
        // Absent counter file means an empty store, not an error.
        if !self.path.exists() {
            return Ok(0);
        }

        let raw = fs::read_to_string(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;

        raw.trim().parse::<u64>().map_err(|e| StoreError::Counter {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }

    fn advance(&self, delta: i64) -> Result<()> {
        let current = self.peek_last()?;
        let next = current
            .checked_add_signed(delta)
            .ok_or_else(|| StoreError::Counter {
                path: self.path.clone(),
                reason: format!("cannot advance {} by {}", current, delta),
            })?;

        atomic_write(&self.path, next.to_string().as_bytes())
    }
}

/// In-memory allocator for tests and ephemeral stores.
pub struct MemoryIdAllocator {
    last: Cell<u64>,
}

impl MemoryIdAllocator {
    /// Creates an allocator starting from zero.
    pub fn new() -> Self {
        Self { last: Cell::new(0) }
    }
}

impl Default for MemoryIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdAllocator for MemoryIdAllocator {
    fn peek_last(&self) -> Result<u64> {
        Ok(self.last.get())
    }

    fn advance(&self, delta: i64) -> Result<()> {
        let next = self
            .last
            .get()
            .checked_add_signed(delta)
            .ok_or_else(|| StoreError::Counter {
                path: PathBuf::from("<memory>"),
                reason: format!("cannot advance {} by {}", self.last.get(), delta),
            })?;
        self.last.set(next);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_allocator_empty_store_is_zero() {
        let dir = tempdir().unwrap();
        let alloc = FileIdAllocator::new(dir.path().join("last_id.txt"));

        assert_eq!(alloc.peek_last().unwrap(), 0);
    }

    #[test]
    fn test_file_allocator_advance_persists() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("last_id.txt");
        let alloc = FileIdAllocator::new(&path);

        alloc.advance(1).unwrap();
        alloc.advance(1).unwrap();

        assert_eq!(alloc.peek_last().unwrap(), 2);
        assert_eq!(fs::read_to_string(&path).unwrap(), "2");
    }

    #[test]
    fn test_file_allocator_rollback() {
        let dir = tempdir().unwrap();
        let alloc = FileIdAllocator::new(dir.path().join("last_id.txt"));

        alloc.advance(1).unwrap();
        alloc.advance(-1).unwrap();

        assert_eq!(alloc.peek_last().unwrap(), 0);
    }

    #[test]
    fn test_file_allocator_survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("last_id.txt");

        FileIdAllocator::new(&path).advance(3).unwrap();

        let reopened = FileIdAllocator::new(&path);
        assert_eq!(reopened.peek_last().unwrap(), 3);
    }

    #[test]
    fn test_file_allocator_tolerates_trailing_newline() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("last_id.txt");
        fs::write(&path, "5\n").unwrap();

        let alloc = FileIdAllocator::new(&path);
        assert_eq!(alloc.peek_last().unwrap(), 5);
    }

    #[test]
    fn test_file_allocator_corrupt_counter() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("last_id.txt");
        fs::write(&path, "not a number").unwrap();

        let alloc = FileIdAllocator::new(&path);
        assert!(matches!(alloc.peek_last(), Err(StoreError::Counter { .. })));
    }

    #[test]
    fn test_file_allocator_underflow() {
        let dir = tempdir().unwrap();
        let alloc = FileIdAllocator::new(dir.path().join("last_id.txt"));

        assert!(matches!(alloc.advance(-1), Err(StoreError::Counter { .. })));
    }

    #[test]
    fn test_memory_allocator() {
        let alloc = MemoryIdAllocator::new();

        assert_eq!(alloc.peek_last().unwrap(), 0);
        alloc.advance(1).unwrap();
        assert_eq!(alloc.peek_last().unwrap(), 1);
        alloc.advance(-1).unwrap();
        assert_eq!(alloc.peek_last().unwrap(), 0);
    }
}
