//! Quote store: durable CRUD over per-record files plus the aggregate
//! export.
//!
//! Layout of the storage directory:
//! ```text
//! quotes/
//! ├── 1.json        # one file per quote
//! ├── 2.json
//! ├── last_id.txt   # allocator counter, plain text
//! └── data.json     # aggregate export, rebuilt on demand
//! ```

use std::fs;
use std::path::PathBuf;

use quotekeeper_models::{Quote, QuoteId};

use crate::allocator::{FileIdAllocator, IdAllocator};
use crate::atomic::{atomic_write_json, read_json};
use crate::error::{Result, StoreError};
use crate::scan::QuoteScan;

/// Name of the allocator's counter file inside the storage directory.
const COUNTER_FILE: &str = "last_id.txt";

/// Name of the aggregate export file inside the storage directory.
const EXPORT_FILE: &str = "data.json";

/// Manages persistence of quote records in a single storage directory.
///
/// The allocator is a collaborator injected behind [`IdAllocator`]; the
/// store enforces that every inserted identifier is exactly the one the
/// allocator would hand out next.
pub struct QuoteStore {
    dir: PathBuf,
    allocator: Box<dyn IdAllocator>,
}

impl QuoteStore {
    /// Opens a store over the given directory with the file-backed
    /// allocator stored alongside the records.
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let allocator = Box::new(FileIdAllocator::new(dir.join(COUNTER_FILE)));
        Self { dir, allocator }
    }

    /// Opens a store with a caller-supplied allocator.
    pub fn with_allocator(dir: impl Into<PathBuf>, allocator: Box<dyn IdAllocator>) -> Self {
        Self {
            dir: dir.into(),
            allocator,
        }
    }

    /// Returns the path to a specific record file.
    fn record_path(&self, id: QuoteId) -> PathBuf {
        self.dir.join(format!("{}.json", id))
    }

    /// Returns the path of the aggregate export file.
    pub fn export_path(&self) -> PathBuf {
        self.dir.join(EXPORT_FILE)
    }

    /// Returns the last identifier issued by the allocator (0 when empty).
    pub fn last_id(&self) -> Result<u64> {
        self.allocator.peek_last()
    }

    /// Returns the identifier the next insert must carry.
    pub fn next_id(&self) -> Result<QuoteId> {
        Ok(QuoteId::new(self.last_id()? + 1))
    }

    /// Inserts a new record.
    ///
    /// The record's identifier must be exactly `last_id() + 1`; the caller
    /// obtains it from [`next_id`](Self::next_id) immediately before the
    /// insert. The sequence check runs before any file is touched, so a
    /// violation leaves no partial file behind.
    pub fn insert(&self, quote: &Quote) -> Result<()> {
        let expected = self.last_id()? + 1;
        if quote.id.value() != expected {
            return Err(StoreError::OutOfSequence {
                expected,
                got: quote.id.value(),
            });
        }

        atomic_write_json(&self.record_path(quote.id), quote)?;
        self.allocator.advance(1)
    }

    /// Deletes a record by identifier.
    ///
    /// Deleting the current maximum rolls the allocator back so the
    /// identifier is reissued; deleting a non-maximum leaves a hole in the
    /// sequence and the counter untouched. Deleting a nonexistent id is
    /// not an error.
    pub fn delete(&self, id: QuoteId) -> Result<()> {
        if id.value() == self.last_id()? {
            self.allocator.advance(-1)?;
        }

        let path = self.record_path(id);
        if path.exists() {
            fs::remove_file(&path).map_err(|source| StoreError::Write { path, source })?;
        }
        Ok(())
    }

    /// Overwrites a record's author and content in place. The identifier
    /// never changes.
    pub fn update(
        &self,
        quote: &mut Quote,
        author: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<()> {
        quote.update(author, content);
        atomic_write_json(&self.record_path(quote.id), quote)
    }

    /// Opens a fresh scan over the record files.
    pub fn scan(&self) -> Result<QuoteScan> {
        QuoteScan::new(&self.dir)
    }

    /// Loads every record, sorted by identifier ascending.
    ///
    /// Directory enumeration order is not deterministic across
    /// filesystems, so the store sorts explicitly instead of letting
    /// callers inherit whatever the filesystem yields.
    pub fn select_all(&self) -> Result<Vec<Quote>> {
        let mut quotes = self.scan()?.collect::<Result<Vec<_>>>()?;
        quotes.sort_by_key(|q| q.id);
        Ok(quotes)
    }

    /// Loads a record by identifier via direct path lookup, no scan.
    pub fn select_by_id(&self, id: QuoteId) -> Result<Quote> {
        let path = self.record_path(id);
        if !path.exists() {
            return Err(StoreError::NotFound { id });
        }
        read_json(&path)
    }

    /// Rebuilds the aggregate export from scratch: every current record,
    /// sorted by identifier, serialized as one JSON array. Overwrites any
    /// previous export and returns its path.
    pub fn build_export(&self) -> Result<PathBuf> {
        let quotes = self.select_all()?;
        let path = self.export_path();
        atomic_write_json(&path, &quotes)?;
        Ok(path)
    }
}
