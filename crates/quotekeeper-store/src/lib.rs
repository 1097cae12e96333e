//! File-backed persistence for Quotekeeper.
//!
//! Quotes are stored as one JSON file per record in a storage directory,
//! alongside a plain-text identifier counter and a rebuilt-on-demand
//! aggregate export. All file writes go through atomic temp-file-rename
//! operations so no file is ever observed half-written.
//!
//! # Example
//!
//! ```no_run
//! use quotekeeper_models::Quote;
//! use quotekeeper_store::QuoteStore;
//!
//! let store = QuoteStore::open("/home/user/.quotekeeper/quotes");
//!
//! let quote = Quote::new(store.next_id().unwrap(), "Seneca", "Begin at once to live.");
//! store.insert(&quote).unwrap();
//!
//! let loaded = store.select_by_id(quote.id).unwrap();
//! assert_eq!(loaded, quote);
//! ```

pub mod allocator;
pub mod atomic;
pub mod error;
pub mod scan;
pub mod store;

pub use allocator::{FileIdAllocator, IdAllocator, MemoryIdAllocator};
pub use error::{Result, StoreError};
pub use scan::QuoteScan;
pub use store::QuoteStore;
