//! # jokebox storage
//!
//! Fixed-size-record slot storage for jokebox.
//!
//! A store is a flat sequence of slots, each `record_size` bytes wide, with
//! slot `k` living at byte offset `k * record_size`. There is no header,
//! footer, or per-record metadata in the file itself - the slot count is
//! inferred entirely from the file length.
//!
//! ## Design Principles
//!
//! - Stores are opaque byte stores - they do not interpret record contents
//! - Duplicate detection is a byte-exact linear scan (`index_of`), which is
//!   deliberate: the write ring above this layer is capped at 11 slots and
//!   records are never deleted
//! - Must be `Send + Sync` so a background writer and a foreground reader
//!   can share one store
//!
//! ## Available Stores
//!
//! - [`MemoryStore`] - For testing and ephemeral storage
//! - [`FileStore`] - For persistent storage using OS file APIs
//!
//! ## Example
//!
//! ```rust
//! use jokebox_storage::{MemoryStore, RecordStore};
//!
//! let store = MemoryStore::new(4);
//! store.write(0, b"abcd").unwrap();
//! assert_eq!(store.index_of(b"abcd").unwrap(), Some(0));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod file;
mod memory;
mod store;

pub use error::{StorageError, StorageResult};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use store::RecordStore;
