//! In-memory record store for testing.

use crate::error::{StorageError, StorageResult};
use crate::store::RecordStore;
use parking_lot::RwLock;

/// An in-memory record store.
///
/// Stores all slots in a single byte vector and is suitable for:
/// - Unit tests
/// - Integration tests
/// - Ephemeral stores that don't need persistence
///
/// It mirrors [`super::FileStore`] semantics exactly, including short reads
/// at end of store and zero-filled gaps when writing past the end.
///
/// # Example
///
/// ```rust
/// use jokebox_storage::{MemoryStore, RecordStore};
///
/// let store = MemoryStore::new(4);
/// store.write(0, b"test").unwrap();
/// assert_eq!(store.len().unwrap(), 1);
/// ```
#[derive(Debug)]
pub struct MemoryStore {
    data: RwLock<Vec<u8>>,
    record_size: usize,
}

impl MemoryStore {
    /// Creates a new empty in-memory store with the given record size.
    ///
    /// # Panics
    ///
    /// Panics if `record_size` is zero; in-memory stores are constructed
    /// with literal sizes in tests, so this is a programming error rather
    /// than a runtime condition.
    #[must_use]
    pub fn new(record_size: usize) -> Self {
        assert!(record_size > 0, "record size must be nonzero");
        Self {
            data: RwLock::new(Vec::new()),
            record_size,
        }
    }

    /// Creates a store with pre-existing raw bytes.
    ///
    /// Useful for testing short-final-slot and recovery scenarios.
    #[must_use]
    pub fn with_data(record_size: usize, data: Vec<u8>) -> Self {
        assert!(record_size > 0, "record size must be nonzero");
        Self {
            data: RwLock::new(data),
            record_size,
        }
    }

    /// Returns a copy of all raw bytes in the store.
    #[must_use]
    pub fn data(&self) -> Vec<u8> {
        self.data.read().clone()
    }

    /// Clears all data from the store.
    pub fn clear(&self) {
        self.data.write().clear();
    }
}

impl RecordStore for MemoryStore {
    fn record_size(&self) -> usize {
        self.record_size
    }

    fn len(&self) -> StorageResult<u64> {
        Ok(self.data.read().len() as u64 / self.record_size as u64)
    }

    fn read(&self, slot: u64) -> StorageResult<Vec<u8>> {
        let data = self.data.read();
        let offset = slot as usize * self.record_size;

        if offset >= data.len() {
            return Ok(Vec::new());
        }

        let end = (offset + self.record_size).min(data.len());
        Ok(data[offset..end].to_vec())
    }

    fn write(&self, slot: u64, payload: &[u8]) -> StorageResult<()> {
        let offset = slot
            .checked_mul(self.record_size as u64)
            .and_then(|o| usize::try_from(o).ok())
            .ok_or_else(|| {
                StorageError::Io(std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "slot offset overflows addressable memory",
                ))
            })?;

        let mut data = self.data.write();
        let end = offset + payload.len();

        if end > data.len() {
            data.resize(end, 0);
        }
        data[offset..end].copy_from_slice(payload);
        Ok(())
    }

    fn sync(&self) -> StorageResult<()> {
        // Nothing to make durable.
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_store_is_empty() {
        let store = MemoryStore::new(4);
        assert_eq!(store.len().unwrap(), 0);
        assert!(store.is_empty().unwrap());
        assert!(store.data().is_empty());
    }

    #[test]
    #[should_panic(expected = "record size must be nonzero")]
    fn zero_record_size_panics() {
        let _ = MemoryStore::new(0);
    }

    #[test]
    fn write_then_read() {
        let store = MemoryStore::new(4);
        store.write(0, b"aaaa").unwrap();
        store.write(1, b"bbbb").unwrap();

        assert_eq!(store.read(0).unwrap(), b"aaaa");
        assert_eq!(store.read(1).unwrap(), b"bbbb");
        assert_eq!(store.len().unwrap(), 2);
    }

    #[test]
    fn read_past_end_is_empty() {
        let store = MemoryStore::new(4);
        store.write(0, b"aaaa").unwrap();
        assert!(store.read(5).unwrap().is_empty());
    }

    #[test]
    fn gap_write_zero_fills() {
        let store = MemoryStore::new(4);
        store.write(2, b"cccc").unwrap();

        assert_eq!(store.len().unwrap(), 3);
        assert_eq!(store.read(0).unwrap(), vec![0u8; 4]);
        assert_eq!(store.read(2).unwrap(), b"cccc");
    }

    #[test]
    fn short_final_slot_from_seeded_data() {
        let store = MemoryStore::with_data(4, b"aaaabb".to_vec());
        assert_eq!(store.len().unwrap(), 1);
        assert_eq!(store.read(1).unwrap(), b"bb");
    }

    #[test]
    fn index_of_and_contains() {
        let store = MemoryStore::new(4);
        assert_eq!(store.index_of(b"aaaa").unwrap(), None);

        store.write(0, b"aaaa").unwrap();
        store.write(1, b"bbbb").unwrap();

        assert_eq!(store.index_of(b"bbbb").unwrap(), Some(1));
        assert!(store.contains(b"aaaa").unwrap());
        assert!(!store.contains(b"zzzz").unwrap());
    }

    #[test]
    fn swap_and_double_swap() {
        let store = MemoryStore::new(4);
        store.write(0, b"aaaa").unwrap();
        store.write(1, b"bbbb").unwrap();

        store.swap(0, 1).unwrap();
        assert_eq!(store.read(0).unwrap(), b"bbbb");

        store.swap(0, 1).unwrap();
        assert_eq!(store.read(0).unwrap(), b"aaaa");
        assert_eq!(store.read(1).unwrap(), b"bbbb");
    }

    #[test]
    fn clear_empties_store() {
        let store = MemoryStore::new(4);
        store.write(0, b"aaaa").unwrap();
        store.clear();
        assert_eq!(store.len().unwrap(), 0);
    }
}
