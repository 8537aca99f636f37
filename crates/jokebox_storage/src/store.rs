//! Record store trait definition.

use crate::error::StorageResult;

/// A slot-addressed store of fixed-size records.
///
/// Every slot is `record_size` bytes wide and slot `k` lives at byte offset
/// `k * record_size`. Stores are **opaque byte stores** - the record layout
/// (category header, body, padding) is owned by the codec layer, not here.
///
/// # Invariants
///
/// - `write` never produces a partial slot as long as callers supply exactly
///   `record_size` bytes; a short final slot can only arise from external
///   truncation of the backing file
/// - `read` at or past end of file returns a short (possibly empty) buffer
///   rather than an error, matching read-at-EOF semantics
/// - `index_of` is a byte-exact linear scan from slot 0; at the ring sizes
///   this system uses (11 slots) that is the intended algorithm, not a
///   placeholder for an index
///
/// # Implementors
///
/// - [`super::MemoryStore`] - For testing
/// - [`super::FileStore`] - For persistent storage
pub trait RecordStore: Send + Sync {
    /// Returns the fixed slot width in bytes.
    fn record_size(&self) -> usize;

    /// Returns the number of whole slots currently in the store,
    /// `floor(byte_length / record_size)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage is inaccessible.
    fn len(&self) -> StorageResult<u64>;

    /// Returns `true` if the store holds no complete slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage is inaccessible.
    fn is_empty(&self) -> StorageResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Reads up to `record_size` bytes from the given slot.
    ///
    /// If the slot extends past the end of the store the available bytes are
    /// returned as-is, without padding; a slot entirely past the end yields
    /// an empty buffer. The store does not bound-check `slot`.
    ///
    /// # Errors
    ///
    /// Returns an error if the seek or read fails.
    fn read(&self, slot: u64) -> StorageResult<Vec<u8>>;

    /// Writes `data` verbatim at the given slot offset.
    ///
    /// Existing bytes at that slot are overwritten. Writing past the current
    /// end leaves any intervening gap implicitly zero-filled by the backing
    /// medium. The caller is responsible for supplying exactly `record_size`
    /// bytes to preserve slot alignment.
    ///
    /// # Errors
    ///
    /// Returns an error if the seek or write fails.
    fn write(&self, slot: u64, data: &[u8]) -> StorageResult<()>;

    /// Exchanges the contents of two slots.
    ///
    /// Not atomic: the store is updated with two separate writes, and a
    /// crash between them leaves slot `j` holding old-`i` content while
    /// slot `i` is still unchanged. No caller in this system relies on
    /// `swap` for recovery-critical data.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the underlying reads or writes fail.
    fn swap(&self, i: u64, j: u64) -> StorageResult<()> {
        let data_i = self.read(i)?;
        let data_j = self.read(j)?;

        self.write(j, &data_i)?;
        self.write(i, &data_j)?;
        Ok(())
    }

    /// Returns the first slot whose content equals `target` byte-for-byte,
    /// or `None` if no slot matches (including the empty-store case).
    ///
    /// Linear scan from slot 0; O(slots) per call.
    ///
    /// # Errors
    ///
    /// Returns an error if any slot read fails.
    fn index_of(&self, target: &[u8]) -> StorageResult<Option<u64>> {
        let slots = self.len()?;

        for slot in 0..slots {
            if self.read(slot)? == target {
                return Ok(Some(slot));
            }
        }
        Ok(None)
    }

    /// Returns `true` if any slot holds exactly `target`.
    ///
    /// # Errors
    ///
    /// Returns an error if any slot read fails.
    fn contains(&self, target: &[u8]) -> StorageResult<bool> {
        Ok(self.index_of(target)?.is_some())
    }

    /// Syncs all data to durable storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the sync operation fails.
    fn sync(&self) -> StorageResult<()>;
}
