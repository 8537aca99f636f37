//! File-based record store for persistent storage.

use crate::error::{StorageError, StorageResult};
use crate::store::RecordStore;
use parking_lot::RwLock;
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// A file-backed record store.
///
/// Holds one file handle opened for read and write, creating the file if it
/// is absent. All slot offsets are computed as `slot * record_size`.
///
/// # Thread Safety
///
/// The handle is guarded by an internal lock, so a store can be shared
/// across threads (e.g. a background fetch loop writing while the UI thread
/// reads). A reader may still observe a slot mid-overwrite; there is one
/// lock per operation, not per slot.
///
/// # Example
///
/// ```no_run
/// use jokebox_storage::{FileStore, RecordStore};
/// use std::path::Path;
///
/// let store = FileStore::open(Path::new("temp.dat"), 600).unwrap();
/// store.write(0, &vec![0u8; 600]).unwrap();
/// assert_eq!(store.len().unwrap(), 1);
/// ```
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    file: RwLock<File>,
    record_size: usize,
}

impl FileStore {
    /// Opens or creates a record file at the given path.
    ///
    /// The record size is fixed for the lifetime of this store instance;
    /// every slot in the file is interpreted at this width.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::InvalidRecordSize`] if `record_size` is zero,
    /// or an I/O error if the file cannot be opened or created.
    pub fn open(path: &Path, record_size: usize) -> StorageResult<Self> {
        if record_size == 0 {
            return Err(StorageError::InvalidRecordSize { size: record_size });
        }

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)?;

        Ok(Self {
            path: path.to_path_buf(),
            file: RwLock::new(file),
            record_size,
        })
    }

    /// Opens or creates a record file, creating parent directories if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if directories cannot be created or the file cannot
    /// be opened.
    pub fn open_with_create_dirs(path: &Path, record_size: usize) -> StorageResult<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Self::open(path, record_size)
    }

    /// Returns the path to the underlying file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for FileStore {
    fn record_size(&self) -> usize {
        self.record_size
    }

    fn len(&self) -> StorageResult<u64> {
        let file = self.file.read();
        let bytes = file.metadata()?.len();
        Ok(bytes / self.record_size as u64)
    }

    fn read(&self, slot: u64) -> StorageResult<Vec<u8>> {
        let mut file = self.file.write();
        file.seek(SeekFrom::Start(slot * self.record_size as u64))?;

        // Short final slot: return whatever is available, unpadded.
        let mut buffer = vec![0u8; self.record_size];
        let mut filled = 0;
        while filled < self.record_size {
            let n = file.read(&mut buffer[filled..])?;
            if n == 0 {
                break;
            }
            filled += n;
        }
        buffer.truncate(filled);

        Ok(buffer)
    }

    fn write(&self, slot: u64, data: &[u8]) -> StorageResult<()> {
        let mut file = self.file.write();
        file.seek(SeekFrom::Start(slot * self.record_size as u64))?;
        file.write_all(data)?;
        Ok(())
    }

    fn sync(&self) -> StorageResult<()> {
        let file = self.file.write();
        file.sync_all()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn open_creates_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("jokes.dat");

        let store = FileStore::open(&path, 30).unwrap();
        assert_eq!(store.len().unwrap(), 0);
        assert!(path.exists());
    }

    #[test]
    fn open_rejects_zero_record_size() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("jokes.dat");

        let result = FileStore::open(&path, 0);
        assert!(matches!(
            result,
            Err(StorageError::InvalidRecordSize { size: 0 })
        ));
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("jokes.dat");

        let store = FileStore::open(&path, 4).unwrap();
        store.write(0, b"aaaa").unwrap();
        store.write(1, b"bbbb").unwrap();

        assert_eq!(store.len().unwrap(), 2);
        assert_eq!(store.read(0).unwrap(), b"aaaa");
        assert_eq!(store.read(1).unwrap(), b"bbbb");
    }

    #[test]
    fn read_past_end_is_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("jokes.dat");

        let store = FileStore::open(&path, 4).unwrap();
        store.write(0, b"aaaa").unwrap();

        assert_eq!(store.read(7).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn short_final_slot_is_returned_unpadded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("jokes.dat");

        // Externally truncated file: 6 bytes with a 4-byte record size.
        std::fs::write(&path, b"aaaabb").unwrap();

        let store = FileStore::open(&path, 4).unwrap();
        assert_eq!(store.len().unwrap(), 1);
        assert_eq!(store.read(0).unwrap(), b"aaaa");
        assert_eq!(store.read(1).unwrap(), b"bb");
    }

    #[test]
    fn write_beyond_end_zero_fills_gap() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("jokes.dat");

        let store = FileStore::open(&path, 4).unwrap();
        store.write(2, b"cccc").unwrap();

        assert_eq!(store.len().unwrap(), 3);
        assert_eq!(store.read(0).unwrap(), vec![0u8; 4]);
        assert_eq!(store.read(1).unwrap(), vec![0u8; 4]);
        assert_eq!(store.read(2).unwrap(), b"cccc");
    }

    #[test]
    fn overwrite_replaces_slot_contents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("jokes.dat");

        let store = FileStore::open(&path, 4).unwrap();
        store.write(0, b"aaaa").unwrap();
        store.write(0, b"zzzz").unwrap();

        assert_eq!(store.len().unwrap(), 1);
        assert_eq!(store.read(0).unwrap(), b"zzzz");
    }

    #[test]
    fn index_of_finds_first_match() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("jokes.dat");

        let store = FileStore::open(&path, 4).unwrap();
        store.write(0, b"aaaa").unwrap();
        store.write(1, b"bbbb").unwrap();
        store.write(2, b"bbbb").unwrap();

        assert_eq!(store.index_of(b"bbbb").unwrap(), Some(1));
        assert_eq!(store.index_of(b"cccc").unwrap(), None);
    }

    #[test]
    fn index_of_on_empty_store_is_none() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("jokes.dat");

        let store = FileStore::open(&path, 4).unwrap();
        assert_eq!(store.index_of(b"aaaa").unwrap(), None);
        assert_eq!(store.index_of(b"").unwrap(), None);
    }

    #[test]
    fn contains_after_write() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("jokes.dat");

        let store = FileStore::open(&path, 4).unwrap();
        assert!(!store.contains(b"aaaa").unwrap());

        store.write(3, b"aaaa").unwrap();
        assert!(store.contains(b"aaaa").unwrap());
    }

    #[test]
    fn swap_exchanges_slots() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("jokes.dat");

        let store = FileStore::open(&path, 4).unwrap();
        store.write(0, b"aaaa").unwrap();
        store.write(1, b"bbbb").unwrap();

        store.swap(0, 1).unwrap();
        assert_eq!(store.read(0).unwrap(), b"bbbb");
        assert_eq!(store.read(1).unwrap(), b"aaaa");
    }

    #[test]
    fn double_swap_restores_original_contents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("jokes.dat");

        let store = FileStore::open(&path, 4).unwrap();
        store.write(0, b"aaaa").unwrap();
        store.write(1, b"bbbb").unwrap();

        store.swap(0, 1).unwrap();
        store.swap(0, 1).unwrap();
        assert_eq!(store.read(0).unwrap(), b"aaaa");
        assert_eq!(store.read(1).unwrap(), b"bbbb");
    }

    #[test]
    fn swap_same_slot_is_noop() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("jokes.dat");

        let store = FileStore::open(&path, 4).unwrap();
        store.write(0, b"aaaa").unwrap();

        store.swap(0, 0).unwrap();
        assert_eq!(store.read(0).unwrap(), b"aaaa");
    }

    #[test]
    fn persistence_across_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("jokes.dat");

        {
            let store = FileStore::open(&path, 8).unwrap();
            store.write(0, b"12345678").unwrap();
            store.sync().unwrap();
        }

        {
            let store = FileStore::open(&path, 8).unwrap();
            assert_eq!(store.len().unwrap(), 1);
            assert_eq!(store.read(0).unwrap(), b"12345678");
        }
    }

    #[test]
    fn open_with_create_dirs_makes_parents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("deep").join("jokes.dat");

        let store = FileStore::open_with_create_dirs(&path, 4).unwrap();
        assert_eq!(store.len().unwrap(), 0);
        assert!(path.exists());
    }

    #[test]
    fn path_accessor() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("jokes.dat");

        let store = FileStore::open(&path, 4).unwrap();
        assert_eq!(store.path(), path);
    }
}
