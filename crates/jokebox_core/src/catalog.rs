//! The catalog: fetch-dedupe-store loop and write-cursor bookkeeping.

use crate::config::Config;
use crate::error::{CoreError, CoreResult};
use crate::joke::Joke;
use jokebox_fetch::{JokeSource, FALLBACK_JOKE};
use jokebox_storage::{FileStore, RecordStore};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Number of slots in the write ring.
///
/// The write cursor ranges over `[0, RING_SLOTS)` and wraps back to slot 0
/// after writing slot 10. Readers may address any slot independently of the
/// ring.
pub const RING_SLOTS: u64 = 11;

/// Coordinates fetching, encoding, duplicate avoidance, and slot-ring
/// writes over a shared record store.
///
/// The write cursor is owned by the catalog instance - there is no hidden
/// process-wide state. It starts at slot 0, advances only on successful
/// writes, wraps after slot 10, and is never persisted; call
/// [`Catalog::reset_cursor`] at the start of a bulk refresh. Consumers that
/// need a shared cursor share the `Catalog` itself.
///
/// The store is held behind an [`Arc`] so a foreground reader can keep
/// reading slots while a background thread drives the fetch loop; the
/// catalog itself is single-writer (`fetch_and_store` takes `&mut self`).
pub struct Catalog<S, J> {
    store: Arc<S>,
    source: J,
    config: Config,
    cursor: u64,
}

impl<J: JokeSource> Catalog<FileStore, J> {
    /// Opens (or creates) a file-backed catalog at `path` with the given
    /// record size.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing file cannot be opened or the record
    /// size is zero.
    pub fn open(path: &Path, record_size: usize, source: J) -> CoreResult<Self> {
        let store = FileStore::open(path, record_size)?;
        Ok(Self::new(Arc::new(store), source, Config::default()))
    }
}

impl<S: RecordStore, J: JokeSource> Catalog<S, J> {
    /// Creates a catalog over an existing store and source.
    pub fn new(store: Arc<S>, source: J, config: Config) -> Self {
        Self {
            store,
            source,
            config,
            cursor: 0,
        }
    }

    /// Returns a handle to the underlying store, for display-side reads.
    #[must_use]
    pub fn store(&self) -> Arc<S> {
        Arc::clone(&self.store)
    }

    /// Returns the slot the next write will land in.
    #[must_use]
    pub fn cursor(&self) -> u64 {
        self.cursor
    }

    /// Resets the write cursor to slot 0.
    ///
    /// Call at the start of a bulk refresh so the ring is rewritten from
    /// the top.
    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
    }

    /// Returns the configured record size.
    #[must_use]
    pub fn record_size(&self) -> usize {
        self.store.record_size()
    }

    /// Returns the number of complete slots currently stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage is inaccessible.
    pub fn len(&self) -> CoreResult<u64> {
        Ok(self.store.len()?)
    }

    /// Returns `true` if no complete slot is stored yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage is inaccessible.
    pub fn is_empty(&self) -> CoreResult<bool> {
        Ok(self.store.is_empty()?)
    }

    /// Reads the raw record bytes at `slot`.
    ///
    /// Short or empty buffers at end of file are returned as-is; see
    /// [`RecordStore::read`].
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    pub fn read(&self, slot: u64) -> CoreResult<Vec<u8>> {
        Ok(self.store.read(slot)?)
    }

    /// Fetches one joke for `category` without storing it.
    ///
    /// # Errors
    ///
    /// Returns a fetch error unless the catalog is configured to substitute
    /// the fallback text.
    pub fn fetch(&self, category: &str) -> CoreResult<Joke> {
        match self.source.fetch(category) {
            Ok(text) => Ok(Joke::new(category, text)),
            Err(err) if self.config.store_fetch_errors => {
                warn!(category, error = %err, "fetch failed, substituting fallback text");
                Ok(Joke::new(category, FALLBACK_JOKE))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Fetches jokes for `category` until one is not already stored, then
    /// writes it at the cursor slot and advances the cursor (wrapping after
    /// slot 10). Returns the slot that was written.
    ///
    /// Duplicate detection is byte-exact over the encoded record, so the
    /// category header and padding participate, not just the joke text.
    /// The loop retries only on duplicates, never on fetch failures.
    ///
    /// # Errors
    ///
    /// Returns an error if a fetch fails (unless configured to store the
    /// fallback text), if encoding or storage fails, or if the configured
    /// duplicate-retry bound is exhausted.
    pub fn fetch_and_store(&mut self, category: &str) -> CoreResult<u64> {
        let mut attempts: u32 = 0;

        let record = loop {
            let joke = self.fetch(category)?;
            let record = joke.to_record(self.store.record_size())?;

            if !self.store.contains(&record)? {
                break record;
            }

            attempts += 1;
            debug!(category, attempts, "duplicate joke, refetching");

            if let Some(max) = self.config.max_duplicate_retries {
                if attempts >= max {
                    return Err(CoreError::RetriesExhausted {
                        category: category.to_string(),
                        attempts,
                    });
                }
            }
        };

        let slot = self.cursor;
        self.store.write(slot, &record)?;
        info!(category, slot, "stored joke");

        self.cursor = if self.cursor == RING_SLOTS - 1 {
            0
        } else {
            self.cursor + 1
        };

        Ok(slot)
    }

    /// Syncs the underlying store to durable storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the sync fails.
    pub fn sync(&self) -> CoreResult<()> {
        Ok(self.store.sync()?)
    }
}

impl<S: RecordStore, J> std::fmt::Debug for Catalog<S, J> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("record_size", &self.store.record_size())
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}
