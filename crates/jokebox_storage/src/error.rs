//! Error types for storage operations.

use std::io;
use thiserror::Error;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// An I/O error occurred while opening, seeking, reading, or writing
    /// the backing file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The requested record size is invalid (zero).
    #[error("invalid record size: {size}")]
    InvalidRecordSize {
        /// The rejected record size.
        size: usize,
    },
}
