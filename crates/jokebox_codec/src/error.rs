//! Error types for the codec crate.

use thiserror::Error;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur during encoding or decoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The requested record size cannot hold the fixed category header.
    #[error("record size {size} is smaller than the {header} byte category header")]
    RecordTooSmall {
        /// The rejected record size.
        size: usize,
        /// The fixed header width.
        header: usize,
    },

    /// The buffer is too short to contain the fixed category header.
    #[error("record of {len} bytes is truncated before the {header} byte category header ends")]
    TruncatedRecord {
        /// Length of the rejected buffer.
        len: usize,
        /// The fixed header width.
        header: usize,
    },
}
