//! Error types for jokebox core.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in catalog operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Record store error.
    #[error("storage error: {0}")]
    Storage(#[from] jokebox_storage::StorageError),

    /// Record encoding error.
    #[error("codec error: {0}")]
    Codec(#[from] jokebox_codec::CodecError),

    /// Remote fetch error.
    ///
    /// Only surfaced when the catalog is configured to reject failed
    /// fetches; with [`crate::Config::store_fetch_errors`] enabled the
    /// fallback text is stored instead.
    #[error("fetch error: {0}")]
    Fetch(#[from] jokebox_fetch::FetchError),

    /// The duplicate-retry bound was hit before a unique joke arrived.
    #[error("gave up after {attempts} duplicate fetches for category {category}")]
    RetriesExhausted {
        /// The category being fetched.
        category: String,
        /// Number of duplicate fetches observed.
        attempts: u32,
    },
}
