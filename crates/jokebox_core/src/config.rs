//! Catalog configuration.

/// Configuration for a [`crate::Catalog`].
#[derive(Debug, Clone)]
pub struct Config {
    /// Upper bound on duplicate-fetch retries per `fetch_and_store` call.
    ///
    /// `None` retries until a unique joke arrives, which is the reference
    /// behavior but spins forever against a source that keeps returning the
    /// same cached text.
    pub max_duplicate_retries: Option<u32>,

    /// Whether a failed fetch stores the fallback text
    /// ([`jokebox_fetch::FALLBACK_JOKE`]) as ordinary joke content instead
    /// of surfacing an error.
    ///
    /// The stored fallback is deduplicated like any other content, so at
    /// most one copy ever lands in the store.
    pub store_fetch_errors: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_duplicate_retries: Some(64),
            store_fetch_errors: false,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the duplicate-retry bound; `None` retries indefinitely.
    #[must_use]
    pub const fn max_duplicate_retries(mut self, value: Option<u32>) -> Self {
        self.max_duplicate_retries = value;
        self
    }

    /// Sets whether failed fetches store the fallback text.
    #[must_use]
    pub const fn store_fetch_errors(mut self, value: bool) -> Self {
        self.store_fetch_errors = value;
        self
    }
}
