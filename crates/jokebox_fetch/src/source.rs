//! Joke source trait definition and test fakes.

use crate::error::{FetchError, FetchResult};
use parking_lot::Mutex;
use std::collections::VecDeque;

/// Sentinel text the original application stored in place of a failed fetch.
///
/// Callers that opt into the legacy behavior encode and store this string
/// like any other joke; it is then subject to the same duplicate check.
pub const FALLBACK_JOKE: &str = "Error fetching a joke.";

/// Categories JokeAPI serves.
///
/// `"Any"` asks the API to pick a category itself.
pub const KNOWN_CATEGORIES: &[&str] = &[
    "Any",
    "Misc",
    "Programming",
    "Christmas",
    "Pun",
    "Spooky",
    "Dark",
];

/// A source of joke text for a requested category.
///
/// Implement this trait to provide the actual transport. The production
/// implementation is [`super::HttpJokeSource`]; tests use
/// [`ScriptedSource`]. Fetching is blocking and may stall arbitrarily long
/// unless the implementation enforces its own timeout.
pub trait JokeSource: Send + Sync {
    /// Fetches one joke for the given category.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] on any transport, status, or parse failure.
    /// Implementations never substitute sentinel text themselves; that
    /// decision belongs to the caller.
    fn fetch(&self, category: &str) -> FetchResult<String>;
}

/// A queue-backed joke source for tests.
///
/// Pops pre-scripted responses in order, ignoring the requested category.
/// Once the queue is empty every fetch fails with
/// [`FetchError::Exhausted`], which makes runaway retry loops fail fast in
/// tests instead of spinning.
///
/// # Example
///
/// ```
/// use jokebox_fetch::{JokeSource, ScriptedSource};
///
/// let source = ScriptedSource::new(["first", "second"]);
/// assert_eq!(source.fetch("Misc").unwrap(), "first");
/// assert_eq!(source.fetch("Misc").unwrap(), "second");
/// assert!(source.fetch("Misc").is_err());
/// ```
#[derive(Debug, Default)]
pub struct ScriptedSource {
    responses: Mutex<VecDeque<String>>,
}

impl ScriptedSource {
    /// Creates a source that will serve the given responses in order.
    pub fn new<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            responses: Mutex::new(responses.into_iter().map(Into::into).collect()),
        }
    }

    /// Appends another response to the end of the queue.
    pub fn push(&self, response: impl Into<String>) {
        self.responses.lock().push_back(response.into());
    }

    /// Returns the number of responses left in the queue.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.responses.lock().len()
    }
}

impl JokeSource for ScriptedSource {
    fn fetch(&self, _category: &str) -> FetchResult<String> {
        self.responses
            .lock()
            .pop_front()
            .ok_or(FetchError::Exhausted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_source_serves_in_order() {
        let source = ScriptedSource::new(["a", "b", "c"]);
        assert_eq!(source.remaining(), 3);
        assert_eq!(source.fetch("Misc").unwrap(), "a");
        assert_eq!(source.fetch("Programming").unwrap(), "b");
        assert_eq!(source.fetch("Any").unwrap(), "c");
    }

    #[test]
    fn exhausted_source_errors() {
        let source = ScriptedSource::new(Vec::<String>::new());
        assert!(matches!(source.fetch("Misc"), Err(FetchError::Exhausted)));
    }

    #[test]
    fn push_extends_queue() {
        let source = ScriptedSource::default();
        source.push("late addition");
        assert_eq!(source.fetch("Misc").unwrap(), "late addition");
    }
}
