//! The joke domain type.

use jokebox_codec::CodecResult;
use std::cmp::Ordering;
use std::fmt;

/// Width of the comparison window, in characters.
const COMPARE_WINDOW: usize = 10;

/// A single joke: a category label plus its text content.
///
/// Immutable once constructed. Ordering and equality are defined on
/// **content only** - the category does not participate. Two equal-length
/// contents compare by their first ten characters, so jokes of the same
/// length sharing a ten-character prefix are considered equal even when
/// they diverge later; different-length contents compare by length. This
/// matches the upstream application's semantics and is deliberately
/// preserved (the comparison is incidental - the store itself deduplicates
/// on raw record bytes, not on this ordering).
#[derive(Debug, Clone)]
pub struct Joke {
    category: String,
    content: String,
}

impl Joke {
    /// Creates a joke from a category label and text content.
    pub fn new(category: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            content: content.into(),
        }
    }

    /// Returns the category label.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the joke text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Encodes this joke as a fixed-size record.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is nonzero but too small to hold the
    /// category header.
    pub fn to_record(&self, size: usize) -> CodecResult<Vec<u8>> {
        jokebox_codec::encode(&self.category, &self.content, size)
    }
}

impl Ord for Joke {
    /// Compares by content length, then by the first ten characters of each
    /// content when the lengths are equal.
    ///
    /// The window is clamped to the available characters, so contents
    /// shorter than ten characters compare without panicking. Both
    /// operands contribute their own window (the upstream implementation
    /// compared one operand's prefix against itself; that defect is not
    /// reproduced here).
    fn cmp(&self, other: &Self) -> Ordering {
        let this_len = self.content.chars().count();
        let other_len = other.content.chars().count();

        if this_len == other_len {
            self.content
                .chars()
                .take(COMPARE_WINDOW)
                .cmp(other.content.chars().take(COMPARE_WINDOW))
        } else {
            this_len.cmp(&other_len)
        }
    }
}

impl PartialOrd for Joke {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Joke {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Joke {}

impl fmt::Display for Joke {
    /// Formats as a category line plus a ten-character content preview.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let preview: String = self.content.chars().take(COMPARE_WINDOW).collect();
        write!(f, "Category: {}\nJoke: {}", self.category, preview)
    }
}
