//! Fixed-layout record encoder.

use crate::error::{CodecError, CodecResult};

/// Width of the category header region in bytes.
///
/// The first `CATEGORY_WIDTH` bytes of every record hold the category label;
/// this width is fixed regardless of the total record size.
pub const CATEGORY_WIDTH: usize = 15;

/// Record size substituted when a caller passes `size == 0`.
pub const DEFAULT_RECORD_SIZE: usize = 500;

/// Encodes a category and joke text into a fixed-size record.
///
/// Produces a zeroed buffer of `size` bytes (or [`DEFAULT_RECORD_SIZE`] when
/// `size` is zero), then copies up to [`CATEGORY_WIDTH`] bytes of `category`
/// into the header region and up to `size - CATEGORY_WIDTH` bytes of
/// `content` into the body region. Shorter inputs leave zero padding in
/// place; longer inputs are truncated at the region boundary.
///
/// The output is deterministic: two calls with equal inputs and sizes yield
/// byte-identical buffers.
///
/// # Errors
///
/// Returns [`CodecError::RecordTooSmall`] if `size` is nonzero but smaller
/// than [`CATEGORY_WIDTH`], since the body region would have negative width.
///
/// # Example
///
/// ```
/// use jokebox_codec::encode;
///
/// let record = encode("Category", "Knock Knock", 30).unwrap();
/// assert_eq!(record.len(), 30);
/// assert_eq!(record[0], b'C');
/// assert_eq!(record[15], b'K');
/// ```
pub fn encode(category: &str, content: &str, size: usize) -> CodecResult<Vec<u8>> {
    let size = if size == 0 { DEFAULT_RECORD_SIZE } else { size };

    if size < CATEGORY_WIDTH {
        return Err(CodecError::RecordTooSmall {
            size,
            header: CATEGORY_WIDTH,
        });
    }

    let mut record = vec![0u8; size];

    let category_bytes = category.as_bytes();
    let content_bytes = content.as_bytes();

    let category_len = category_bytes.len().min(CATEGORY_WIDTH);
    let content_len = content_bytes.len().min(size - CATEGORY_WIDTH);

    record[..category_len].copy_from_slice(&category_bytes[..category_len]);
    record[CATEGORY_WIDTH..CATEGORY_WIDTH + content_len]
        .copy_from_slice(&content_bytes[..content_len]);

    Ok(record)
}
