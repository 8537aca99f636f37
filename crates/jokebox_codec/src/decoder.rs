//! Fixed-layout record decoder.
//!
//! Decoding is only ever applied by the presentation side: slice the fixed
//! regions back out of a record and strip the trailing zero padding the
//! encoder added. Records are stored and deduplicated as raw bytes, so the
//! decoder never participates in equality.

use crate::encoder::CATEGORY_WIDTH;
use crate::error::{CodecError, CodecResult};

/// Extracts the category label from a record's header region.
///
/// Trailing zero padding is stripped; non-UTF-8 bytes are replaced.
///
/// # Errors
///
/// Returns [`CodecError::TruncatedRecord`] if the buffer is shorter than
/// the fixed header width (a short final slot cut inside the header).
pub fn decode_category(record: &[u8]) -> CodecResult<String> {
    if record.len() < CATEGORY_WIDTH {
        return Err(CodecError::TruncatedRecord {
            len: record.len(),
            header: CATEGORY_WIDTH,
        });
    }

    Ok(strip_padding(&record[..CATEGORY_WIDTH]))
}

/// Extracts the joke text from a record's body region.
///
/// Trailing zero padding is stripped; non-UTF-8 bytes are replaced.
///
/// # Errors
///
/// Returns [`CodecError::TruncatedRecord`] if the buffer is shorter than
/// the fixed header width, leaving no body region at all.
pub fn decode_content(record: &[u8]) -> CodecResult<String> {
    if record.len() < CATEGORY_WIDTH {
        return Err(CodecError::TruncatedRecord {
            len: record.len(),
            header: CATEGORY_WIDTH,
        });
    }

    Ok(strip_padding(&record[CATEGORY_WIDTH..]))
}

fn strip_padding(region: &[u8]) -> String {
    let end = region
        .iter()
        .rposition(|&b| b != 0)
        .map_or(0, |pos| pos + 1);
    String::from_utf8_lossy(&region[..end]).into_owned()
}
