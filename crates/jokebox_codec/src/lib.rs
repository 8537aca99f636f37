//! # jokebox codec
//!
//! Fixed-layout record encoding/decoding for jokebox.
//!
//! Every record is a single fixed-width byte buffer partitioned into two
//! regions:
//!
//! - **header**: bytes `[0, 15)` hold the category label, left-justified
//!   and zero-padded (truncated at 15 bytes)
//! - **body**: bytes `[15, record_size)` hold the joke text, zero-padded
//!   (truncated at `record_size - 15` bytes)
//!
//! The header width is a fixed constant and is not configurable; only the
//! total record size varies per store.
//!
//! Encoding is deterministic: identical inputs at identical sizes produce
//! identical bytes, padding included. Duplicate detection upstream compares
//! raw record bytes, so any nondeterminism here would break it.
//!
//! ## Usage
//!
//! ```
//! use jokebox_codec::{decode_content, encode, CATEGORY_WIDTH};
//!
//! let record = encode("Pun", "I knead dough.", 64).unwrap();
//! assert_eq!(record.len(), 64);
//! assert_eq!(&record[..3], b"Pun");
//! assert_eq!(record[3], 0);
//! assert_eq!(decode_content(&record).unwrap(), "I knead dough.");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod decoder;
mod encoder;
mod error;

pub use decoder::{decode_category, decode_content};
pub use encoder::{encode, CATEGORY_WIDTH, DEFAULT_RECORD_SIZE};
pub use error::{CodecError, CodecResult};
