//! Next command implementation.
//!
//! Reproduces the display-side read bands of the original UI: Misc jokes
//! occupy slots `[0, 5)` and Programming jokes slots `[5, 10)`, each band
//! read cyclically. The CLI is stateless across runs, so the band cursor is
//! passed in and the advanced value is printed for the next invocation.

use jokebox_codec::{decode_category, decode_content};
use jokebox_storage::{FileStore, RecordStore};
use std::path::Path;

/// Slots per display band.
const BAND_WIDTH: u64 = 5;

/// Resolves a category name to its band's base slot.
fn band_base(category: &str) -> Result<u64, String> {
    match category.to_ascii_lowercase().as_str() {
        "misc" => Ok(0),
        "programming" => Ok(BAND_WIDTH),
        other => Err(format!(
            "unknown display category {other:?} (expected misc or programming)"
        )),
    }
}

/// Runs the next command.
pub fn run(
    path: &Path,
    record_size: usize,
    category: &str,
    cursor: u64,
) -> Result<(), Box<dyn std::error::Error>> {
    let base = band_base(category)?;
    let slot = base + (cursor % BAND_WIDTH);

    let store = FileStore::open(path, record_size)?;
    let record = store.read(slot)?;
    if record.is_empty() {
        return Err(format!("slot {slot} is empty; run `jokebox refresh` first").into());
    }

    println!("Category: {}", decode_category(&record)?);
    println!("{}", decode_content(&record)?);
    println!("(slot {slot}; pass --cursor {} for the next joke)", cursor + 1);
    Ok(())
}
